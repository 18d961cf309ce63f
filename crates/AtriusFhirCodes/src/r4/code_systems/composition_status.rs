// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: CompositionStatus
/// Canonical URL: http://hl7.org/fhir/composition-status
/// Title: Composition Status
/// Status: active
///
/// The workflow/clinical status of the composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "CompositionStatus",
    system = "http://hl7.org/fhir/composition-status",
    version = "4.0.1"
)]
pub enum CompositionStatus {
    /// Display: Preliminary
    ///
    /// Definition: This is a preliminary composition or document (also known as initial or interim).
    #[code(
        value = "preliminary",
        display = "Preliminary",
        definition = "This is a preliminary composition or document (also known as initial or interim)."
    )]
    Preliminary,
    /// Display: Final
    ///
    /// Definition: This version of the composition is complete and verified by an appropriate person and no further work is planned.
    #[code(
        value = "final",
        display = "Final",
        definition = "This version of the composition is complete and verified by an appropriate person and no further work is planned."
    )]
    Final,
    /// Display: Amended
    ///
    /// Definition: The composition content or the referenced resources have been modified (edited or added to) subsequent to being released as "final".
    #[code(
        value = "amended",
        display = "Amended",
        definition = "The composition content or the referenced resources have been modified (edited or added to) subsequent to being released as \"final\"."
    )]
    Amended,
    /// Display: Entered in Error
    ///
    /// Definition: The composition or document was originally created/issued in error, and this is an amendment that marks that the entire series should not be considered as valid.
    #[code(
        value = "entered-in-error",
        display = "Entered in Error",
        definition = "The composition or document was originally created/issued in error, and this is an amendment that marks that the entire series should not be considered as valid."
    )]
    EnteredInError,
}
/// Coded [`CompositionStatus`] value: optional `id`, `extension` and member code.
pub type CompositionStatusCode = Coded<CompositionStatus>;
