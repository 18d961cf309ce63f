// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: CompositionAttestationMode
/// Canonical URL: http://hl7.org/fhir/composition-attestation-mode
/// Title: Composition Attestation Mode
/// Status: active
///
/// The way in which a person authenticated a composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "CompositionAttestationMode",
    system = "http://hl7.org/fhir/composition-attestation-mode",
    version = "4.0.1"
)]
pub enum CompositionAttestationMode {
    /// Display: Personal
    ///
    /// Definition: The person authenticated the content in their personal capacity.
    #[code(
        value = "personal",
        display = "Personal",
        definition = "The person authenticated the content in their personal capacity."
    )]
    Personal,
    /// Display: Professional
    ///
    /// Definition: The person authenticated the content in their professional capacity.
    #[code(
        value = "professional",
        display = "Professional",
        definition = "The person authenticated the content in their professional capacity."
    )]
    Professional,
    /// Display: Legal
    ///
    /// Definition: The person authenticated the content and accepted legal responsibility for its content.
    #[code(
        value = "legal",
        display = "Legal",
        definition = "The person authenticated the content and accepted legal responsibility for its content."
    )]
    Legal,
    /// Display: Official
    ///
    /// Definition: The organization authenticated the content as consistent with their policies and procedures.
    #[code(
        value = "official",
        display = "Official",
        definition = "The organization authenticated the content as consistent with their policies and procedures."
    )]
    Official,
}
/// Coded [`CompositionAttestationMode`] value: optional `id`, `extension` and member code.
pub type CompositionAttestationModeCode = Coded<CompositionAttestationMode>;
