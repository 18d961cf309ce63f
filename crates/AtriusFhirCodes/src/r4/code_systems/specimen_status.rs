// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: SpecimenStatus
/// Canonical URL: http://hl7.org/fhir/specimen-status
/// Title: Specimen Status
/// Status: active
///
/// Codes providing the status/availability of a specimen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "SpecimenStatus",
    system = "http://hl7.org/fhir/specimen-status",
    version = "4.0.1"
)]
pub enum SpecimenStatus {
    /// Display: Available
    ///
    /// Definition: The physical specimen is present and in good condition.
    #[code(
        value = "available",
        display = "Available",
        definition = "The physical specimen is present and in good condition."
    )]
    Available,
    /// Display: Unavailable
    ///
    /// Definition: There is no physical specimen because it is either lost, destroyed or consumed.
    #[code(
        value = "unavailable",
        display = "Unavailable",
        definition = "There is no physical specimen because it is either lost, destroyed or consumed."
    )]
    Unavailable,
    /// Display: Unsatisfactory
    ///
    /// Definition: The specimen cannot be used because of a quality issue such as a broken container, contamination, or too old.
    #[code(
        value = "unsatisfactory",
        display = "Unsatisfactory",
        definition = "The specimen cannot be used because of a quality issue such as a broken container, contamination, or too old."
    )]
    Unsatisfactory,
    /// Display: Entered in Error
    ///
    /// Definition: The specimen was entered in error and therefore nullified.
    #[code(
        value = "entered-in-error",
        display = "Entered in Error",
        definition = "The specimen was entered in error and therefore nullified."
    )]
    EnteredInError,
}
/// Coded [`SpecimenStatus`] value: optional `id`, `extension` and member code.
pub type SpecimenStatusCode = Coded<SpecimenStatus>;
