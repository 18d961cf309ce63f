// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: AdministrativeGender
/// Canonical URL: http://hl7.org/fhir/administrative-gender
/// Title: Administrative Gender
/// Status: active
///
/// The gender of a person used for administrative purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "AdministrativeGender",
    system = "http://hl7.org/fhir/administrative-gender",
    version = "4.0.1"
)]
pub enum AdministrativeGender {
    /// Display: Male
    ///
    /// Definition: Male.
    #[code(value = "male", display = "Male", definition = "Male.")]
    Male,
    /// Display: Female
    ///
    /// Definition: Female.
    #[code(value = "female", display = "Female", definition = "Female.")]
    Female,
    /// Display: Other
    ///
    /// Definition: Other.
    #[code(value = "other", display = "Other", definition = "Other.")]
    Other,
    /// Display: Unknown
    ///
    /// Definition: Unknown.
    #[code(value = "unknown", display = "Unknown", definition = "Unknown.")]
    Unknown,
}
/// Coded [`AdministrativeGender`] value: optional `id`, `extension` and member code.
pub type AdministrativeGenderCode = Coded<AdministrativeGender>;
