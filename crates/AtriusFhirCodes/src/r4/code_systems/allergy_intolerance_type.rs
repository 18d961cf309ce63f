// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: AllergyIntoleranceType
/// Canonical URL: http://hl7.org/fhir/allergy-intolerance-type
/// Title: Allergy Intolerance Type
/// Status: active
///
/// Identification of the underlying physiological mechanism for a Reaction Risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "AllergyIntoleranceType",
    system = "http://hl7.org/fhir/allergy-intolerance-type",
    version = "4.0.1"
)]
pub enum AllergyIntoleranceType {
    /// Display: Allergy
    ///
    /// Definition: A propensity for hypersensitive reaction(s) to a substance.
    #[code(
        value = "allergy",
        display = "Allergy",
        definition = "A propensity for hypersensitive reaction(s) to a substance."
    )]
    Allergy,
    /// Display: Intolerance
    ///
    /// Definition: A propensity for adverse reactions to a substance that is judged to be not allergic or "allergy-like".
    #[code(
        value = "intolerance",
        display = "Intolerance",
        definition = "A propensity for adverse reactions to a substance that is judged to be not allergic or \"allergy-like\"."
    )]
    Intolerance,
}
/// Coded [`AllergyIntoleranceType`] value: optional `id`, `extension` and member code.
pub type AllergyIntoleranceTypeCode = Coded<AllergyIntoleranceType>;
