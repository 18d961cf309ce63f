// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: AllergyIntoleranceCriticality
/// Canonical URL: http://hl7.org/fhir/allergy-intolerance-criticality
/// Title: Allergy Intolerance Criticality
/// Status: active
///
/// Estimate of the potential clinical harm, or seriousness, of a reaction to an identified substance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "AllergyIntoleranceCriticality",
    system = "http://hl7.org/fhir/allergy-intolerance-criticality",
    version = "4.0.1"
)]
pub enum AllergyIntoleranceCriticality {
    /// Display: Low Risk
    ///
    /// Definition: Worst case result of a future exposure is not assessed to be life-threatening or having high potential for organ system failure.
    #[code(
        value = "low",
        display = "Low Risk",
        definition = "Worst case result of a future exposure is not assessed to be life-threatening or having high potential for organ system failure."
    )]
    Low,
    /// Display: High Risk
    ///
    /// Definition: Worst case result of a future exposure is assessed to be life-threatening or having high potential for organ system failure.
    #[code(
        value = "high",
        display = "High Risk",
        definition = "Worst case result of a future exposure is assessed to be life-threatening or having high potential for organ system failure."
    )]
    High,
    /// Display: Unable to Assess Risk
    ///
    /// Definition: Unable to assess the worst case result of a future exposure.
    #[code(
        value = "unable-to-assess",
        display = "Unable to Assess Risk",
        definition = "Unable to assess the worst case result of a future exposure."
    )]
    UnableToAssess,
}
/// Coded [`AllergyIntoleranceCriticality`] value: optional `id`, `extension` and member code.
pub type AllergyIntoleranceCriticalityCode = Coded<AllergyIntoleranceCriticality>;
