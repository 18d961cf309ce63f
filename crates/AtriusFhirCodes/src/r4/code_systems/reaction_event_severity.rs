// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: AllergyIntoleranceSeverity
/// Canonical URL: http://hl7.org/fhir/reaction-event-severity
/// Title: Allergy Intolerance Severity
/// Status: active
///
/// Clinical assessment of the severity of a reaction event as a whole, potentially considering multiple different manifestations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "AllergyIntoleranceSeverity",
    system = "http://hl7.org/fhir/reaction-event-severity",
    version = "4.0.1"
)]
pub enum AllergyIntoleranceSeverity {
    /// Display: Mild
    ///
    /// Definition: Causes mild physiological effects.
    #[code(
        value = "mild",
        display = "Mild",
        definition = "Causes mild physiological effects."
    )]
    Mild,
    /// Display: Moderate
    ///
    /// Definition: Causes moderate physiological effects.
    #[code(
        value = "moderate",
        display = "Moderate",
        definition = "Causes moderate physiological effects."
    )]
    Moderate,
    /// Display: Severe
    ///
    /// Definition: Causes severe physiological effects.
    #[code(
        value = "severe",
        display = "Severe",
        definition = "Causes severe physiological effects."
    )]
    Severe,
}
/// Coded [`AllergyIntoleranceSeverity`] value: optional `id`, `extension` and member code.
pub type AllergyIntoleranceSeverityCode = Coded<AllergyIntoleranceSeverity>;
