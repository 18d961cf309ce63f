// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: DetectedIssueSeverity
/// Canonical URL: http://hl7.org/fhir/detectedissue-severity
/// Title: Detected Issue Severity
/// Status: active
///
/// Indicates the potential degree of impact of the identified issue on the patient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "DetectedIssueSeverity",
    system = "http://hl7.org/fhir/detectedissue-severity",
    version = "4.0.1"
)]
pub enum DetectedIssueSeverity {
    /// Display: High
    ///
    /// Definition: Indicates the issue may be life-threatening or has the potential to cause permanent injury.
    #[code(
        value = "high",
        display = "High",
        definition = "Indicates the issue may be life-threatening or has the potential to cause permanent injury."
    )]
    High,
    /// Display: Moderate
    ///
    /// Definition: Indicates the issue may result in noticeable adverse consequences but is unlikely to be life-threatening or cause permanent injury.
    #[code(
        value = "moderate",
        display = "Moderate",
        definition = "Indicates the issue may result in noticeable adverse consequences but is unlikely to be life-threatening or cause permanent injury."
    )]
    Moderate,
    /// Display: Low
    ///
    /// Definition: Indicates the issue may result in some adverse consequences but is unlikely to substantially affect the situation of the subject.
    #[code(
        value = "low",
        display = "Low",
        definition = "Indicates the issue may result in some adverse consequences but is unlikely to substantially affect the situation of the subject."
    )]
    Low,
}
/// Coded [`DetectedIssueSeverity`] value: optional `id`, `extension` and member code.
pub type DetectedIssueSeverityCode = Coded<DetectedIssueSeverity>;
