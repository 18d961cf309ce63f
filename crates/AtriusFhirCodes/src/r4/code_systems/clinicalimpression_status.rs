// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: ClinicalImpressionStatus
/// Canonical URL: http://hl7.org/fhir/event-status
/// Title: Clinical Impression Status
/// Status: active
///
/// Codes that reflect the current state of a clinical impression within its overall lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "ClinicalImpressionStatus",
    system = "http://hl7.org/fhir/event-status",
    version = "4.0.1"
)]
pub enum ClinicalImpressionStatus {
    /// Display: In Progress
    ///
    /// Definition: The event is currently occurring.
    #[code(
        value = "in-progress",
        display = "In Progress",
        definition = "The event is currently occurring."
    )]
    InProgress,
    /// Display: Completed
    ///
    /// Definition: The event has now concluded.
    #[code(
        value = "completed",
        display = "Completed",
        definition = "The event has now concluded."
    )]
    Completed,
    /// Display: Entered in Error
    ///
    /// Definition: This electronic record should never have existed.
    #[code(
        value = "entered-in-error",
        display = "Entered in Error",
        definition = "This electronic record should never have existed."
    )]
    EnteredInError,
}
/// Coded [`ClinicalImpressionStatus`] value: optional `id`, `extension` and member code.
pub type ClinicalImpressionStatusCode = Coded<ClinicalImpressionStatus>;
