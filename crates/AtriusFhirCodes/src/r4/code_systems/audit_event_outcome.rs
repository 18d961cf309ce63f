// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: AuditEventOutcome
/// Canonical URL: http://hl7.org/fhir/audit-event-outcome
/// Title: Audit Event Outcome
/// Status: active
///
/// Indicates whether the event succeeded or failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "AuditEventOutcome",
    system = "http://hl7.org/fhir/audit-event-outcome",
    version = "4.0.1"
)]
pub enum AuditEventOutcome {
    /// Display: Success
    ///
    /// Definition: The operation completed successfully (whether with warnings or not).
    #[code(
        value = "0",
        display = "Success",
        definition = "The operation completed successfully (whether with warnings or not)."
    )]
    N0,
    /// Display: Minor failure
    ///
    /// Definition: The action was not successful due to some kind of minor failure (often equivalent to an HTTP 400 response).
    #[code(
        value = "4",
        display = "Minor failure",
        definition = "The action was not successful due to some kind of minor failure (often equivalent to an HTTP 400 response)."
    )]
    N4,
    /// Display: Serious failure
    ///
    /// Definition: The action was not successful due to some kind of unexpected error (often equivalent to an HTTP 500 response).
    #[code(
        value = "8",
        display = "Serious failure",
        definition = "The action was not successful due to some kind of unexpected error (often equivalent to an HTTP 500 response)."
    )]
    N8,
    /// Display: Major failure
    ///
    /// Definition: An error of such magnitude occurred that the system is no longer available for use (i.e. the system died).
    #[code(
        value = "12",
        display = "Major failure",
        definition = "An error of such magnitude occurred that the system is no longer available for use (i.e. the system died)."
    )]
    N12,
}
/// Coded [`AuditEventOutcome`] value: optional `id`, `extension` and member code.
pub type AuditEventOutcomeCode = Coded<AuditEventOutcome>;
