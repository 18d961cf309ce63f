// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: RemittanceOutcome
/// Canonical URL: http://hl7.org/fhir/remittance-outcome
/// Title: Remittance Outcome
/// Status: active
///
/// The outcome of the processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "RemittanceOutcome",
    system = "http://hl7.org/fhir/remittance-outcome",
    version = "4.0.1"
)]
pub enum RemittanceOutcome {
    /// Display: Queued
    ///
    /// Definition: The Claim/Pre-authorization/Pre-determination has been received but processing has not begun.
    #[code(
        value = "queued",
        display = "Queued",
        definition = "The Claim/Pre-authorization/Pre-determination has been received but processing has not begun."
    )]
    Queued,
    /// Display: Processing Complete
    ///
    /// Definition: The processing has completed without errors.
    #[code(
        value = "complete",
        display = "Processing Complete",
        definition = "The processing has completed without errors."
    )]
    Complete,
    /// Display: Error
    ///
    /// Definition: One or more errors have been detected in the Claim.
    #[code(
        value = "error",
        display = "Error",
        definition = "One or more errors have been detected in the Claim."
    )]
    Error,
    /// Display: Partial Processing
    ///
    /// Definition: No errors have been detected in the Claim and some of the adjudication has been performed.
    #[code(
        value = "partial",
        display = "Partial Processing",
        definition = "No errors have been detected in the Claim and some of the adjudication has been performed."
    )]
    Partial,
}
/// Coded [`RemittanceOutcome`] value: optional `id`, `extension` and member code.
pub type RemittanceOutcomeCode = Coded<RemittanceOutcome>;
