// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: GuidanceResponseStatus
/// Canonical URL: http://hl7.org/fhir/guidance-response-status
/// Title: Guidance Response Status
/// Status: active
///
/// The status of a guidance response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "GuidanceResponseStatus",
    system = "http://hl7.org/fhir/guidance-response-status",
    version = "4.0.1"
)]
pub enum GuidanceResponseStatus {
    /// Display: Success
    ///
    /// Definition: The request was processed successfully.
    #[code(
        value = "success",
        display = "Success",
        definition = "The request was processed successfully."
    )]
    Success,
    /// Display: Data Requested
    ///
    /// Definition: The request was processed successfully, but more data may result in a more complete evaluation.
    #[code(
        value = "data-requested",
        display = "Data Requested",
        definition = "The request was processed successfully, but more data may result in a more complete evaluation."
    )]
    DataRequested,
    /// Display: Data Required
    ///
    /// Definition: The request was processed, but more data is required to complete the evaluation.
    #[code(
        value = "data-required",
        display = "Data Required",
        definition = "The request was processed, but more data is required to complete the evaluation."
    )]
    DataRequired,
    /// Display: In Progress
    ///
    /// Definition: The request is currently being processed.
    #[code(
        value = "in-progress",
        display = "In Progress",
        definition = "The request is currently being processed."
    )]
    InProgress,
    /// Display: Failure
    ///
    /// Definition: The request was not processed successfully.
    #[code(
        value = "failure",
        display = "Failure",
        definition = "The request was not processed successfully."
    )]
    Failure,
    /// Display: Entered In Error
    ///
    /// Definition: The response was entered in error.
    #[code(
        value = "entered-in-error",
        display = "Entered In Error",
        definition = "The response was entered in error."
    )]
    EnteredInError,
}
/// Coded [`GuidanceResponseStatus`] value: optional `id`, `extension` and member code.
pub type GuidanceResponseStatusCode = Coded<GuidanceResponseStatus>;
