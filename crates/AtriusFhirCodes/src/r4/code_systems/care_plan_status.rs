// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: CarePlanStatus
/// Canonical URL: http://hl7.org/fhir/request-status
/// Title: Care Plan Status
/// Status: active
///
/// Indicates whether the plan is currently being acted upon, represents future intentions or is now a historical record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "CarePlanStatus",
    system = "http://hl7.org/fhir/request-status",
    version = "4.0.1"
)]
pub enum CarePlanStatus {
    /// Display: Draft
    ///
    /// Definition: The request has been created but is not yet complete or ready for action.
    #[code(
        value = "draft",
        display = "Draft",
        definition = "The request has been created but is not yet complete or ready for action."
    )]
    Draft,
    /// Display: Active
    ///
    /// Definition: The request is in force and ready to be acted upon.
    #[code(
        value = "active",
        display = "Active",
        definition = "The request is in force and ready to be acted upon."
    )]
    Active,
    /// Display: On Hold
    ///
    /// Definition: The request (and any implicit authorization to act) has been temporarily withdrawn but is expected to resume in the future.
    #[code(
        value = "on-hold",
        display = "On Hold",
        definition = "The request (and any implicit authorization to act) has been temporarily withdrawn but is expected to resume in the future."
    )]
    OnHold,
    /// Display: Revoked
    ///
    /// Definition: The request (and any implicit authorization to act) has been terminated prior to the known full completion of the intended actions.
    #[code(
        value = "revoked",
        display = "Revoked",
        definition = "The request (and any implicit authorization to act) has been terminated prior to the known full completion of the intended actions."
    )]
    Revoked,
    /// Display: Completed
    ///
    /// Definition: The activity described by the request has been fully performed.
    #[code(
        value = "completed",
        display = "Completed",
        definition = "The activity described by the request has been fully performed."
    )]
    Completed,
    /// Display: Entered in Error
    ///
    /// Definition: This request should never have existed and should be considered 'void'.
    #[code(
        value = "entered-in-error",
        display = "Entered in Error",
        definition = "This request should never have existed and should be considered 'void'."
    )]
    EnteredInError,
    /// Display: Unknown
    ///
    /// Definition: The authoring/source system does not know which of the status values currently applies for this request.
    #[code(
        value = "unknown",
        display = "Unknown",
        definition = "The authoring/source system does not know which of the status values currently applies for this request."
    )]
    Unknown,
}
/// Coded [`CarePlanStatus`] value: optional `id`, `extension` and member code.
pub type CarePlanStatusCode = Coded<CarePlanStatus>;
