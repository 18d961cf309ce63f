// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: MedicationRequestStatus
/// Canonical URL: http://hl7.org/fhir/CodeSystem/medicationrequest-status
/// Title: Medication Request Status
/// Status: active
///
/// A coded concept specifying the state of the prescribing event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "MedicationRequestStatus",
    system = "http://hl7.org/fhir/CodeSystem/medicationrequest-status",
    version = "4.0.1"
)]
pub enum MedicationRequestStatus {
    /// Display: Active
    ///
    /// Definition: The prescription is 'actionable', but not all actions that are implied by it have occurred yet.
    #[code(
        value = "active",
        display = "Active",
        definition = "The prescription is 'actionable', but not all actions that are implied by it have occurred yet."
    )]
    Active,
    /// Display: On Hold
    ///
    /// Definition: Actions implied by the prescription are to be temporarily halted, but are expected to continue later.
    #[code(
        value = "on-hold",
        display = "On Hold",
        definition = "Actions implied by the prescription are to be temporarily halted, but are expected to continue later."
    )]
    OnHold,
    /// Display: Cancelled
    ///
    /// Definition: The prescription has been withdrawn before any administrations have occurred.
    #[code(
        value = "cancelled",
        display = "Cancelled",
        definition = "The prescription has been withdrawn before any administrations have occurred."
    )]
    Cancelled,
    /// Display: Completed
    ///
    /// Definition: All actions that are implied by the prescription have occurred.
    #[code(
        value = "completed",
        display = "Completed",
        definition = "All actions that are implied by the prescription have occurred."
    )]
    Completed,
    /// Display: Entered in Error
    ///
    /// Definition: Some of the actions that are implied by the medication request may have occurred.
    #[code(
        value = "entered-in-error",
        display = "Entered in Error",
        definition = "Some of the actions that are implied by the medication request may have occurred."
    )]
    EnteredInError,
    /// Display: Stopped
    ///
    /// Definition: Actions implied by the prescription are to be permanently halted, before all of the administrations occurred.
    #[code(
        value = "stopped",
        display = "Stopped",
        definition = "Actions implied by the prescription are to be permanently halted, before all of the administrations occurred."
    )]
    Stopped,
    /// Display: Draft
    ///
    /// Definition: The prescription is not yet 'actionable', e.g. it is a work in progress, requires sign-off, verification or needs to be run through decision support process.
    #[code(
        value = "draft",
        display = "Draft",
        definition = "The prescription is not yet 'actionable', e.g. it is a work in progress, requires sign-off, verification or needs to be run through decision support process."
    )]
    Draft,
    /// Display: Unknown
    ///
    /// Definition: The authoring/source system does not know which of the status values currently applies for this observation.
    #[code(
        value = "unknown",
        display = "Unknown",
        definition = "The authoring/source system does not know which of the status values currently applies for this observation."
    )]
    Unknown,
}
/// Coded [`MedicationRequestStatus`] value: optional `id`, `extension` and member code.
pub type MedicationRequestStatusCode = Coded<MedicationRequestStatus>;
