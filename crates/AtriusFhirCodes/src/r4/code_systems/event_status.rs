// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: EventStatus
/// Canonical URL: http://hl7.org/fhir/event-status
/// Title: Event Status
/// Status: active
///
/// Codes identifying the lifecycle stage of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "EventStatus",
    system = "http://hl7.org/fhir/event-status",
    version = "4.0.1"
)]
pub enum EventStatus {
    /// Display: Preparation
    ///
    /// Definition: The core event has not started yet, but some staging activities have begun.
    #[code(
        value = "preparation",
        display = "Preparation",
        definition = "The core event has not started yet, but some staging activities have begun."
    )]
    Preparation,
    /// Display: In Progress
    ///
    /// Definition: The event is currently occurring.
    #[code(
        value = "in-progress",
        display = "In Progress",
        definition = "The event is currently occurring."
    )]
    InProgress,
    /// Display: Not Done
    ///
    /// Definition: The event was terminated prior to any activity beyond preparation.
    #[code(
        value = "not-done",
        display = "Not Done",
        definition = "The event was terminated prior to any activity beyond preparation."
    )]
    NotDone,
    /// Display: On Hold
    ///
    /// Definition: The event has been temporarily stopped but is expected to resume in the future.
    #[code(
        value = "on-hold",
        display = "On Hold",
        definition = "The event has been temporarily stopped but is expected to resume in the future."
    )]
    OnHold,
    /// Display: Stopped
    ///
    /// Definition: The event was terminated prior to the full completion of the intended activity but after at least some of the 'main' activity was performed.
    #[code(
        value = "stopped",
        display = "Stopped",
        definition = "The event was terminated prior to the full completion of the intended activity but after at least some of the 'main' activity was performed."
    )]
    Stopped,
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
    /// Definition: This electronic record should never have existed, though it is possible that real-world decisions were based on it.
    #[code(
        value = "entered-in-error",
        display = "Entered in Error",
        definition = "This electronic record should never have existed, though it is possible that real-world decisions were based on it."
    )]
    EnteredInError,
    /// Display: Unknown
    ///
    /// Definition: The authoring/source system does not know which of the status values currently applies for this event.
    #[code(
        value = "unknown",
        display = "Unknown",
        definition = "The authoring/source system does not know which of the status values currently applies for this event."
    )]
    Unknown,
}
/// Coded [`EventStatus`] value: optional `id`, `extension` and member code.
pub type EventStatusCode = Coded<EventStatus>;
