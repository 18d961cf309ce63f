// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: SlotStatus
/// Canonical URL: http://hl7.org/fhir/slotstatus
/// Title: Slot Status
/// Status: active
///
/// The free/busy status of the slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "SlotStatus",
    system = "http://hl7.org/fhir/slotstatus",
    version = "4.0.1"
)]
pub enum SlotStatus {
    /// Display: Busy
    ///
    /// Definition: Indicates that the time interval is busy because one or more events have been scheduled for that interval.
    #[code(
        value = "busy",
        display = "Busy",
        definition = "Indicates that the time interval is busy because one or more events have been scheduled for that interval."
    )]
    Busy,
    /// Display: Free
    ///
    /// Definition: Indicates that the time interval is free for scheduling.
    #[code(
        value = "free",
        display = "Free",
        definition = "Indicates that the time interval is free for scheduling."
    )]
    Free,
    /// Display: Busy (Unavailable)
    ///
    /// Definition: Indicates that the time interval is busy and that the interval cannot be scheduled.
    #[code(
        value = "busy-unavailable",
        display = "Busy (Unavailable)",
        definition = "Indicates that the time interval is busy and that the interval cannot be scheduled."
    )]
    BusyUnavailable,
    /// Display: Busy (Tentative)
    ///
    /// Definition: Indicates that the time interval is busy because one or more events have been tentatively scheduled for that interval.
    #[code(
        value = "busy-tentative",
        display = "Busy (Tentative)",
        definition = "Indicates that the time interval is busy because one or more events have been tentatively scheduled for that interval."
    )]
    BusyTentative,
    /// Display: Entered in error
    ///
    /// Definition: This instance should not have been part of this patient's medical record.
    #[code(
        value = "entered-in-error",
        display = "Entered in error",
        definition = "This instance should not have been part of this patient's medical record."
    )]
    EnteredInError,
}
/// Coded [`SlotStatus`] value: optional `id`, `extension` and member code.
pub type SlotStatusCode = Coded<SlotStatus>;
