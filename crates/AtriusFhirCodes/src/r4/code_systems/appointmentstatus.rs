// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: AppointmentStatus
/// Canonical URL: http://hl7.org/fhir/appointmentstatus
/// Title: Appointment Status
/// Status: active
///
/// The free/busy status of an appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "AppointmentStatus",
    system = "http://hl7.org/fhir/appointmentstatus",
    version = "4.0.1"
)]
pub enum AppointmentStatus {
    /// Display: Proposed
    ///
    /// Definition: None of the participant(s) have finalized their acceptance of the appointment request, and the start/end time might not be set yet.
    #[code(
        value = "proposed",
        display = "Proposed",
        definition = "None of the participant(s) have finalized their acceptance of the appointment request, and the start/end time might not be set yet."
    )]
    Proposed,
    /// Display: Pending
    ///
    /// Definition: Some or all of the participant(s) have not finalized their acceptance of the appointment request.
    #[code(
        value = "pending",
        display = "Pending",
        definition = "Some or all of the participant(s) have not finalized their acceptance of the appointment request."
    )]
    Pending,
    /// Display: Booked
    ///
    /// Definition: All participant(s) have been considered and the appointment is confirmed to go ahead at the date/times specified.
    #[code(
        value = "booked",
        display = "Booked",
        definition = "All participant(s) have been considered and the appointment is confirmed to go ahead at the date/times specified."
    )]
    Booked,
    /// Display: Arrived
    ///
    /// Definition: The patient/patients has/have arrived and is/are waiting to be seen.
    #[code(
        value = "arrived",
        display = "Arrived",
        definition = "The patient/patients has/have arrived and is/are waiting to be seen."
    )]
    Arrived,
    /// Display: Fulfilled
    ///
    /// Definition: The planning stages of the appointment are now complete, the encounter resource will exist and will track further status changes.
    #[code(
        value = "fulfilled",
        display = "Fulfilled",
        definition = "The planning stages of the appointment are now complete, the encounter resource will exist and will track further status changes."
    )]
    Fulfilled,
    /// Display: Cancelled
    ///
    /// Definition: The appointment has been cancelled.
    #[code(
        value = "cancelled",
        display = "Cancelled",
        definition = "The appointment has been cancelled."
    )]
    Cancelled,
    /// Display: No Show
    ///
    /// Definition: Some or all of the participant(s) have not/did not appear for the appointment.
    #[code(
        value = "noshow",
        display = "No Show",
        definition = "Some or all of the participant(s) have not/did not appear for the appointment."
    )]
    Noshow,
    /// Display: Entered in error
    ///
    /// Definition: This instance should not have been part of this patient's medical record.
    #[code(
        value = "entered-in-error",
        display = "Entered in error",
        definition = "This instance should not have been part of this patient's medical record."
    )]
    EnteredInError,
    /// Display: Checked In
    ///
    /// Definition: When checked in, all pre-encounter administrative work is complete, and the encounter may begin.
    #[code(
        value = "checked-in",
        display = "Checked In",
        definition = "When checked in, all pre-encounter administrative work is complete, and the encounter may begin."
    )]
    CheckedIn,
    /// Display: Waitlisted
    ///
    /// Definition: The appointment has been placed on a waitlist, to be scheduled/confirmed in the future when a slot/service is available.
    #[code(
        value = "waitlist",
        display = "Waitlisted",
        definition = "The appointment has been placed on a waitlist, to be scheduled/confirmed in the future when a slot/service is available."
    )]
    Waitlist,
}
/// Coded [`AppointmentStatus`] value: optional `id`, `extension` and member code.
pub type AppointmentStatusCode = Coded<AppointmentStatus>;
