// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: EncounterStatus
/// Canonical URL: http://hl7.org/fhir/encounter-status
/// Title: Encounter Status
/// Status: active
///
/// Current state of the encounter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "EncounterStatus",
    system = "http://hl7.org/fhir/encounter-status",
    version = "4.0.1"
)]
pub enum EncounterStatus {
    /// Display: Planned
    ///
    /// Definition: The Encounter has not yet started.
    #[code(
        value = "planned",
        display = "Planned",
        definition = "The Encounter has not yet started."
    )]
    Planned,
    /// Display: Arrived
    ///
    /// Definition: The Patient is present for the encounter, however is not currently meeting with a practitioner.
    #[code(
        value = "arrived",
        display = "Arrived",
        definition = "The Patient is present for the encounter, however is not currently meeting with a practitioner."
    )]
    Arrived,
    /// Display: Triaged
    ///
    /// Definition: The patient has been assessed for the priority of their treatment based on the severity of their condition.
    #[code(
        value = "triaged",
        display = "Triaged",
        definition = "The patient has been assessed for the priority of their treatment based on the severity of their condition."
    )]
    Triaged,
    /// Display: In Progress
    ///
    /// Definition: The Encounter has begun and the patient is present / the practitioner and the patient are meeting.
    #[code(
        value = "in-progress",
        display = "In Progress",
        definition = "The Encounter has begun and the patient is present / the practitioner and the patient are meeting."
    )]
    InProgress,
    /// Display: On Leave
    ///
    /// Definition: The Encounter has begun, but the patient is temporarily on leave.
    #[code(
        value = "onleave",
        display = "On Leave",
        definition = "The Encounter has begun, but the patient is temporarily on leave."
    )]
    Onleave,
    /// Display: Finished
    ///
    /// Definition: The Encounter has ended.
    #[code(
        value = "finished",
        display = "Finished",
        definition = "The Encounter has ended."
    )]
    Finished,
    /// Display: Cancelled
    ///
    /// Definition: The Encounter has ended before it has begun.
    #[code(
        value = "cancelled",
        display = "Cancelled",
        definition = "The Encounter has ended before it has begun."
    )]
    Cancelled,
    /// Display: Entered in Error
    ///
    /// Definition: This instance should not have been part of this patient's medical record.
    #[code(
        value = "entered-in-error",
        display = "Entered in Error",
        definition = "This instance should not have been part of this patient's medical record."
    )]
    EnteredInError,
    /// Display: Unknown
    ///
    /// Definition: The encounter status is unknown.
    #[code(
        value = "unknown",
        display = "Unknown",
        definition = "The encounter status is unknown."
    )]
    Unknown,
}
/// Coded [`EncounterStatus`] value: optional `id`, `extension` and member code.
pub type EncounterStatusCode = Coded<EncounterStatus>;
/// Legacy name of [`EncounterStatus`].
#[deprecated(note = "use `EncounterStatus`")]
pub type EncounterStatusValueSet = EncounterStatus;
