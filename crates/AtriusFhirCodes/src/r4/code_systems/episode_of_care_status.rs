// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: EpisodeOfCareStatus
/// Canonical URL: http://hl7.org/fhir/episode-of-care-status
/// Title: Episode Of Care Status
/// Status: active
///
/// The status of the episode of care.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "EpisodeOfCareStatus",
    system = "http://hl7.org/fhir/episode-of-care-status",
    version = "4.0.1"
)]
pub enum EpisodeOfCareStatus {
    /// Display: Planned
    ///
    /// Definition: This episode of care is planned to start at the date specified in the period.start.
    #[code(
        value = "planned",
        display = "Planned",
        definition = "This episode of care is planned to start at the date specified in the period.start."
    )]
    Planned,
    /// Display: Waitlist
    ///
    /// Definition: This episode has been placed on a waitlist, pending the episode being made active.
    #[code(
        value = "waitlist",
        display = "Waitlist",
        definition = "This episode has been placed on a waitlist, pending the episode being made active."
    )]
    Waitlist,
    /// Display: Active
    ///
    /// Definition: This episode of care is current.
    #[code(
        value = "active",
        display = "Active",
        definition = "This episode of care is current."
    )]
    Active,
    /// Display: On Hold
    ///
    /// Definition: This episode of care is on hold; the organization has limited responsibility for the patient (such as while on respite).
    #[code(
        value = "onhold",
        display = "On Hold",
        definition = "This episode of care is on hold; the organization has limited responsibility for the patient (such as while on respite)."
    )]
    Onhold,
    /// Display: Finished
    ///
    /// Definition: This episode of care is finished and the organization is not expecting to be providing further care to the patient.
    #[code(
        value = "finished",
        display = "Finished",
        definition = "This episode of care is finished and the organization is not expecting to be providing further care to the patient."
    )]
    Finished,
    /// Display: Cancelled
    ///
    /// Definition: The episode of care was cancelled, or withdrawn from service, often selected during the planned stage as the patient may have gone elsewhere.
    #[code(
        value = "cancelled",
        display = "Cancelled",
        definition = "The episode of care was cancelled, or withdrawn from service, often selected during the planned stage as the patient may have gone elsewhere."
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
}
/// Coded [`EpisodeOfCareStatus`] value: optional `id`, `extension` and member code.
pub type EpisodeOfCareStatusCode = Coded<EpisodeOfCareStatus>;
