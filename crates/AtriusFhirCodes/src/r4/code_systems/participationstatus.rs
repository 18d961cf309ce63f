// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: ParticipationStatus
/// Canonical URL: http://hl7.org/fhir/participationstatus
/// Title: Participation Status
/// Status: active
///
/// The Participation status of an appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "ParticipationStatus",
    system = "http://hl7.org/fhir/participationstatus",
    version = "4.0.1"
)]
pub enum ParticipationStatus {
    /// Display: Accepted
    ///
    /// Definition: The participant has accepted the appointment.
    #[code(
        value = "accepted",
        display = "Accepted",
        definition = "The participant has accepted the appointment."
    )]
    Accepted,
    /// Display: Declined
    ///
    /// Definition: The participant has declined the appointment and will not participate in the appointment.
    #[code(
        value = "declined",
        display = "Declined",
        definition = "The participant has declined the appointment and will not participate in the appointment."
    )]
    Declined,
    /// Display: Tentative
    ///
    /// Definition: The participant has tentatively accepted the appointment.
    #[code(
        value = "tentative",
        display = "Tentative",
        definition = "The participant has tentatively accepted the appointment."
    )]
    Tentative,
    /// Display: Needs Action
    ///
    /// Definition: The participant needs to indicate if they accept the appointment by changing this status to one of the other statuses.
    #[code(
        value = "needs-action",
        display = "Needs Action",
        definition = "The participant needs to indicate if they accept the appointment by changing this status to one of the other statuses."
    )]
    NeedsAction,
}
/// Coded [`ParticipationStatus`] value: optional `id`, `extension` and member code.
pub type ParticipationStatusCode = Coded<ParticipationStatus>;
