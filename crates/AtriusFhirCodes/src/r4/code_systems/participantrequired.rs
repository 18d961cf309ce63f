// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: ParticipantRequired
/// Canonical URL: http://hl7.org/fhir/participantrequired
/// Title: Participant Required
/// Status: active
///
/// Is the Participant required to attend the appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "ParticipantRequired",
    system = "http://hl7.org/fhir/participantrequired",
    version = "4.0.1"
)]
pub enum ParticipantRequired {
    /// Display: Required
    ///
    /// Definition: The participant is required to attend the appointment.
    #[code(
        value = "required",
        display = "Required",
        definition = "The participant is required to attend the appointment."
    )]
    Required,
    /// Display: Optional
    ///
    /// Definition: The participant may optionally attend the appointment.
    #[code(
        value = "optional",
        display = "Optional",
        definition = "The participant may optionally attend the appointment."
    )]
    Optional,
    /// Display: Information Only
    ///
    /// Definition: The participant is excluded from the appointment, and might not be informed of the appointment taking place.
    #[code(
        value = "information-only",
        display = "Information Only",
        definition = "The participant is excluded from the appointment, and might not be informed of the appointment taking place."
    )]
    InformationOnly,
}
/// Coded [`ParticipantRequired`] value: optional `id`, `extension` and member code.
pub type ParticipantRequiredCode = Coded<ParticipantRequired>;
