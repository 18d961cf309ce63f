// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: ActionParticipantType
/// Canonical URL: http://hl7.org/fhir/action-participant-type
/// Title: Action Participant Type
/// Status: active
///
/// The type of participant for the action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "ActionParticipantType",
    system = "http://hl7.org/fhir/action-participant-type",
    version = "4.0.1"
)]
pub enum ActionParticipantType {
    /// Display: Patient
    ///
    /// Definition: The participant is the patient under evaluation.
    #[code(
        value = "patient",
        display = "Patient",
        definition = "The participant is the patient under evaluation."
    )]
    Patient,
    /// Display: Practitioner
    ///
    /// Definition: The participant is a practitioner involved in the patient's care.
    #[code(
        value = "practitioner",
        display = "Practitioner",
        definition = "The participant is a practitioner involved in the patient's care."
    )]
    Practitioner,
    /// Display: Related Person
    ///
    /// Definition: The participant is a person related to the patient.
    #[code(
        value = "related-person",
        display = "Related Person",
        definition = "The participant is a person related to the patient."
    )]
    RelatedPerson,
    /// Display: Device
    ///
    /// Definition: The participant is a system or device used in the care of the patient.
    #[code(
        value = "device",
        display = "Device",
        definition = "The participant is a system or device used in the care of the patient."
    )]
    Device,
}
/// Coded [`ActionParticipantType`] value: optional `id`, `extension` and member code.
pub type ActionParticipantTypeCode = Coded<ActionParticipantType>;
