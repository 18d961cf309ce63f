// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: ImmunizationStatus
/// Canonical URL: http://hl7.org/fhir/event-status
/// Title: Immunization Status
/// Status: active
///
/// A set of codes indicating the current status of an Immunization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "ImmunizationStatus",
    system = "http://hl7.org/fhir/event-status",
    version = "4.0.1"
)]
pub enum ImmunizationStatus {
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
    /// Display: Not Done
    ///
    /// Definition: The event was terminated prior to any activity beyond preparation.
    #[code(
        value = "not-done",
        display = "Not Done",
        definition = "The event was terminated prior to any activity beyond preparation."
    )]
    NotDone,
}
/// Coded [`ImmunizationStatus`] value: optional `id`, `extension` and member code.
pub type ImmunizationStatusCode = Coded<ImmunizationStatus>;
