// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: EventCapabilityMode
/// Canonical URL: http://hl7.org/fhir/event-capability-mode
/// Title: Event Capability Mode
/// Status: active
///
/// The mode of a message capability statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "EventCapabilityMode",
    system = "http://hl7.org/fhir/event-capability-mode",
    version = "4.0.1"
)]
pub enum EventCapabilityMode {
    /// Display: Sender
    ///
    /// Definition: The application sends requests and receives responses.
    #[code(
        value = "sender",
        display = "Sender",
        definition = "The application sends requests and receives responses."
    )]
    Sender,
    /// Display: Receiver
    ///
    /// Definition: The application receives requests and sends responses.
    #[code(
        value = "receiver",
        display = "Receiver",
        definition = "The application receives requests and sends responses."
    )]
    Receiver,
}
/// Coded [`EventCapabilityMode`] value: optional `id`, `extension` and member code.
pub type EventCapabilityModeCode = Coded<EventCapabilityMode>;
