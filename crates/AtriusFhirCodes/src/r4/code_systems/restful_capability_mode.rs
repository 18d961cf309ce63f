// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: RestfulCapabilityMode
/// Canonical URL: http://hl7.org/fhir/restful-capability-mode
/// Title: Restful Capability Mode
/// Status: active
///
/// The mode of a RESTful capability statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "RestfulCapabilityMode",
    system = "http://hl7.org/fhir/restful-capability-mode",
    version = "4.0.1"
)]
pub enum RestfulCapabilityMode {
    /// Display: Client
    ///
    /// Definition: The application acts as a client for this resource.
    #[code(
        value = "client",
        display = "Client",
        definition = "The application acts as a client for this resource."
    )]
    Client,
    /// Display: Server
    ///
    /// Definition: The application acts as a server for this resource.
    #[code(
        value = "server",
        display = "Server",
        definition = "The application acts as a server for this resource."
    )]
    Server,
}
/// Coded [`RestfulCapabilityMode`] value: optional `id`, `extension` and member code.
pub type RestfulCapabilityModeCode = Coded<RestfulCapabilityMode>;
