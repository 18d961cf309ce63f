// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: EndpointStatus
/// Canonical URL: http://hl7.org/fhir/endpoint-status
/// Title: Endpoint Status
/// Status: active
///
/// The status of the endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "EndpointStatus",
    system = "http://hl7.org/fhir/endpoint-status",
    version = "4.0.1"
)]
pub enum EndpointStatus {
    /// Display: Active
    ///
    /// Definition: This endpoint is expected to be active and can be used.
    #[code(
        value = "active",
        display = "Active",
        definition = "This endpoint is expected to be active and can be used."
    )]
    Active,
    /// Display: Suspended
    ///
    /// Definition: This endpoint is temporarily unavailable.
    #[code(
        value = "suspended",
        display = "Suspended",
        definition = "This endpoint is temporarily unavailable."
    )]
    Suspended,
    /// Display: Error
    ///
    /// Definition: This endpoint has exceeded connectivity thresholds and is considered in an error state and should no longer be attempted to connect to until corrective action is taken.
    #[code(
        value = "error",
        display = "Error",
        definition = "This endpoint has exceeded connectivity thresholds and is considered in an error state and should no longer be attempted to connect to until corrective action is taken."
    )]
    Error,
    /// Display: Off
    ///
    /// Definition: This endpoint is no longer to be used.
    #[code(
        value = "off",
        display = "Off",
        definition = "This endpoint is no longer to be used."
    )]
    Off,
    /// Display: Entered in error
    ///
    /// Definition: This instance should not have been part of this patient's medical record.
    #[code(
        value = "entered-in-error",
        display = "Entered in error",
        definition = "This instance should not have been part of this patient's medical record."
    )]
    EnteredInError,
    /// Display: Test
    ///
    /// Definition: This endpoint is not intended for production usage.
    #[code(
        value = "test",
        display = "Test",
        definition = "This endpoint is not intended for production usage."
    )]
    Test,
}
/// Coded [`EndpointStatus`] value: optional `id`, `extension` and member code.
pub type EndpointStatusCode = Coded<EndpointStatus>;
