// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: AuditEventAgentNetworkType
/// Canonical URL: http://hl7.org/fhir/network-type
/// Title: Audit Event Agent Network Type
/// Status: active
///
/// The type of network access point of this agent in the audit event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "AuditEventAgentNetworkType",
    system = "http://hl7.org/fhir/network-type",
    version = "4.0.1"
)]
pub enum AuditEventAgentNetworkType {
    /// Display: Machine Name
    ///
    /// Definition: The machine name, including DNS name.
    #[code(
        value = "1",
        display = "Machine Name",
        definition = "The machine name, including DNS name."
    )]
    N1,
    /// Display: IP Address
    ///
    /// Definition: The assigned Internet Protocol (IP) address.
    #[code(
        value = "2",
        display = "IP Address",
        definition = "The assigned Internet Protocol (IP) address."
    )]
    N2,
    /// Display: Telephone Number
    ///
    /// Definition: The assigned telephone number.
    #[code(
        value = "3",
        display = "Telephone Number",
        definition = "The assigned telephone number."
    )]
    N3,
    /// Display: Email address
    ///
    /// Definition: The assigned email address.
    #[code(
        value = "4",
        display = "Email address",
        definition = "The assigned email address."
    )]
    N4,
    /// Display: URI
    ///
    /// Definition: URI (User directory, HTTP-PUT, ftp, etc.).
    #[code(
        value = "5",
        display = "URI",
        definition = "URI (User directory, HTTP-PUT, ftp, etc.)."
    )]
    N5,
}
/// Coded [`AuditEventAgentNetworkType`] value: optional `id`, `extension` and member code.
pub type AuditEventAgentNetworkTypeCode = Coded<AuditEventAgentNetworkType>;
