// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: ConditionalReadStatus
/// Canonical URL: http://hl7.org/fhir/conditional-read-status
/// Title: Conditional Read Status
/// Status: active
///
/// A code that indicates how the server supports conditional read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "ConditionalReadStatus",
    system = "http://hl7.org/fhir/conditional-read-status",
    version = "4.0.1"
)]
pub enum ConditionalReadStatus {
    /// Display: Not Supported
    ///
    /// Definition: No support for conditional reads.
    #[code(
        value = "not-supported",
        display = "Not Supported",
        definition = "No support for conditional reads."
    )]
    NotSupported,
    /// Display: If-Modified-Since
    ///
    /// Definition: Conditional reads are supported, but only with the If-Modified-Since HTTP Header.
    #[code(
        value = "modified-since",
        display = "If-Modified-Since",
        definition = "Conditional reads are supported, but only with the If-Modified-Since HTTP Header."
    )]
    ModifiedSince,
    /// Display: If-None-Match
    ///
    /// Definition: Conditional reads are supported, but only with the If-None-Match HTTP Header.
    #[code(
        value = "not-match",
        display = "If-None-Match",
        definition = "Conditional reads are supported, but only with the If-None-Match HTTP Header."
    )]
    NotMatch,
    /// Display: Full Support
    ///
    /// Definition: Conditional reads are supported, with both If-Modified-Since and If-None-Match HTTP Headers.
    #[code(
        value = "full-support",
        display = "Full Support",
        definition = "Conditional reads are supported, with both If-Modified-Since and If-None-Match HTTP Headers."
    )]
    FullSupport,
}
/// Coded [`ConditionalReadStatus`] value: optional `id`, `extension` and member code.
pub type ConditionalReadStatusCode = Coded<ConditionalReadStatus>;
