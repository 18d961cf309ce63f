// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: HTTPVerb
/// Canonical URL: http://hl7.org/fhir/http-verb
/// Title: HTTP Verb
/// Status: active
///
/// HTTP verbs (in the HTTP command line).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "HTTPVerb",
    system = "http://hl7.org/fhir/http-verb",
    version = "4.0.1"
)]
pub enum HTTPVerb {
    /// Display: GET
    ///
    /// Definition: HTTP GET Command.
    #[code(value = "GET", display = "GET", definition = "HTTP GET Command.")]
    Get,
    /// Display: HEAD
    ///
    /// Definition: HTTP HEAD Command.
    #[code(value = "HEAD", display = "HEAD", definition = "HTTP HEAD Command.")]
    Head,
    /// Display: POST
    ///
    /// Definition: HTTP POST Command.
    #[code(value = "POST", display = "POST", definition = "HTTP POST Command.")]
    Post,
    /// Display: PUT
    ///
    /// Definition: HTTP PUT Command.
    #[code(value = "PUT", display = "PUT", definition = "HTTP PUT Command.")]
    Put,
    /// Display: DELETE
    ///
    /// Definition: HTTP DELETE Command.
    #[code(value = "DELETE", display = "DELETE", definition = "HTTP DELETE Command.")]
    Delete,
    /// Display: PATCH
    ///
    /// Definition: HTTP PATCH Command.
    #[code(value = "PATCH", display = "PATCH", definition = "HTTP PATCH Command.")]
    Patch,
}
/// Coded [`HTTPVerb`] value: optional `id`, `extension` and member code.
pub type HTTPVerbCode = Coded<HTTPVerb>;
