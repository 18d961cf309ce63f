// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: CodeSearchSupport
/// Canonical URL: http://hl7.org/fhir/code-search-support
/// Title: Code Search Support
/// Status: active
///
/// The degree to which the server supports the code search parameter on ValueSet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "CodeSearchSupport",
    system = "http://hl7.org/fhir/code-search-support",
    version = "4.0.1"
)]
pub enum CodeSearchSupport {
    /// Display: Explicit Codes
    ///
    /// Definition: The search for code on ValueSet only includes codes explicitly detailed on includes or expansions.
    #[code(
        value = "explicit",
        display = "Explicit Codes",
        definition = "The search for code on ValueSet only includes codes explicitly detailed on includes or expansions."
    )]
    Explicit,
    /// Display: Implicit Codes
    ///
    /// Definition: The search for code on ValueSet only includes all codes based on the expansion of the value set.
    #[code(
        value = "all",
        display = "Implicit Codes",
        definition = "The search for code on ValueSet only includes all codes based on the expansion of the value set."
    )]
    All,
}
/// Coded [`CodeSearchSupport`] value: optional `id`, `extension` and member code.
pub type CodeSearchSupportCode = Coded<CodeSearchSupport>;
