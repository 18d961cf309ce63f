// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: ReferenceHandlingPolicy
/// Canonical URL: http://hl7.org/fhir/reference-handling-policy
/// Title: Reference Handling Policy
/// Status: active
///
/// A set of flags that defines how references are supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "ReferenceHandlingPolicy",
    system = "http://hl7.org/fhir/reference-handling-policy",
    version = "4.0.1"
)]
pub enum ReferenceHandlingPolicy {
    /// Display: Literal References
    ///
    /// Definition: The server supports and populates Literal references (i.e. using Reference.reference) where they are known (this code does not guarantee that all references are literal; see 'enforced').
    #[code(
        value = "literal",
        display = "Literal References",
        definition = "The server supports and populates Literal references (i.e. using Reference.reference) where they are known (this code does not guarantee that all references are literal; see 'enforced')."
    )]
    Literal,
    /// Display: Logical References
    ///
    /// Definition: The server allows logical references (i.e. using Reference.identifier).
    #[code(
        value = "logical",
        display = "Logical References",
        definition = "The server allows logical references (i.e. using Reference.identifier)."
    )]
    Logical,
    /// Display: Resolves References
    ///
    /// Definition: The server will attempt to resolve logical references to literal references - i.e. converting Reference.identifier to Reference.reference (if resolution fails, the server may still accept resources; see logical).
    #[code(
        value = "resolves",
        display = "Resolves References",
        definition = "The server will attempt to resolve logical references to literal references - i.e. converting Reference.identifier to Reference.reference (if resolution fails, the server may still accept resources; see logical)."
    )]
    Resolves,
    /// Display: Reference Integrity Enforced
    ///
    /// Definition: The server enforces that references have integrity - e.g. it ensures that references can always be resolved.
    #[code(
        value = "enforced",
        display = "Reference Integrity Enforced",
        definition = "The server enforces that references have integrity - e.g. it ensures that references can always be resolved."
    )]
    Enforced,
    /// Display: Local References Only
    ///
    /// Definition: The server does not support references that point to other servers.
    #[code(
        value = "local",
        display = "Local References Only",
        definition = "The server does not support references that point to other servers."
    )]
    Local,
}
/// Coded [`ReferenceHandlingPolicy`] value: optional `id`, `extension` and member code.
pub type ReferenceHandlingPolicyCode = Coded<ReferenceHandlingPolicy>;
