// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: CodeSystemContentMode
/// Canonical URL: http://hl7.org/fhir/codesystem-content-mode
/// Title: Code System Content Mode
/// Status: active
///
/// The extent of the content of the code system (the concepts and codes it defines) are represented in a code system resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "CodeSystemContentMode",
    system = "http://hl7.org/fhir/codesystem-content-mode",
    version = "4.0.1"
)]
pub enum CodeSystemContentMode {
    /// Display: Not Present
    ///
    /// Definition: None of the concepts defined by the code system are included in the code system resource.
    #[code(
        value = "not-present",
        display = "Not Present",
        definition = "None of the concepts defined by the code system are included in the code system resource."
    )]
    NotPresent,
    /// Display: Example
    ///
    /// Definition: A few representative concepts are included in the code system resource.
    #[code(
        value = "example",
        display = "Example",
        definition = "A few representative concepts are included in the code system resource."
    )]
    Example,
    /// Display: Fragment
    ///
    /// Definition: A subset of the code system concepts are included in the code system resource.
    #[code(
        value = "fragment",
        display = "Fragment",
        definition = "A subset of the code system concepts are included in the code system resource."
    )]
    Fragment,
    /// Display: Complete
    ///
    /// Definition: All the concepts defined by the code system are included in the code system resource.
    #[code(
        value = "complete",
        display = "Complete",
        definition = "All the concepts defined by the code system are included in the code system resource."
    )]
    Complete,
    /// Display: Supplement
    ///
    /// Definition: The resource doesn't define any new concepts; it just provides additional designations and properties to another code system.
    #[code(
        value = "supplement",
        display = "Supplement",
        definition = "The resource doesn't define any new concepts; it just provides additional designations and properties to another code system."
    )]
    Supplement,
}
/// Coded [`CodeSystemContentMode`] value: optional `id`, `extension` and member code.
pub type CodeSystemContentModeCode = Coded<CodeSystemContentMode>;
