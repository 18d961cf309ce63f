// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: CodeSystemHierarchyMeaning
/// Canonical URL: http://hl7.org/fhir/codesystem-hierarchy-meaning
/// Title: Code System Hierarchy Meaning
/// Status: active
///
/// The meaning of the hierarchy of concepts in a code system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "CodeSystemHierarchyMeaning",
    system = "http://hl7.org/fhir/codesystem-hierarchy-meaning",
    version = "4.0.1"
)]
pub enum CodeSystemHierarchyMeaning {
    /// Display: Grouped By
    ///
    /// Definition: No particular relationship between the concepts can be assumed, except what can be determined by inspection of the definitions of the elements.
    #[code(
        value = "grouped-by",
        display = "Grouped By",
        definition = "No particular relationship between the concepts can be assumed, except what can be determined by inspection of the definitions of the elements."
    )]
    GroupedBy,
    /// Display: Is-A
    ///
    /// Definition: A hierarchy where the child concepts have an IS-A relationship with the parents.
    #[code(
        value = "is-a",
        display = "Is-A",
        definition = "A hierarchy where the child concepts have an IS-A relationship with the parents."
    )]
    IsA,
    /// Display: Part Of
    ///
    /// Definition: Child elements list the individual parts of a composite whole (e.g. body site).
    #[code(
        value = "part-of",
        display = "Part Of",
        definition = "Child elements list the individual parts of a composite whole (e.g. body site)."
    )]
    PartOf,
    /// Display: Classified With
    ///
    /// Definition: Child concepts in the hierarchy may have only one parent, and there is a presumption that the code system is a "closed world".
    #[code(
        value = "classified-with",
        display = "Classified With",
        definition = "Child concepts in the hierarchy may have only one parent, and there is a presumption that the code system is a \"closed world\"."
    )]
    ClassifiedWith,
}
/// Coded [`CodeSystemHierarchyMeaning`] value: optional `id`, `extension` and member code.
pub type CodeSystemHierarchyMeaningCode = Coded<CodeSystemHierarchyMeaning>;
