// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: ContributorType
/// Canonical URL: http://hl7.org/fhir/contributor-type
/// Title: Contributor Type
/// Status: active
///
/// The type of contributor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "ContributorType",
    system = "http://hl7.org/fhir/contributor-type",
    version = "4.0.1"
)]
pub enum ContributorType {
    /// Display: Author
    ///
    /// Definition: An author of the content of the module.
    #[code(
        value = "author",
        display = "Author",
        definition = "An author of the content of the module."
    )]
    Author,
    /// Display: Editor
    ///
    /// Definition: An editor of the content of the module.
    #[code(
        value = "editor",
        display = "Editor",
        definition = "An editor of the content of the module."
    )]
    Editor,
    /// Display: Reviewer
    ///
    /// Definition: A reviewer of the content of the module.
    #[code(
        value = "reviewer",
        display = "Reviewer",
        definition = "A reviewer of the content of the module."
    )]
    Reviewer,
    /// Display: Endorser
    ///
    /// Definition: An endorser of the content of the module.
    #[code(
        value = "endorser",
        display = "Endorser",
        definition = "An endorser of the content of the module."
    )]
    Endorser,
}
/// Coded [`ContributorType`] value: optional `id`, `extension` and member code.
pub type ContributorTypeCode = Coded<ContributorType>;
