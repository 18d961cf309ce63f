// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: DocumentRelationshipType
/// Canonical URL: http://hl7.org/fhir/document-relationship-type
/// Title: Document Relationship Type
/// Status: active
///
/// The type of relationship between documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "DocumentRelationshipType",
    system = "http://hl7.org/fhir/document-relationship-type",
    version = "4.0.1"
)]
pub enum DocumentRelationshipType {
    /// Display: Replaces
    ///
    /// Definition: This document logically replaces or supersedes the target document.
    #[code(
        value = "replaces",
        display = "Replaces",
        definition = "This document logically replaces or supersedes the target document."
    )]
    Replaces,
    /// Display: Transforms
    ///
    /// Definition: This document was generated by transforming the target document (e.g. format or language conversion).
    #[code(
        value = "transforms",
        display = "Transforms",
        definition = "This document was generated by transforming the target document (e.g. format or language conversion)."
    )]
    Transforms,
    /// Display: Signs
    ///
    /// Definition: This document is a signature of the target document.
    #[code(
        value = "signs",
        display = "Signs",
        definition = "This document is a signature of the target document."
    )]
    Signs,
    /// Display: Appends
    ///
    /// Definition: This document adds additional information to the target document.
    #[code(
        value = "appends",
        display = "Appends",
        definition = "This document adds additional information to the target document."
    )]
    Appends,
}
/// Coded [`DocumentRelationshipType`] value: optional `id`, `extension` and member code.
pub type DocumentRelationshipTypeCode = Coded<DocumentRelationshipType>;
