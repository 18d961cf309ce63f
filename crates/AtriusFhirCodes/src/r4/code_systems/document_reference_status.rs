// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: DocumentReferenceStatus
/// Canonical URL: http://hl7.org/fhir/document-reference-status
/// Title: Document Reference Status
/// Status: active
///
/// The status of the document reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "DocumentReferenceStatus",
    system = "http://hl7.org/fhir/document-reference-status",
    version = "4.0.1"
)]
pub enum DocumentReferenceStatus {
    /// Display: Current
    ///
    /// Definition: This is the current reference for this document.
    #[code(
        value = "current",
        display = "Current",
        definition = "This is the current reference for this document."
    )]
    Current,
    /// Display: Superseded
    ///
    /// Definition: This reference has been superseded by another reference.
    #[code(
        value = "superseded",
        display = "Superseded",
        definition = "This reference has been superseded by another reference."
    )]
    Superseded,
    /// Display: Entered in Error
    ///
    /// Definition: This reference was created in error.
    #[code(
        value = "entered-in-error",
        display = "Entered in Error",
        definition = "This reference was created in error."
    )]
    EnteredInError,
}
/// Coded [`DocumentReferenceStatus`] value: optional `id`, `extension` and member code.
pub type DocumentReferenceStatusCode = Coded<DocumentReferenceStatus>;
