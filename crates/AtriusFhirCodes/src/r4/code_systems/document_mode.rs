// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: DocumentMode
/// Canonical URL: http://hl7.org/fhir/document-mode
/// Title: Document Mode
/// Status: active
///
/// Whether the application produces or consumes documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "DocumentMode",
    system = "http://hl7.org/fhir/document-mode",
    version = "4.0.1"
)]
pub enum DocumentMode {
    /// Display: Producer
    ///
    /// Definition: The application produces documents of the specified type.
    #[code(
        value = "producer",
        display = "Producer",
        definition = "The application produces documents of the specified type."
    )]
    Producer,
    /// Display: Consumer
    ///
    /// Definition: The application consumes documents of the specified type.
    #[code(
        value = "consumer",
        display = "Consumer",
        definition = "The application consumes documents of the specified type."
    )]
    Consumer,
}
/// Coded [`DocumentMode`] value: optional `id`, `extension` and member code.
pub type DocumentModeCode = Coded<DocumentMode>;
