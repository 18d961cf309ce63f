// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: NarrativeStatus
/// Canonical URL: http://hl7.org/fhir/narrative-status
/// Title: Narrative Status
/// Status: active
///
/// The status of a resource narrative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "NarrativeStatus",
    system = "http://hl7.org/fhir/narrative-status",
    version = "4.0.1"
)]
pub enum NarrativeStatus {
    /// Display: Generated
    ///
    /// Definition: The contents of the narrative are entirely generated from the core elements in the content.
    #[code(
        value = "generated",
        display = "Generated",
        definition = "The contents of the narrative are entirely generated from the core elements in the content."
    )]
    Generated,
    /// Display: Extensions
    ///
    /// Definition: The contents of the narrative are entirely generated from the core elements in the content and some of the content is generated from extensions.
    #[code(
        value = "extensions",
        display = "Extensions",
        definition = "The contents of the narrative are entirely generated from the core elements in the content and some of the content is generated from extensions."
    )]
    Extensions,
    /// Display: Additional
    ///
    /// Definition: The contents of the narrative may contain additional information not found in the structured data.
    #[code(
        value = "additional",
        display = "Additional",
        definition = "The contents of the narrative may contain additional information not found in the structured data."
    )]
    Additional,
    /// Display: Empty
    ///
    /// Definition: The contents of the narrative are some equivalent of "No human-readable text provided in this case".
    #[code(
        value = "empty",
        display = "Empty",
        definition = "The contents of the narrative are some equivalent of \"No human-readable text provided in this case\"."
    )]
    Empty,
}
/// Coded [`NarrativeStatus`] value: optional `id`, `extension` and member code.
pub type NarrativeStatusCode = Coded<NarrativeStatus>;
