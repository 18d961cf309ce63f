// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: NoteType
/// Canonical URL: http://hl7.org/fhir/note-type
/// Title: Note Type
/// Status: active
///
/// The presentation types of notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "NoteType",
    system = "http://hl7.org/fhir/note-type",
    version = "4.0.1"
)]
pub enum NoteType {
    /// Display: Display
    ///
    /// Definition: Display the note.
    #[code(value = "display", display = "Display", definition = "Display the note.")]
    Display,
    /// Display: Print (Form)
    ///
    /// Definition: Print the note on the form.
    #[code(
        value = "print",
        display = "Print (Form)",
        definition = "Print the note on the form."
    )]
    Print,
    /// Display: Print (Operator)
    ///
    /// Definition: Print the note for the operator.
    #[code(
        value = "printoper",
        display = "Print (Operator)",
        definition = "Print the note for the operator."
    )]
    Printoper,
}
/// Coded [`NoteType`] value: optional `id`, `extension` and member code.
pub type NoteTypeCode = Coded<NoteType>;
