// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: SortDirection
/// Canonical URL: http://hl7.org/fhir/sort-direction
/// Title: Sort Direction
/// Status: active
///
/// The possible sort directions, ascending or descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "SortDirection",
    system = "http://hl7.org/fhir/sort-direction",
    version = "4.0.1"
)]
pub enum SortDirection {
    /// Display: Ascending
    ///
    /// Definition: Sort by the value ascending, so that lower values appear first.
    #[code(
        value = "ascending",
        display = "Ascending",
        definition = "Sort by the value ascending, so that lower values appear first."
    )]
    Ascending,
    /// Display: Descending
    ///
    /// Definition: Sort by the value descending, so that lower values appear last.
    #[code(
        value = "descending",
        display = "Descending",
        definition = "Sort by the value descending, so that lower values appear last."
    )]
    Descending,
}
/// Coded [`SortDirection`] value: optional `id`, `extension` and member code.
pub type SortDirectionCode = Coded<SortDirection>;
