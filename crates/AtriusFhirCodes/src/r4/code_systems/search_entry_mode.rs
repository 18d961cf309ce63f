// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: SearchEntryMode
/// Canonical URL: http://hl7.org/fhir/search-entry-mode
/// Title: Search Entry Mode
/// Status: active
///
/// Why an entry is in the result set - whether it's included as a match or because of an _include requirement, or to convey information or warning information about the search process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "SearchEntryMode",
    system = "http://hl7.org/fhir/search-entry-mode",
    version = "4.0.1"
)]
pub enum SearchEntryMode {
    /// Display: Match
    ///
    /// Definition: This resource matched the search specification.
    #[code(
        value = "match",
        display = "Match",
        definition = "This resource matched the search specification."
    )]
    Match,
    /// Display: Include
    ///
    /// Definition: This resource is returned because it is referred to from another resource in the search set.
    #[code(
        value = "include",
        display = "Include",
        definition = "This resource is returned because it is referred to from another resource in the search set."
    )]
    Include,
    /// Display: Outcome
    ///
    /// Definition: An OperationOutcome that provides additional information about the processing of a search.
    #[code(
        value = "outcome",
        display = "Outcome",
        definition = "An OperationOutcome that provides additional information about the processing of a search."
    )]
    Outcome,
}
/// Coded [`SearchEntryMode`] value: optional `id`, `extension` and member code.
pub type SearchEntryModeCode = Coded<SearchEntryMode>;
