// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: SearchComparator
/// Canonical URL: http://hl7.org/fhir/search-comparator
/// Title: Search Comparator
/// Status: active
///
/// What Search Comparator Codes are supported in search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "SearchComparator",
    system = "http://hl7.org/fhir/search-comparator",
    version = "4.0.1"
)]
pub enum SearchComparator {
    /// Display: Equals
    ///
    /// Definition: the value for the parameter in the resource is equal to the provided value.
    #[code(
        value = "eq",
        display = "Equals",
        definition = "the value for the parameter in the resource is equal to the provided value."
    )]
    Eq,
    /// Display: Not Equals
    ///
    /// Definition: the value for the parameter in the resource is not equal to the provided value.
    #[code(
        value = "ne",
        display = "Not Equals",
        definition = "the value for the parameter in the resource is not equal to the provided value."
    )]
    Ne,
    /// Display: Greater Than
    ///
    /// Definition: the value for the parameter in the resource is greater than the provided value.
    #[code(
        value = "gt",
        display = "Greater Than",
        definition = "the value for the parameter in the resource is greater than the provided value."
    )]
    Gt,
    /// Display: Less Than
    ///
    /// Definition: the value for the parameter in the resource is less than the provided value.
    #[code(
        value = "lt",
        display = "Less Than",
        definition = "the value for the parameter in the resource is less than the provided value."
    )]
    Lt,
    /// Display: Greater or Equals
    ///
    /// Definition: the value for the parameter in the resource is greater or equal to the provided value.
    #[code(
        value = "ge",
        display = "Greater or Equals",
        definition = "the value for the parameter in the resource is greater or equal to the provided value."
    )]
    Ge,
    /// Display: Less of Equal
    ///
    /// Definition: the value for the parameter in the resource is less or equal to the provided value.
    #[code(
        value = "le",
        display = "Less of Equal",
        definition = "the value for the parameter in the resource is less or equal to the provided value."
    )]
    Le,
    /// Display: Starts After
    ///
    /// Definition: the value for the parameter in the resource starts after the provided value.
    #[code(
        value = "sa",
        display = "Starts After",
        definition = "the value for the parameter in the resource starts after the provided value."
    )]
    Sa,
    /// Display: Ends Before
    ///
    /// Definition: the value for the parameter in the resource ends before the provided value.
    #[code(
        value = "eb",
        display = "Ends Before",
        definition = "the value for the parameter in the resource ends before the provided value."
    )]
    Eb,
    /// Display: Approximately
    ///
    /// Definition: the value for the parameter in the resource is approximately the same to the provided value.
    #[code(
        value = "ap",
        display = "Approximately",
        definition = "the value for the parameter in the resource is approximately the same to the provided value."
    )]
    Ap,
}
/// Coded [`SearchComparator`] value: optional `id`, `extension` and member code.
pub type SearchComparatorCode = Coded<SearchComparator>;
