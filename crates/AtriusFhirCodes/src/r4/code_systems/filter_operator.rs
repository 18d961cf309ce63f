// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: FilterOperator
/// Canonical URL: http://hl7.org/fhir/filter-operator
/// Title: Filter Operator
/// Status: active
///
/// The kind of operation to perform as a part of a property based filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "FilterOperator",
    system = "http://hl7.org/fhir/filter-operator",
    version = "4.0.1"
)]
pub enum FilterOperator {
    /// Display: Equals
    ///
    /// Definition: The specified property of the code equals the provided value.
    #[code(
        value = "=",
        display = "Equals",
        definition = "The specified property of the code equals the provided value."
    )]
    Eq,
    /// Display: Is A (by subsumption)
    ///
    /// Definition: Includes all concept ids that have a transitive is-a relationship with the concept Id provided as the value, including the provided concept itself.
    #[code(
        value = "is-a",
        display = "Is A (by subsumption)",
        definition = "Includes all concept ids that have a transitive is-a relationship with the concept Id provided as the value, including the provided concept itself."
    )]
    IsA,
    /// Display: Descendent Of (by subsumption)
    ///
    /// Definition: Includes all concept ids that have a transitive is-a relationship with the concept Id provided as the value, excluding the provided concept itself.
    #[code(
        value = "descendent-of",
        display = "Descendent Of (by subsumption)",
        definition = "Includes all concept ids that have a transitive is-a relationship with the concept Id provided as the value, excluding the provided concept itself."
    )]
    DescendentOf,
    /// Display: Not (Is A) (by subsumption)
    ///
    /// Definition: The specified property of the code does not have an is-a relationship with the provided value.
    #[code(
        value = "is-not-a",
        display = "Not (Is A) (by subsumption)",
        definition = "The specified property of the code does not have an is-a relationship with the provided value."
    )]
    IsNotA,
    /// Display: Regular Expression
    ///
    /// Definition: The specified property of the code matches the regex specified in the provided value.
    #[code(
        value = "regex",
        display = "Regular Expression",
        definition = "The specified property of the code matches the regex specified in the provided value."
    )]
    Regex,
    /// Display: In Set
    ///
    /// Definition: The specified property of the code is in the set of codes or concepts specified in the provided value (comma separated list).
    #[code(
        value = "in",
        display = "In Set",
        definition = "The specified property of the code is in the set of codes or concepts specified in the provided value (comma separated list)."
    )]
    In,
    /// Display: Not in Set
    ///
    /// Definition: The specified property of the code is not in the set of codes or concepts specified in the provided value (comma separated list).
    #[code(
        value = "not-in",
        display = "Not in Set",
        definition = "The specified property of the code is not in the set of codes or concepts specified in the provided value (comma separated list)."
    )]
    NotIn,
    /// Display: Generalizes (by Subsumption)
    ///
    /// Definition: Includes all concept ids that have a transitive is-a relationship from the concept Id provided as the value, including the provided concept itself (include descendant codes and self).
    #[code(
        value = "generalizes",
        display = "Generalizes (by Subsumption)",
        definition = "Includes all concept ids that have a transitive is-a relationship from the concept Id provided as the value, including the provided concept itself (include descendant codes and self)."
    )]
    Generalizes,
    /// Display: Exists
    ///
    /// Definition: The specified property of the code has at least one value (if the specified value is true; if the specified value is false, then matches when the specified property of the code has no values).
    #[code(
        value = "exists",
        display = "Exists",
        definition = "The specified property of the code has at least one value (if the specified value is true; if the specified value is false, then matches when the specified property of the code has no values)."
    )]
    Exists,
}
/// Coded [`FilterOperator`] value: optional `id`, `extension` and member code.
pub type FilterOperatorCode = Coded<FilterOperator>;
