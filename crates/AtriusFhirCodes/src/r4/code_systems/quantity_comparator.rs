// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: QuantityComparator
/// Canonical URL: http://hl7.org/fhir/quantity-comparator
/// Title: Quantity Comparator
/// Status: active
///
/// How the Quantity should be understood and represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "QuantityComparator",
    system = "http://hl7.org/fhir/quantity-comparator",
    version = "4.0.1"
)]
pub enum QuantityComparator {
    /// Display: Less than
    ///
    /// Definition: The actual value is less than the given value.
    #[code(
        value = "<",
        display = "Less than",
        definition = "The actual value is less than the given value."
    )]
    Lt,
    /// Display: Less or Equal to
    ///
    /// Definition: The actual value is less than or equal to the given value.
    #[code(
        value = "<=",
        display = "Less or Equal to",
        definition = "The actual value is less than or equal to the given value."
    )]
    Le,
    /// Display: Greater or Equal to
    ///
    /// Definition: The actual value is greater than or equal to the given value.
    #[code(
        value = ">=",
        display = "Greater or Equal to",
        definition = "The actual value is greater than or equal to the given value."
    )]
    Ge,
    /// Display: Greater than
    ///
    /// Definition: The actual value is greater than the given value.
    #[code(
        value = ">",
        display = "Greater than",
        definition = "The actual value is greater than the given value."
    )]
    Gt,
}
/// Coded [`QuantityComparator`] value: optional `id`, `extension` and member code.
pub type QuantityComparatorCode = Coded<QuantityComparator>;
