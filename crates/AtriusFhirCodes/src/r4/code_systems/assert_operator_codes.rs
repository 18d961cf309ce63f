// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: AssertionOperatorType
/// Canonical URL: http://hl7.org/fhir/assert-operator-codes
/// Title: Assertion Operator Type
/// Status: active
///
/// The type of operator to use for assertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "AssertionOperatorType",
    system = "http://hl7.org/fhir/assert-operator-codes",
    version = "4.0.1"
)]
pub enum AssertionOperatorType {
    /// Display: equals
    ///
    /// Definition: Default value. Equals comparison.
    #[code(
        value = "equals",
        display = "equals",
        definition = "Default value. Equals comparison."
    )]
    Equals,
    /// Display: notEquals
    ///
    /// Definition: Not equals comparison.
    #[code(
        value = "notEquals",
        display = "notEquals",
        definition = "Not equals comparison."
    )]
    NotEquals,
    /// Display: in
    ///
    /// Definition: Compare value within a known set of values.
    #[code(
        value = "in",
        display = "in",
        definition = "Compare value within a known set of values."
    )]
    In,
    /// Display: notIn
    ///
    /// Definition: Compare value not within a known set of values.
    #[code(
        value = "notIn",
        display = "notIn",
        definition = "Compare value not within a known set of values."
    )]
    NotIn,
    /// Display: greaterThan
    ///
    /// Definition: Compare value to be greater than a known value.
    #[code(
        value = "greaterThan",
        display = "greaterThan",
        definition = "Compare value to be greater than a known value."
    )]
    GreaterThan,
    /// Display: lessThan
    ///
    /// Definition: Compare value to be less than a known value.
    #[code(
        value = "lessThan",
        display = "lessThan",
        definition = "Compare value to be less than a known value."
    )]
    LessThan,
    /// Display: empty
    ///
    /// Definition: Compare value is empty.
    #[code(value = "empty", display = "empty", definition = "Compare value is empty.")]
    Empty,
    /// Display: notEmpty
    ///
    /// Definition: Compare value is not empty.
    #[code(
        value = "notEmpty",
        display = "notEmpty",
        definition = "Compare value is not empty."
    )]
    NotEmpty,
    /// Display: contains
    ///
    /// Definition: Compare value string contains a known value.
    #[code(
        value = "contains",
        display = "contains",
        definition = "Compare value string contains a known value."
    )]
    Contains,
    /// Display: notContains
    ///
    /// Definition: Compare value string does not contain a known value.
    #[code(
        value = "notContains",
        display = "notContains",
        definition = "Compare value string does not contain a known value."
    )]
    NotContains,
    /// Display: evaluate
    ///
    /// Definition: Evaluate the FHIRPath expression as a boolean condition.
    #[code(
        value = "eval",
        display = "evaluate",
        definition = "Evaluate the FHIRPath expression as a boolean condition."
    )]
    Eval,
}
/// Coded [`AssertionOperatorType`] value: optional `id`, `extension` and member code.
pub type AssertionOperatorTypeCode = Coded<AssertionOperatorType>;
