// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: TypeDerivationRule
/// Canonical URL: http://hl7.org/fhir/type-derivation-rule
/// Title: Type Derivation Rule
/// Status: active
///
/// How a type relates to its baseDefinition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "TypeDerivationRule",
    system = "http://hl7.org/fhir/type-derivation-rule",
    version = "4.0.1"
)]
pub enum TypeDerivationRule {
    /// Display: Specialization
    ///
    /// Definition: This definition defines a new type that adds additional elements to the base type.
    #[code(
        value = "specialization",
        display = "Specialization",
        definition = "This definition defines a new type that adds additional elements to the base type."
    )]
    Specialization,
    /// Display: Constraint
    ///
    /// Definition: This definition adds additional rules to an existing concrete type.
    #[code(
        value = "constraint",
        display = "Constraint",
        definition = "This definition adds additional rules to an existing concrete type."
    )]
    Constraint,
}
/// Coded [`TypeDerivationRule`] value: optional `id`, `extension` and member code.
pub type TypeDerivationRuleCode = Coded<TypeDerivationRule>;
