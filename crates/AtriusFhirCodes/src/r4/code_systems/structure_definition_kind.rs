// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: StructureDefinitionKind
/// Canonical URL: http://hl7.org/fhir/structure-definition-kind
/// Title: Structure Definition Kind
/// Status: active
///
/// Defines the type of structure that a definition is describing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "StructureDefinitionKind",
    system = "http://hl7.org/fhir/structure-definition-kind",
    version = "4.0.1"
)]
pub enum StructureDefinitionKind {
    /// Display: Primitive Data Type
    ///
    /// Definition: A primitive type that has a value and an extension.
    #[code(
        value = "primitive-type",
        display = "Primitive Data Type",
        definition = "A primitive type that has a value and an extension."
    )]
    PrimitiveType,
    /// Display: Complex Data Type
    ///
    /// Definition: A complex structure that defines a set of data elements that is suitable for use in 'resources'.
    #[code(
        value = "complex-type",
        display = "Complex Data Type",
        definition = "A complex structure that defines a set of data elements that is suitable for use in 'resources'."
    )]
    ComplexType,
    /// Display: Resource
    ///
    /// Definition: A 'resource' - a directed acyclic graph of elements that aggregrates other types into an identifiable entity.
    #[code(
        value = "resource",
        display = "Resource",
        definition = "A 'resource' - a directed acyclic graph of elements that aggregrates other types into an identifiable entity."
    )]
    Resource,
    /// Display: Logical
    ///
    /// Definition: A pattern or a template that is not intended to be a real resource or complex type.
    #[code(
        value = "logical",
        display = "Logical",
        definition = "A pattern or a template that is not intended to be a real resource or complex type."
    )]
    Logical,
}
/// Coded [`StructureDefinitionKind`] value: optional `id`, `extension` and member code.
pub type StructureDefinitionKindCode = Coded<StructureDefinitionKind>;
/// Legacy name of [`StructureDefinitionKind`].
#[deprecated(note = "use `StructureDefinitionKind`")]
pub type StructureDefinitionKindValueSet = StructureDefinitionKind;
