// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: PropertyType
/// Canonical URL: http://hl7.org/fhir/concept-property-type
/// Title: Property Type
/// Status: active
///
/// The type of a property value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "PropertyType",
    system = "http://hl7.org/fhir/concept-property-type",
    version = "4.0.1"
)]
pub enum PropertyType {
    /// Display: code (internal reference)
    ///
    /// Definition: The property value is a code that identifies a concept defined in the code system.
    #[code(
        value = "code",
        display = "code (internal reference)",
        definition = "The property value is a code that identifies a concept defined in the code system."
    )]
    Code,
    /// Display: Coding (external reference)
    ///
    /// Definition: The property value is a code defined in an external code system.
    #[code(
        value = "Coding",
        display = "Coding (external reference)",
        definition = "The property value is a code defined in an external code system."
    )]
    Coding,
    /// Display: string
    ///
    /// Definition: The property value is a string.
    #[code(
        value = "string",
        display = "string",
        definition = "The property value is a string."
    )]
    String,
    /// Display: integer
    ///
    /// Definition: The property value is a string (often used to assign ranking values to concepts for supporting score assessments).
    #[code(
        value = "integer",
        display = "integer",
        definition = "The property value is a string (often used to assign ranking values to concepts for supporting score assessments)."
    )]
    Integer,
    /// Display: boolean
    ///
    /// Definition: The property value is a boolean true | false.
    #[code(
        value = "boolean",
        display = "boolean",
        definition = "The property value is a boolean true | false."
    )]
    Boolean,
    /// Display: dateTime
    ///
    /// Definition: The property is a date or a date + time.
    #[code(
        value = "dateTime",
        display = "dateTime",
        definition = "The property is a date or a date + time."
    )]
    DateTime,
    /// Display: decimal
    ///
    /// Definition: The property value is a decimal number.
    #[code(
        value = "decimal",
        display = "decimal",
        definition = "The property value is a decimal number."
    )]
    Decimal,
}
/// Coded [`PropertyType`] value: optional `id`, `extension` and member code.
pub type PropertyTypeCode = Coded<PropertyType>;
/// Legacy name of [`PropertyType`].
#[deprecated(note = "use `PropertyType`")]
pub type PropertyTypeValueSet = PropertyType;
