// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: PropertyRepresentation
/// Canonical URL: http://hl7.org/fhir/property-representation
/// Title: Property Representation
/// Status: active
///
/// How a property is represented when serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "PropertyRepresentation",
    system = "http://hl7.org/fhir/property-representation",
    version = "4.0.1"
)]
pub enum PropertyRepresentation {
    /// Display: XML Attribute
    ///
    /// Definition: In XML, this property is represented as an attribute not an element.
    #[code(
        value = "xmlAttr",
        display = "XML Attribute",
        definition = "In XML, this property is represented as an attribute not an element."
    )]
    XmlAttr,
    /// Display: XML Text
    ///
    /// Definition: This element is represented using the XML text attribute (primitives only).
    #[code(
        value = "xmlText",
        display = "XML Text",
        definition = "This element is represented using the XML text attribute (primitives only)."
    )]
    XmlText,
    /// Display: Type Attribute
    ///
    /// Definition: The type of this element is indicated using xsi:type.
    #[code(
        value = "typeAttr",
        display = "Type Attribute",
        definition = "The type of this element is indicated using xsi:type."
    )]
    TypeAttr,
    /// Display: CDA Text Format
    ///
    /// Definition: Use CDA narrative instead of XHTML.
    #[code(
        value = "cdaText",
        display = "CDA Text Format",
        definition = "Use CDA narrative instead of XHTML."
    )]
    CdaText,
    /// Display: XHTML
    ///
    /// Definition: The property is represented using XHTML.
    #[code(
        value = "xhtml",
        display = "XHTML",
        definition = "The property is represented using XHTML."
    )]
    Xhtml,
}
/// Coded [`PropertyRepresentation`] value: optional `id`, `extension` and member code.
pub type PropertyRepresentationCode = Coded<PropertyRepresentation>;
