// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: SearchParamType
/// Canonical URL: http://hl7.org/fhir/search-param-type
/// Title: Search Param Type
/// Status: active
///
/// Data types allowed to be used for search parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "SearchParamType",
    system = "http://hl7.org/fhir/search-param-type",
    version = "4.0.1"
)]
pub enum SearchParamType {
    /// Display: Number
    ///
    /// Definition: Search parameter SHALL be a number (a whole number, or a decimal).
    #[code(
        value = "number",
        display = "Number",
        definition = "Search parameter SHALL be a number (a whole number, or a decimal)."
    )]
    Number,
    /// Display: Date/DateTime
    ///
    /// Definition: Search parameter is on a date/time.
    #[code(
        value = "date",
        display = "Date/DateTime",
        definition = "Search parameter is on a date/time."
    )]
    Date,
    /// Display: String
    ///
    /// Definition: Search parameter is a simple string, like a name part.
    #[code(
        value = "string",
        display = "String",
        definition = "Search parameter is a simple string, like a name part."
    )]
    String,
    /// Display: Token
    ///
    /// Definition: Search parameter on a coded element or identifier.
    #[code(
        value = "token",
        display = "Token",
        definition = "Search parameter on a coded element or identifier."
    )]
    Token,
    /// Display: Reference
    ///
    /// Definition: A reference to another resource (Reference or canonical).
    #[code(
        value = "reference",
        display = "Reference",
        definition = "A reference to another resource (Reference or canonical)."
    )]
    Reference,
    /// Display: Composite
    ///
    /// Definition: A composite search parameter that combines a search on two values together.
    #[code(
        value = "composite",
        display = "Composite",
        definition = "A composite search parameter that combines a search on two values together."
    )]
    Composite,
    /// Display: Quantity
    ///
    /// Definition: A search parameter that searches on a quantity.
    #[code(
        value = "quantity",
        display = "Quantity",
        definition = "A search parameter that searches on a quantity."
    )]
    Quantity,
    /// Display: URI
    ///
    /// Definition: A search parameter that searches on a URI (RFC 3986).
    #[code(
        value = "uri",
        display = "URI",
        definition = "A search parameter that searches on a URI (RFC 3986)."
    )]
    Uri,
    /// Display: Special
    ///
    /// Definition: Special logic applies to this parameter per the description of the search parameter.
    #[code(
        value = "special",
        display = "Special",
        definition = "Special logic applies to this parameter per the description of the search parameter."
    )]
    Special,
}
/// Coded [`SearchParamType`] value: optional `id`, `extension` and member code.
pub type SearchParamTypeCode = Coded<SearchParamType>;
