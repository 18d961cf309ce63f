// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: SearchModifierCode
/// Canonical URL: http://hl7.org/fhir/search-modifier-code
/// Title: Search Modifier Code
/// Status: active
///
/// A supported modifier for a search parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "SearchModifierCode",
    system = "http://hl7.org/fhir/search-modifier-code",
    version = "4.0.1"
)]
pub enum SearchModifierCode {
    /// Display: Missing
    ///
    /// Definition: The search parameter returns resources that have a value or not.
    #[code(
        value = "missing",
        display = "Missing",
        definition = "The search parameter returns resources that have a value or not."
    )]
    Missing,
    /// Display: Exact
    ///
    /// Definition: The search parameter returns resources that have a value that exactly matches the supplied parameter (the whole string, including casing and accents).
    #[code(
        value = "exact",
        display = "Exact",
        definition = "The search parameter returns resources that have a value that exactly matches the supplied parameter (the whole string, including casing and accents)."
    )]
    Exact,
    /// Display: Contains
    ///
    /// Definition: The search parameter returns resources that include the supplied parameter value anywhere within the field being searched.
    #[code(
        value = "contains",
        display = "Contains",
        definition = "The search parameter returns resources that include the supplied parameter value anywhere within the field being searched."
    )]
    Contains,
    /// Display: Not
    ///
    /// Definition: The search parameter returns resources that do not contain a match.
    #[code(
        value = "not",
        display = "Not",
        definition = "The search parameter returns resources that do not contain a match."
    )]
    Not,
    /// Display: Text
    ///
    /// Definition: The search parameter is processed as a string that searches text associated with the code/value.
    #[code(
        value = "text",
        display = "Text",
        definition = "The search parameter is processed as a string that searches text associated with the code/value."
    )]
    Text,
    /// Display: In
    ///
    /// Definition: The search parameter is a URI (relative or absolute) that identifies a value set, and the search parameter tests whether the coding is in the specified value set.
    #[code(
        value = "in",
        display = "In",
        definition = "The search parameter is a URI (relative or absolute) that identifies a value set, and the search parameter tests whether the coding is in the specified value set."
    )]
    In,
    /// Display: Not In
    ///
    /// Definition: The search parameter is a URI (relative or absolute) that identifies a value set, and the search parameter tests whether the coding is not in the specified value set.
    #[code(
        value = "not-in",
        display = "Not In",
        definition = "The search parameter is a URI (relative or absolute) that identifies a value set, and the search parameter tests whether the coding is not in the specified value set."
    )]
    NotIn,
    /// Display: Below
    ///
    /// Definition: The search parameter tests whether the value in a resource is subsumed by the specified value (is-a, or hierarchical relationships).
    #[code(
        value = "below",
        display = "Below",
        definition = "The search parameter tests whether the value in a resource is subsumed by the specified value (is-a, or hierarchical relationships)."
    )]
    Below,
    /// Display: Above
    ///
    /// Definition: The search parameter tests whether the value in a resource subsumes the specified value (is-a, or hierarchical relationships).
    #[code(
        value = "above",
        display = "Above",
        definition = "The search parameter tests whether the value in a resource subsumes the specified value (is-a, or hierarchical relationships)."
    )]
    Above,
    /// Display: Type
    ///
    /// Definition: The search parameter only applies to the Resource Type specified as a modifier (e.g. the modifier is not actually :type, but :Patient etc.).
    #[code(
        value = "type",
        display = "Type",
        definition = "The search parameter only applies to the Resource Type specified as a modifier (e.g. the modifier is not actually :type, but :Patient etc.)."
    )]
    Type,
    /// Display: Identifier
    ///
    /// Definition: The search parameter applies to the identifier on the resource, not the reference.
    #[code(
        value = "identifier",
        display = "Identifier",
        definition = "The search parameter applies to the identifier on the resource, not the reference."
    )]
    Identifier,
    /// Display: Of Type
    ///
    /// Definition: The search parameter has the format system|code|value, where the system and code refer to an Identifier.type.coding.system and .code, and match if any of the type codes match.
    #[code(
        value = "ofType",
        display = "Of Type",
        definition = "The search parameter has the format system|code|value, where the system and code refer to an Identifier.type.coding.system and .code, and match if any of the type codes match."
    )]
    OfType,
}
/// Coded [`SearchModifierCode`] value: optional `id`, `extension` and member code.
pub type SearchModifierCodeCode = Coded<SearchModifierCode>;
