// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: XPathUsageType
/// Canonical URL: http://hl7.org/fhir/search-xpath-usage
/// Title: X Path Usage Type
/// Status: active
///
/// How a search parameter relates to the set of elements returned by evaluating its xpath query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "XPathUsageType",
    system = "http://hl7.org/fhir/search-xpath-usage",
    version = "4.0.1"
)]
pub enum XPathUsageType {
    /// Display: Normal
    ///
    /// Definition: The search parameter is derived directly from the selected nodes based on the type definitions.
    #[code(
        value = "normal",
        display = "Normal",
        definition = "The search parameter is derived directly from the selected nodes based on the type definitions."
    )]
    Normal,
    /// Display: Phonetic
    ///
    /// Definition: The search parameter is derived by a phonetic transform from the selected nodes.
    #[code(
        value = "phonetic",
        display = "Phonetic",
        definition = "The search parameter is derived by a phonetic transform from the selected nodes."
    )]
    Phonetic,
    /// Display: Nearby
    ///
    /// Definition: The search parameter is based on a spatial transform of the selected nodes.
    #[code(
        value = "nearby",
        display = "Nearby",
        definition = "The search parameter is based on a spatial transform of the selected nodes."
    )]
    Nearby,
    /// Display: Distance
    ///
    /// Definition: The search parameter is based on a spatial transform of the selected nodes, using physical distance from the middle.
    #[code(
        value = "distance",
        display = "Distance",
        definition = "The search parameter is based on a spatial transform of the selected nodes, using physical distance from the middle."
    )]
    Distance,
    /// Display: Other
    ///
    /// Definition: The interpretation of the xpath statement is unknown (and can't be automated).
    #[code(
        value = "other",
        display = "Other",
        definition = "The interpretation of the xpath statement is unknown (and can't be automated)."
    )]
    Other,
}
/// Coded [`XPathUsageType`] value: optional `id`, `extension` and member code.
pub type XPathUsageTypeCode = Coded<XPathUsageType>;
