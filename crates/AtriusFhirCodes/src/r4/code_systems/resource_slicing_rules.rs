// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: SlicingRules
/// Canonical URL: http://hl7.org/fhir/resource-slicing-rules
/// Title: Slicing Rules
/// Status: active
///
/// How slices are interpreted when evaluating an instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "SlicingRules",
    system = "http://hl7.org/fhir/resource-slicing-rules",
    version = "4.0.1"
)]
pub enum SlicingRules {
    /// Display: Closed
    ///
    /// Definition: No additional content is allowed other than that described by the slices in this profile.
    #[code(
        value = "closed",
        display = "Closed",
        definition = "No additional content is allowed other than that described by the slices in this profile."
    )]
    Closed,
    /// Display: Open
    ///
    /// Definition: Additional content is allowed anywhere in the list.
    #[code(
        value = "open",
        display = "Open",
        definition = "Additional content is allowed anywhere in the list."
    )]
    Open,
    /// Display: Open at End
    ///
    /// Definition: Additional content is allowed, but only at the end of the list.
    #[code(
        value = "openAtEnd",
        display = "Open at End",
        definition = "Additional content is allowed, but only at the end of the list."
    )]
    OpenAtEnd,
}
/// Coded [`SlicingRules`] value: optional `id`, `extension` and member code.
pub type SlicingRulesCode = Coded<SlicingRules>;
