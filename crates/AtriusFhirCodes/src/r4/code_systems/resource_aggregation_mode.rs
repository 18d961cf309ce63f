// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: AggregationMode
/// Canonical URL: http://hl7.org/fhir/resource-aggregation-mode
/// Title: Aggregation Mode
/// Status: active
///
/// How resource references can be aggregated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "AggregationMode",
    system = "http://hl7.org/fhir/resource-aggregation-mode",
    version = "4.0.1"
)]
pub enum AggregationMode {
    /// Display: Contained
    ///
    /// Definition: The reference is a local reference to a contained resource.
    #[code(
        value = "contained",
        display = "Contained",
        definition = "The reference is a local reference to a contained resource."
    )]
    Contained,
    /// Display: Referenced
    ///
    /// Definition: The reference to a resource that has to be resolved externally to the resource that includes the reference.
    #[code(
        value = "referenced",
        display = "Referenced",
        definition = "The reference to a resource that has to be resolved externally to the resource that includes the reference."
    )]
    Referenced,
    /// Display: Bundled
    ///
    /// Definition: The resource the reference points to will be found in the same bundle as the resource that includes the reference.
    #[code(
        value = "bundled",
        display = "Bundled",
        definition = "The resource the reference points to will be found in the same bundle as the resource that includes the reference."
    )]
    Bundled,
}
/// Coded [`AggregationMode`] value: optional `id`, `extension` and member code.
pub type AggregationModeCode = Coded<AggregationMode>;
