// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: AdverseEventActuality
/// Canonical URL: http://hl7.org/fhir/adverse-event-actuality
/// Title: Adverse Event Actuality
/// Status: active
///
/// Overall nature of the adverse event, e.g. real or potential.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "AdverseEventActuality",
    system = "http://hl7.org/fhir/adverse-event-actuality",
    version = "4.0.1"
)]
pub enum AdverseEventActuality {
    /// Display: Adverse Event
    ///
    /// Definition: The adverse event actually happened regardless of whether anyone was affected or harmed.
    #[code(
        value = "actual",
        display = "Adverse Event",
        definition = "The adverse event actually happened regardless of whether anyone was affected or harmed."
    )]
    Actual,
    /// Display: Potential Adverse Event
    ///
    /// Definition: A potential adverse event.
    #[code(
        value = "potential",
        display = "Potential Adverse Event",
        definition = "A potential adverse event."
    )]
    Potential,
}
/// Coded [`AdverseEventActuality`] value: optional `id`, `extension` and member code.
pub type AdverseEventActualityCode = Coded<AdverseEventActuality>;
