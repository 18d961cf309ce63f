// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: ActionCardinalityBehavior
/// Canonical URL: http://hl7.org/fhir/action-cardinality-behavior
/// Title: Action Cardinality Behavior
/// Status: active
///
/// Defines behavior for an action or a group for how many times that item may be repeated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "ActionCardinalityBehavior",
    system = "http://hl7.org/fhir/action-cardinality-behavior",
    version = "4.0.1"
)]
pub enum ActionCardinalityBehavior {
    /// Display: Single
    ///
    /// Definition: The action may only be selected one time.
    #[code(
        value = "single",
        display = "Single",
        definition = "The action may only be selected one time."
    )]
    Single,
    /// Display: Multiple
    ///
    /// Definition: The action may be selected multiple times.
    #[code(
        value = "multiple",
        display = "Multiple",
        definition = "The action may be selected multiple times."
    )]
    Multiple,
}
/// Coded [`ActionCardinalityBehavior`] value: optional `id`, `extension` and member code.
pub type ActionCardinalityBehaviorCode = Coded<ActionCardinalityBehavior>;
