// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: ActionConditionKind
/// Canonical URL: http://hl7.org/fhir/action-condition-kind
/// Title: Action Condition Kind
/// Status: active
///
/// Defines the kinds of conditions that can appear on actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "ActionConditionKind",
    system = "http://hl7.org/fhir/action-condition-kind",
    version = "4.0.1"
)]
pub enum ActionConditionKind {
    /// Display: Applicability
    ///
    /// Definition: The condition describes whether or not a given action is applicable.
    #[code(
        value = "applicability",
        display = "Applicability",
        definition = "The condition describes whether or not a given action is applicable."
    )]
    Applicability,
    /// Display: Start
    ///
    /// Definition: The condition is a starting condition for the action.
    #[code(
        value = "start",
        display = "Start",
        definition = "The condition is a starting condition for the action."
    )]
    Start,
    /// Display: Stop
    ///
    /// Definition: The condition is a stop, or exit condition for the action.
    #[code(
        value = "stop",
        display = "Stop",
        definition = "The condition is a stop, or exit condition for the action."
    )]
    Stop,
}
/// Coded [`ActionConditionKind`] value: optional `id`, `extension` and member code.
pub type ActionConditionKindCode = Coded<ActionConditionKind>;
