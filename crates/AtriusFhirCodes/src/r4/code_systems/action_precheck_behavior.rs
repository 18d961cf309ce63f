// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: ActionPrecheckBehavior
/// Canonical URL: http://hl7.org/fhir/action-precheck-behavior
/// Title: Action Precheck Behavior
/// Status: active
///
/// Defines selection frequency behavior for an action or group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "ActionPrecheckBehavior",
    system = "http://hl7.org/fhir/action-precheck-behavior",
    version = "4.0.1"
)]
pub enum ActionPrecheckBehavior {
    /// Display: Yes
    ///
    /// Definition: An action with this behavior is one of the most frequent action that is, or should be, included by an end user, for the particular context in which the action occurs.
    #[code(
        value = "yes",
        display = "Yes",
        definition = "An action with this behavior is one of the most frequent action that is, or should be, included by an end user, for the particular context in which the action occurs."
    )]
    Yes,
    /// Display: No
    ///
    /// Definition: An action with this behavior is one of the less frequent actions included by the end user, for the particular context in which the action occurs.
    #[code(
        value = "no",
        display = "No",
        definition = "An action with this behavior is one of the less frequent actions included by the end user, for the particular context in which the action occurs."
    )]
    No,
}
/// Coded [`ActionPrecheckBehavior`] value: optional `id`, `extension` and member code.
pub type ActionPrecheckBehaviorCode = Coded<ActionPrecheckBehavior>;
