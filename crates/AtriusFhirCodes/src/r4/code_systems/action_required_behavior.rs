// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: ActionRequiredBehavior
/// Canonical URL: http://hl7.org/fhir/action-required-behavior
/// Title: Action Required Behavior
/// Status: active
///
/// Defines expectations around whether an action or action group is required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "ActionRequiredBehavior",
    system = "http://hl7.org/fhir/action-required-behavior",
    version = "4.0.1"
)]
pub enum ActionRequiredBehavior {
    /// Display: Must
    ///
    /// Definition: An action with this behavior must be included in the actions processed by the end user; the end user SHALL NOT choose not to include this action.
    #[code(
        value = "must",
        display = "Must",
        definition = "An action with this behavior must be included in the actions processed by the end user; the end user SHALL NOT choose not to include this action."
    )]
    Must,
    /// Display: Could
    ///
    /// Definition: An action with this behavior may be included in the set of actions processed by the end user.
    #[code(
        value = "could",
        display = "Could",
        definition = "An action with this behavior may be included in the set of actions processed by the end user."
    )]
    Could,
    /// Display: Must Unless Documented
    ///
    /// Definition: An action with this behavior must be included in the set of actions processed by the end user, unless the end user provides documentation as to why the action was not included.
    #[code(
        value = "must-unless-documented",
        display = "Must Unless Documented",
        definition = "An action with this behavior must be included in the set of actions processed by the end user, unless the end user provides documentation as to why the action was not included."
    )]
    MustUnlessDocumented,
}
/// Coded [`ActionRequiredBehavior`] value: optional `id`, `extension` and member code.
pub type ActionRequiredBehaviorCode = Coded<ActionRequiredBehavior>;
