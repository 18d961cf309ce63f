// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: ActionGroupingBehavior
/// Canonical URL: http://hl7.org/fhir/action-grouping-behavior
/// Title: Action Grouping Behavior
/// Status: active
///
/// Defines organization behavior of a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "ActionGroupingBehavior",
    system = "http://hl7.org/fhir/action-grouping-behavior",
    version = "4.0.1"
)]
pub enum ActionGroupingBehavior {
    /// Display: Visual Group
    ///
    /// Definition: Any group marked with this behavior should be displayed as a visual group to the end user.
    #[code(
        value = "visual-group",
        display = "Visual Group",
        definition = "Any group marked with this behavior should be displayed as a visual group to the end user."
    )]
    VisualGroup,
    /// Display: Logical Group
    ///
    /// Definition: A group with this behavior logically groups its sub-elements, and may be shown as a visual group to the end user, but it is not required to do so.
    #[code(
        value = "logical-group",
        display = "Logical Group",
        definition = "A group with this behavior logically groups its sub-elements, and may be shown as a visual group to the end user, but it is not required to do so."
    )]
    LogicalGroup,
    /// Display: Sentence Group
    ///
    /// Definition: A group of related alternative actions is a sentence group if the target referenced by the action is the same in all the actions and each action simply constitutes a different variation on how to specify the details for the target.
    #[code(
        value = "sentence-group",
        display = "Sentence Group",
        definition = "A group of related alternative actions is a sentence group if the target referenced by the action is the same in all the actions and each action simply constitutes a different variation on how to specify the details for the target."
    )]
    SentenceGroup,
}
/// Coded [`ActionGroupingBehavior`] value: optional `id`, `extension` and member code.
pub type ActionGroupingBehaviorCode = Coded<ActionGroupingBehavior>;
