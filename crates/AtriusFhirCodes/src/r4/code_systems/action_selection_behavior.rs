// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: ActionSelectionBehavior
/// Canonical URL: http://hl7.org/fhir/action-selection-behavior
/// Title: Action Selection Behavior
/// Status: active
///
/// Defines selection behavior of a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "ActionSelectionBehavior",
    system = "http://hl7.org/fhir/action-selection-behavior",
    version = "4.0.1"
)]
pub enum ActionSelectionBehavior {
    /// Display: Any
    ///
    /// Definition: Any number of the actions in the group may be chosen, from zero to all.
    #[code(
        value = "any",
        display = "Any",
        definition = "Any number of the actions in the group may be chosen, from zero to all."
    )]
    Any,
    /// Display: All
    ///
    /// Definition: All the actions in the group must be selected as a single unit.
    #[code(
        value = "all",
        display = "All",
        definition = "All the actions in the group must be selected as a single unit."
    )]
    All,
    /// Display: All Or None
    ///
    /// Definition: All the actions in the group are meant to be chosen as a single unit: either all must be selected by the end user, or none may be selected.
    #[code(
        value = "all-or-none",
        display = "All Or None",
        definition = "All the actions in the group are meant to be chosen as a single unit: either all must be selected by the end user, or none may be selected."
    )]
    AllOrNone,
    /// Display: Exactly One
    ///
    /// Definition: The end user must choose one and only one of the selectable actions in the group.
    #[code(
        value = "exactly-one",
        display = "Exactly One",
        definition = "The end user must choose one and only one of the selectable actions in the group."
    )]
    ExactlyOne,
    /// Display: At Most One
    ///
    /// Definition: The end user may choose zero or at most one of the actions in the group.
    #[code(
        value = "at-most-one",
        display = "At Most One",
        definition = "The end user may choose zero or at most one of the actions in the group."
    )]
    AtMostOne,
    /// Display: One Or More
    ///
    /// Definition: The end user must choose a minimum of one, and as many additional as desired.
    #[code(
        value = "one-or-more",
        display = "One Or More",
        definition = "The end user must choose a minimum of one, and as many additional as desired."
    )]
    OneOrMore,
}
/// Coded [`ActionSelectionBehavior`] value: optional `id`, `extension` and member code.
pub type ActionSelectionBehaviorCode = Coded<ActionSelectionBehavior>;
