// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: ActionRelationshipType
/// Canonical URL: http://hl7.org/fhir/action-relationship-type
/// Title: Action Relationship Type
/// Status: active
///
/// Defines the types of relationships between actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "ActionRelationshipType",
    system = "http://hl7.org/fhir/action-relationship-type",
    version = "4.0.1"
)]
pub enum ActionRelationshipType {
    /// Display: Before Start
    ///
    /// Definition: The action must be performed before the start of the related action.
    #[code(
        value = "before-start",
        display = "Before Start",
        definition = "The action must be performed before the start of the related action."
    )]
    BeforeStart,
    /// Display: Before
    ///
    /// Definition: The action must be performed before the related action.
    #[code(
        value = "before",
        display = "Before",
        definition = "The action must be performed before the related action."
    )]
    Before,
    /// Display: Before End
    ///
    /// Definition: The action must be performed before the end of the related action.
    #[code(
        value = "before-end",
        display = "Before End",
        definition = "The action must be performed before the end of the related action."
    )]
    BeforeEnd,
    /// Display: Concurrent With Start
    ///
    /// Definition: The action must be performed concurrent with the start of the related action.
    #[code(
        value = "concurrent-with-start",
        display = "Concurrent With Start",
        definition = "The action must be performed concurrent with the start of the related action."
    )]
    ConcurrentWithStart,
    /// Display: Concurrent
    ///
    /// Definition: The action must be performed concurrent with the related action.
    #[code(
        value = "concurrent",
        display = "Concurrent",
        definition = "The action must be performed concurrent with the related action."
    )]
    Concurrent,
    /// Display: Concurrent With End
    ///
    /// Definition: The action must be performed concurrent with the end of the related action.
    #[code(
        value = "concurrent-with-end",
        display = "Concurrent With End",
        definition = "The action must be performed concurrent with the end of the related action."
    )]
    ConcurrentWithEnd,
    /// Display: After Start
    ///
    /// Definition: The action must be performed after the start of the related action.
    #[code(
        value = "after-start",
        display = "After Start",
        definition = "The action must be performed after the start of the related action."
    )]
    AfterStart,
    /// Display: After
    ///
    /// Definition: The action must be performed after the related action.
    #[code(
        value = "after",
        display = "After",
        definition = "The action must be performed after the related action."
    )]
    After,
    /// Display: After End
    ///
    /// Definition: The action must be performed after the end of the related action.
    #[code(
        value = "after-end",
        display = "After End",
        definition = "The action must be performed after the end of the related action."
    )]
    AfterEnd,
}
/// Coded [`ActionRelationshipType`] value: optional `id`, `extension` and member code.
pub type ActionRelationshipTypeCode = Coded<ActionRelationshipType>;
