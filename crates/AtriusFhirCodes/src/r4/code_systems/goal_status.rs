// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: GoalLifecycleStatus
/// Canonical URL: http://hl7.org/fhir/goal-status
/// Title: Goal Lifecycle Status
/// Status: active
///
/// Codes that reflect the current state of a goal and whether the goal is still being targeted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "GoalLifecycleStatus",
    system = "http://hl7.org/fhir/goal-status",
    version = "4.0.1"
)]
pub enum GoalLifecycleStatus {
    /// Display: Proposed
    ///
    /// Definition: A goal is proposed for this patient.
    #[code(
        value = "proposed",
        display = "Proposed",
        definition = "A goal is proposed for this patient."
    )]
    Proposed,
    /// Display: Planned
    ///
    /// Definition: A goal is planned for this patient.
    #[code(
        value = "planned",
        display = "Planned",
        definition = "A goal is planned for this patient."
    )]
    Planned,
    /// Display: Accepted
    ///
    /// Definition: A proposed goal was accepted or acknowledged.
    #[code(
        value = "accepted",
        display = "Accepted",
        definition = "A proposed goal was accepted or acknowledged."
    )]
    Accepted,
    /// Display: Active
    ///
    /// Definition: The goal is being sought actively.
    #[code(
        value = "active",
        display = "Active",
        definition = "The goal is being sought actively."
    )]
    Active,
    /// Display: On Hold
    ///
    /// Definition: The goal remains a long term objective but is no longer being actively pursued for a temporary period of time.
    #[code(
        value = "on-hold",
        display = "On Hold",
        definition = "The goal remains a long term objective but is no longer being actively pursued for a temporary period of time."
    )]
    OnHold,
    /// Display: Completed
    ///
    /// Definition: The goal is no longer being sought.
    #[code(
        value = "completed",
        display = "Completed",
        definition = "The goal is no longer being sought."
    )]
    Completed,
    /// Display: Cancelled
    ///
    /// Definition: The goal has been abandoned.
    #[code(
        value = "cancelled",
        display = "Cancelled",
        definition = "The goal has been abandoned."
    )]
    Cancelled,
    /// Display: Entered in Error
    ///
    /// Definition: The goal was entered in error and voided.
    #[code(
        value = "entered-in-error",
        display = "Entered in Error",
        definition = "The goal was entered in error and voided."
    )]
    EnteredInError,
    /// Display: Rejected
    ///
    /// Definition: A proposed goal was rejected.
    #[code(
        value = "rejected",
        display = "Rejected",
        definition = "A proposed goal was rejected."
    )]
    Rejected,
}
/// Coded [`GoalLifecycleStatus`] value: optional `id`, `extension` and member code.
pub type GoalLifecycleStatusCode = Coded<GoalLifecycleStatus>;
