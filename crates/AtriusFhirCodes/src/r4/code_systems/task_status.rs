// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: TaskStatus
/// Canonical URL: http://hl7.org/fhir/task-status
/// Title: Task Status
/// Status: active
///
/// The current status of the task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "TaskStatus",
    system = "http://hl7.org/fhir/task-status",
    version = "4.0.1"
)]
pub enum TaskStatus {
    /// Display: Draft
    ///
    /// Definition: The task is not yet ready to be acted upon.
    #[code(
        value = "draft",
        display = "Draft",
        definition = "The task is not yet ready to be acted upon."
    )]
    Draft,
    /// Display: Requested
    ///
    /// Definition: The task is ready to be acted upon and action is sought.
    #[code(
        value = "requested",
        display = "Requested",
        definition = "The task is ready to be acted upon and action is sought."
    )]
    Requested,
    /// Display: Received
    ///
    /// Definition: A potential performer has claimed ownership of the task and is evaluating whether to perform it.
    #[code(
        value = "received",
        display = "Received",
        definition = "A potential performer has claimed ownership of the task and is evaluating whether to perform it."
    )]
    Received,
    /// Display: Accepted
    ///
    /// Definition: The potential performer has agreed to execute the task but has not yet started work.
    #[code(
        value = "accepted",
        display = "Accepted",
        definition = "The potential performer has agreed to execute the task but has not yet started work."
    )]
    Accepted,
    /// Display: Rejected
    ///
    /// Definition: The potential performer who claimed ownership of the task has decided not to execute it prior to performing any action.
    #[code(
        value = "rejected",
        display = "Rejected",
        definition = "The potential performer who claimed ownership of the task has decided not to execute it prior to performing any action."
    )]
    Rejected,
    /// Display: Ready
    ///
    /// Definition: The task is ready to be performed, but no action has yet been taken.
    #[code(
        value = "ready",
        display = "Ready",
        definition = "The task is ready to be performed, but no action has yet been taken."
    )]
    Ready,
    /// Display: Cancelled
    ///
    /// Definition: The task was not completed.
    #[code(
        value = "cancelled",
        display = "Cancelled",
        definition = "The task was not completed."
    )]
    Cancelled,
    /// Display: In Progress
    ///
    /// Definition: The task has been started but is not yet complete.
    #[code(
        value = "in-progress",
        display = "In Progress",
        definition = "The task has been started but is not yet complete."
    )]
    InProgress,
    /// Display: On Hold
    ///
    /// Definition: The task has been started but work has been paused.
    #[code(
        value = "on-hold",
        display = "On Hold",
        definition = "The task has been started but work has been paused."
    )]
    OnHold,
    /// Display: Failed
    ///
    /// Definition: The task was attempted but could not be completed due to some error.
    #[code(
        value = "failed",
        display = "Failed",
        definition = "The task was attempted but could not be completed due to some error."
    )]
    Failed,
    /// Display: Completed
    ///
    /// Definition: The task has been completed.
    #[code(
        value = "completed",
        display = "Completed",
        definition = "The task has been completed."
    )]
    Completed,
    /// Display: Entered in Error
    ///
    /// Definition: The task should never have existed and is retained only because of the possibility it may have used.
    #[code(
        value = "entered-in-error",
        display = "Entered in Error",
        definition = "The task should never have existed and is retained only because of the possibility it may have used."
    )]
    EnteredInError,
}
/// Coded [`TaskStatus`] value: optional `id`, `extension` and member code.
pub type TaskStatusCode = Coded<TaskStatus>;
