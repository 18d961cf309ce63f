// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: CarePlanActivityStatus
/// Canonical URL: http://hl7.org/fhir/care-plan-activity-status
/// Title: Care Plan Activity Status
/// Status: active
///
/// Codes that reflect the current state of a care plan activity within its overall life cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "CarePlanActivityStatus",
    system = "http://hl7.org/fhir/care-plan-activity-status",
    version = "4.0.1"
)]
pub enum CarePlanActivityStatus {
    /// Display: Not Started
    ///
    /// Definition: Care plan activity is planned but no action has yet been taken.
    #[code(
        value = "not-started",
        display = "Not Started",
        definition = "Care plan activity is planned but no action has yet been taken."
    )]
    NotStarted,
    /// Display: Scheduled
    ///
    /// Definition: Appointment or other booking has occurred but activity has not yet begun.
    #[code(
        value = "scheduled",
        display = "Scheduled",
        definition = "Appointment or other booking has occurred but activity has not yet begun."
    )]
    Scheduled,
    /// Display: In Progress
    ///
    /// Definition: Care plan activity has been started but is not yet complete.
    #[code(
        value = "in-progress",
        display = "In Progress",
        definition = "Care plan activity has been started but is not yet complete."
    )]
    InProgress,
    /// Display: On Hold
    ///
    /// Definition: Care plan activity was started but has temporarily ceased with an expectation of resumption at a future time.
    #[code(
        value = "on-hold",
        display = "On Hold",
        definition = "Care plan activity was started but has temporarily ceased with an expectation of resumption at a future time."
    )]
    OnHold,
    /// Display: Completed
    ///
    /// Definition: Care plan activity has been completed (more or less) as planned.
    #[code(
        value = "completed",
        display = "Completed",
        definition = "Care plan activity has been completed (more or less) as planned."
    )]
    Completed,
    /// Display: Cancelled
    ///
    /// Definition: The planned care plan activity has been withdrawn.
    #[code(
        value = "cancelled",
        display = "Cancelled",
        definition = "The planned care plan activity has been withdrawn."
    )]
    Cancelled,
    /// Display: Stopped
    ///
    /// Definition: The planned care plan activity has been ended prior to completion after the activity was started.
    #[code(
        value = "stopped",
        display = "Stopped",
        definition = "The planned care plan activity has been ended prior to completion after the activity was started."
    )]
    Stopped,
    /// Display: Unknown
    ///
    /// Definition: The current state of the care plan activity is not known.
    #[code(
        value = "unknown",
        display = "Unknown",
        definition = "The current state of the care plan activity is not known."
    )]
    Unknown,
    /// Display: Entered in Error
    ///
    /// Definition: Care plan activity was entered in error and voided.
    #[code(
        value = "entered-in-error",
        display = "Entered in Error",
        definition = "Care plan activity was entered in error and voided."
    )]
    EnteredInError,
}
/// Coded [`CarePlanActivityStatus`] value: optional `id`, `extension` and member code.
pub type CarePlanActivityStatusCode = Coded<CarePlanActivityStatus>;
/// Legacy name of [`CarePlanActivityStatus`].
#[deprecated(note = "use `CarePlanActivityStatus`")]
pub type CarePlanActivityStatusValueSet = CarePlanActivityStatus;
