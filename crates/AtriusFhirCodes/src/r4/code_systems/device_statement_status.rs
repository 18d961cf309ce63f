// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: DeviceUseStatementStatus
/// Canonical URL: http://hl7.org/fhir/device-statement-status
/// Title: Device Use Statement Status
/// Status: active
///
/// A coded concept indicating the current status of the Device Usage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "DeviceUseStatementStatus",
    system = "http://hl7.org/fhir/device-statement-status",
    version = "4.0.1"
)]
pub enum DeviceUseStatementStatus {
    /// Display: Active
    ///
    /// Definition: The device is still being used.
    #[code(
        value = "active",
        display = "Active",
        definition = "The device is still being used."
    )]
    Active,
    /// Display: Completed
    ///
    /// Definition: The device is no longer being used.
    #[code(
        value = "completed",
        display = "Completed",
        definition = "The device is no longer being used."
    )]
    Completed,
    /// Display: Entered in Error
    ///
    /// Definition: The statement was recorded incorrectly.
    #[code(
        value = "entered-in-error",
        display = "Entered in Error",
        definition = "The statement was recorded incorrectly."
    )]
    EnteredInError,
    /// Display: Intended
    ///
    /// Definition: The device may be used at some time in the future.
    #[code(
        value = "intended",
        display = "Intended",
        definition = "The device may be used at some time in the future."
    )]
    Intended,
    /// Display: Stopped
    ///
    /// Definition: Actions implied by the statement have been permanently halted, before all of them occurred.
    #[code(
        value = "stopped",
        display = "Stopped",
        definition = "Actions implied by the statement have been permanently halted, before all of them occurred."
    )]
    Stopped,
    /// Display: On Hold
    ///
    /// Definition: Actions implied by the statement have been temporarily halted, but are expected to continue later.
    #[code(
        value = "on-hold",
        display = "On Hold",
        definition = "Actions implied by the statement have been temporarily halted, but are expected to continue later."
    )]
    OnHold,
}
/// Coded [`DeviceUseStatementStatus`] value: optional `id`, `extension` and member code.
pub type DeviceUseStatementStatusCode = Coded<DeviceUseStatementStatus>;
