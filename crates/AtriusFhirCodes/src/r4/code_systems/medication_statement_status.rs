// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: MedicationStatementStatus
/// Canonical URL: http://hl7.org/fhir/CodeSystem/medication-statement-status
/// Title: Medication Statement Status
/// Status: active
///
/// A coded concept indicating the current status of a MedicationStatement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "MedicationStatementStatus",
    system = "http://hl7.org/fhir/CodeSystem/medication-statement-status",
    version = "4.0.1"
)]
pub enum MedicationStatementStatus {
    /// Display: Active
    ///
    /// Definition: The medication is still being taken.
    #[code(
        value = "active",
        display = "Active",
        definition = "The medication is still being taken."
    )]
    Active,
    /// Display: Completed
    ///
    /// Definition: The medication is no longer being taken.
    #[code(
        value = "completed",
        display = "Completed",
        definition = "The medication is no longer being taken."
    )]
    Completed,
    /// Display: Entered in Error
    ///
    /// Definition: Some of the actions that are implied by the medication statement may have occurred.
    #[code(
        value = "entered-in-error",
        display = "Entered in Error",
        definition = "Some of the actions that are implied by the medication statement may have occurred."
    )]
    EnteredInError,
    /// Display: Intended
    ///
    /// Definition: The medication may be taken at some time in the future.
    #[code(
        value = "intended",
        display = "Intended",
        definition = "The medication may be taken at some time in the future."
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
    /// Display: Unknown
    ///
    /// Definition: The state of the medication use is not currently known.
    #[code(
        value = "unknown",
        display = "Unknown",
        definition = "The state of the medication use is not currently known."
    )]
    Unknown,
    /// Display: Not Taken
    ///
    /// Definition: The medication was not consumed by the patient.
    #[code(
        value = "not-taken",
        display = "Not Taken",
        definition = "The medication was not consumed by the patient."
    )]
    NotTaken,
}
/// Coded [`MedicationStatementStatus`] value: optional `id`, `extension` and member code.
pub type MedicationStatementStatusCode = Coded<MedicationStatementStatus>;
/// Legacy name of [`MedicationStatementStatus`].
#[deprecated(note = "use `MedicationStatementStatus`")]
pub type MedicationStatementStatusValueSet = MedicationStatementStatus;
