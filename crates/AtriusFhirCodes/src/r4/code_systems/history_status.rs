// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: FamilyHistoryStatus
/// Canonical URL: http://hl7.org/fhir/history-status
/// Title: Family History Status
/// Status: active
///
/// A code that identifies the status of the family history record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "FamilyHistoryStatus",
    system = "http://hl7.org/fhir/history-status",
    version = "4.0.1"
)]
pub enum FamilyHistoryStatus {
    /// Display: Partial
    ///
    /// Definition: Some health information is known and captured, but not complete - see notes for details.
    #[code(
        value = "partial",
        display = "Partial",
        definition = "Some health information is known and captured, but not complete - see notes for details."
    )]
    Partial,
    /// Display: Completed
    ///
    /// Definition: All available related health information is captured as of the date (and possibly time) when the family member history was taken.
    #[code(
        value = "completed",
        display = "Completed",
        definition = "All available related health information is captured as of the date (and possibly time) when the family member history was taken."
    )]
    Completed,
    /// Display: Entered in Error
    ///
    /// Definition: This instance should not have been part of this patient's medical record.
    #[code(
        value = "entered-in-error",
        display = "Entered in Error",
        definition = "This instance should not have been part of this patient's medical record."
    )]
    EnteredInError,
    /// Display: Health Unknown
    ///
    /// Definition: Health information for this family member is unavailable/unknown.
    #[code(
        value = "health-unknown",
        display = "Health Unknown",
        definition = "Health information for this family member is unavailable/unknown."
    )]
    HealthUnknown,
}
/// Coded [`FamilyHistoryStatus`] value: optional `id`, `extension` and member code.
pub type FamilyHistoryStatusCode = Coded<FamilyHistoryStatus>;
