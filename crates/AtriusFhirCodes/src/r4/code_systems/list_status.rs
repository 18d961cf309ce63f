// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: ListStatus
/// Canonical URL: http://hl7.org/fhir/list-status
/// Title: List Status
/// Status: active
///
/// The current state of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "ListStatus",
    system = "http://hl7.org/fhir/list-status",
    version = "4.0.1"
)]
pub enum ListStatus {
    /// Display: Current
    ///
    /// Definition: The list is considered to be an active part of the patient's record.
    #[code(
        value = "current",
        display = "Current",
        definition = "The list is considered to be an active part of the patient's record."
    )]
    Current,
    /// Display: Retired
    ///
    /// Definition: The list is "old" and should no longer be considered accurate or relevant.
    #[code(
        value = "retired",
        display = "Retired",
        definition = "The list is \"old\" and should no longer be considered accurate or relevant."
    )]
    Retired,
    /// Display: Entered In Error
    ///
    /// Definition: The list was never accurate. It is retained for medico-legal purposes only.
    #[code(
        value = "entered-in-error",
        display = "Entered In Error",
        definition = "The list was never accurate. It is retained for medico-legal purposes only."
    )]
    EnteredInError,
}
/// Coded [`ListStatus`] value: optional `id`, `extension` and member code.
pub type ListStatusCode = Coded<ListStatus>;
