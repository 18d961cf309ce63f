// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: AccountStatus
/// Canonical URL: http://hl7.org/fhir/account-status
/// Title: Account Status
/// Status: active
///
/// Indicates whether the account is available to be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "AccountStatus",
    system = "http://hl7.org/fhir/account-status",
    version = "4.0.1"
)]
pub enum AccountStatus {
    /// Display: Active
    ///
    /// Definition: This account is active and may be used.
    #[code(
        value = "active",
        display = "Active",
        definition = "This account is active and may be used."
    )]
    Active,
    /// Display: Inactive
    ///
    /// Definition: This account is inactive and should not be used to track financial information.
    #[code(
        value = "inactive",
        display = "Inactive",
        definition = "This account is inactive and should not be used to track financial information."
    )]
    Inactive,
    /// Display: Entered in error
    ///
    /// Definition: This instance should not have been part of this patient's medical record.
    #[code(
        value = "entered-in-error",
        display = "Entered in error",
        definition = "This instance should not have been part of this patient's medical record."
    )]
    EnteredInError,
    /// Display: On Hold
    ///
    /// Definition: This account is on hold.
    #[code(
        value = "on-hold",
        display = "On Hold",
        definition = "This account is on hold."
    )]
    OnHold,
    /// Display: Unknown
    ///
    /// Definition: The account status is unknown.
    #[code(
        value = "unknown",
        display = "Unknown",
        definition = "The account status is unknown."
    )]
    Unknown,
}
/// Coded [`AccountStatus`] value: optional `id`, `extension` and member code.
pub type AccountStatusCode = Coded<AccountStatus>;
