// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: FlagStatus
/// Canonical URL: http://hl7.org/fhir/flag-status
/// Title: Flag Status
/// Status: active
///
/// Indicates whether this flag is active and needs to be displayed to a user, or whether it is no longer needed or was entered in error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "FlagStatus",
    system = "http://hl7.org/fhir/flag-status",
    version = "4.0.1"
)]
pub enum FlagStatus {
    /// Display: Active
    ///
    /// Definition: A current flag that should be displayed to a user.
    #[code(
        value = "active",
        display = "Active",
        definition = "A current flag that should be displayed to a user."
    )]
    Active,
    /// Display: Inactive
    ///
    /// Definition: The flag no longer needs to be displayed.
    #[code(
        value = "inactive",
        display = "Inactive",
        definition = "The flag no longer needs to be displayed."
    )]
    Inactive,
    /// Display: Entered in Error
    ///
    /// Definition: The flag was added in error and should no longer be displayed.
    #[code(
        value = "entered-in-error",
        display = "Entered in Error",
        definition = "The flag was added in error and should no longer be displayed."
    )]
    EnteredInError,
}
/// Coded [`FlagStatus`] value: optional `id`, `extension` and member code.
pub type FlagStatusCode = Coded<FlagStatus>;
