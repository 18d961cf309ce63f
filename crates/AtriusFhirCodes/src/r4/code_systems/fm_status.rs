// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: ClaimStatus
/// Canonical URL: http://hl7.org/fhir/fm-status
/// Title: Claim Status
/// Status: active
///
/// This value set includes Status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "ClaimStatus",
    system = "http://hl7.org/fhir/fm-status",
    version = "4.0.1"
)]
pub enum ClaimStatus {
    /// Display: Active
    ///
    /// Definition: The instance is currently in-force.
    #[code(
        value = "active",
        display = "Active",
        definition = "The instance is currently in-force."
    )]
    Active,
    /// Display: Cancelled
    ///
    /// Definition: The instance is withdrawn, rescinded or reversed.
    #[code(
        value = "cancelled",
        display = "Cancelled",
        definition = "The instance is withdrawn, rescinded or reversed."
    )]
    Cancelled,
    /// Display: Draft
    ///
    /// Definition: A new instance the contents of which is not complete.
    #[code(
        value = "draft",
        display = "Draft",
        definition = "A new instance the contents of which is not complete."
    )]
    Draft,
    /// Display: Entered in Error
    ///
    /// Definition: The instance was entered in error.
    #[code(
        value = "entered-in-error",
        display = "Entered in Error",
        definition = "The instance was entered in error."
    )]
    EnteredInError,
}
/// Coded [`ClaimStatus`] value: optional `id`, `extension` and member code.
pub type ClaimStatusCode = Coded<ClaimStatus>;
