// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: CareTeamStatus
/// Canonical URL: http://hl7.org/fhir/care-team-status
/// Title: Care Team Status
/// Status: active
///
/// Indicates the status of the care team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "CareTeamStatus",
    system = "http://hl7.org/fhir/care-team-status",
    version = "4.0.1"
)]
pub enum CareTeamStatus {
    /// Display: Proposed
    ///
    /// Definition: The care team has been drafted and proposed, but not yet participating in the coordination and delivery of patient care.
    #[code(
        value = "proposed",
        display = "Proposed",
        definition = "The care team has been drafted and proposed, but not yet participating in the coordination and delivery of patient care."
    )]
    Proposed,
    /// Display: Active
    ///
    /// Definition: The care team is currently participating in the coordination and delivery of care.
    #[code(
        value = "active",
        display = "Active",
        definition = "The care team is currently participating in the coordination and delivery of care."
    )]
    Active,
    /// Display: Suspended
    ///
    /// Definition: The care team is temporarily on hold or suspended and not participating in the coordination and delivery of care.
    #[code(
        value = "suspended",
        display = "Suspended",
        definition = "The care team is temporarily on hold or suspended and not participating in the coordination and delivery of care."
    )]
    Suspended,
    /// Display: Inactive
    ///
    /// Definition: The care team was, but is no longer, participating in the coordination and delivery of care.
    #[code(
        value = "inactive",
        display = "Inactive",
        definition = "The care team was, but is no longer, participating in the coordination and delivery of care."
    )]
    Inactive,
    /// Display: Entered in Error
    ///
    /// Definition: The care team should have never existed.
    #[code(
        value = "entered-in-error",
        display = "Entered in Error",
        definition = "The care team should have never existed."
    )]
    EnteredInError,
}
/// Coded [`CareTeamStatus`] value: optional `id`, `extension` and member code.
pub type CareTeamStatusCode = Coded<CareTeamStatus>;
