// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: ConsentState
/// Canonical URL: http://hl7.org/fhir/consent-state-codes
/// Title: Consent State
/// Status: active
///
/// Indicates the state of the consent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "ConsentState",
    system = "http://hl7.org/fhir/consent-state-codes",
    version = "4.0.1"
)]
pub enum ConsentState {
    /// Display: Pending
    ///
    /// Definition: The consent is in development or awaiting use but is not yet intended to be acted upon.
    #[code(
        value = "draft",
        display = "Pending",
        definition = "The consent is in development or awaiting use but is not yet intended to be acted upon."
    )]
    Draft,
    /// Display: Proposed
    ///
    /// Definition: The consent has been proposed but not yet agreed to by all parties.
    #[code(
        value = "proposed",
        display = "Proposed",
        definition = "The consent has been proposed but not yet agreed to by all parties."
    )]
    Proposed,
    /// Display: Active
    ///
    /// Definition: The consent is to be followed and enforced.
    #[code(
        value = "active",
        display = "Active",
        definition = "The consent is to be followed and enforced."
    )]
    Active,
    /// Display: Rejected
    ///
    /// Definition: The consent has been rejected by one or more of the parties.
    #[code(
        value = "rejected",
        display = "Rejected",
        definition = "The consent has been rejected by one or more of the parties."
    )]
    Rejected,
    /// Display: Inactive
    ///
    /// Definition: The consent is terminated or replaced.
    #[code(
        value = "inactive",
        display = "Inactive",
        definition = "The consent is terminated or replaced."
    )]
    Inactive,
    /// Display: Entered in Error
    ///
    /// Definition: The consent was created wrongly (e.g. wrong patient) and should be ignored.
    #[code(
        value = "entered-in-error",
        display = "Entered in Error",
        definition = "The consent was created wrongly (e.g. wrong patient) and should be ignored."
    )]
    EnteredInError,
}
/// Coded [`ConsentState`] value: optional `id`, `extension` and member code.
pub type ConsentStateCode = Coded<ConsentState>;
