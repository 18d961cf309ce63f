// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: Use
/// Canonical URL: http://hl7.org/fhir/claim-use
/// Title: Use
/// Status: active
///
/// The purpose of the Claim: predetermination, preauthorization, claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(name = "Use", system = "http://hl7.org/fhir/claim-use", version = "4.0.1")]
pub enum Use {
    /// Display: Claim
    ///
    /// Definition: The treatment is complete and this represents a Claim for the services.
    #[code(
        value = "claim",
        display = "Claim",
        definition = "The treatment is complete and this represents a Claim for the services."
    )]
    Claim,
    /// Display: Preauthorization
    ///
    /// Definition: The treatment is proposed and this represents a Pre-authorization for the services.
    #[code(
        value = "preauthorization",
        display = "Preauthorization",
        definition = "The treatment is proposed and this represents a Pre-authorization for the services."
    )]
    Preauthorization,
    /// Display: Predetermination
    ///
    /// Definition: The treatment is proposed and this represents a Pre-determination for the services.
    #[code(
        value = "predetermination",
        display = "Predetermination",
        definition = "The treatment is proposed and this represents a Pre-determination for the services."
    )]
    Predetermination,
}
/// Coded [`Use`] value: optional `id`, `extension` and member code.
pub type UseCode = Coded<Use>;
