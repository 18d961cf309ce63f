// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: ConsentProvisionType
/// Canonical URL: http://hl7.org/fhir/consent-provision-type
/// Title: Consent Provision Type
/// Status: active
///
/// How a rule statement is applied, such as adding additional consent or removing consent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "ConsentProvisionType",
    system = "http://hl7.org/fhir/consent-provision-type",
    version = "4.0.1"
)]
pub enum ConsentProvisionType {
    /// Display: Opt Out
    ///
    /// Definition: Consent is denied for actions meeting these rules.
    #[code(
        value = "deny",
        display = "Opt Out",
        definition = "Consent is denied for actions meeting these rules."
    )]
    Deny,
    /// Display: Opt In
    ///
    /// Definition: Consent is provided for actions meeting these rules.
    #[code(
        value = "permit",
        display = "Opt In",
        definition = "Consent is provided for actions meeting these rules."
    )]
    Permit,
}
/// Coded [`ConsentProvisionType`] value: optional `id`, `extension` and member code.
pub type ConsentProvisionTypeCode = Coded<ConsentProvisionType>;
