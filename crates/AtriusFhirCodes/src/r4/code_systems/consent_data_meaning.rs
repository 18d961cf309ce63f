// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: ConsentDataMeaning
/// Canonical URL: http://hl7.org/fhir/consent-data-meaning
/// Title: Consent Data Meaning
/// Status: active
///
/// How a resource reference is interpreted when testing consent restrictions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "ConsentDataMeaning",
    system = "http://hl7.org/fhir/consent-data-meaning",
    version = "4.0.1"
)]
pub enum ConsentDataMeaning {
    /// Display: Instance
    ///
    /// Definition: The consent applies directly to the instance of the resource.
    #[code(
        value = "instance",
        display = "Instance",
        definition = "The consent applies directly to the instance of the resource."
    )]
    Instance,
    /// Display: Related
    ///
    /// Definition: The consent applies directly to the instance of the resource and instances it refers to.
    #[code(
        value = "related",
        display = "Related",
        definition = "The consent applies directly to the instance of the resource and instances it refers to."
    )]
    Related,
    /// Display: Dependents
    ///
    /// Definition: The consent applies directly to the instance of the resource and instances that refer to it.
    #[code(
        value = "dependents",
        display = "Dependents",
        definition = "The consent applies directly to the instance of the resource and instances that refer to it."
    )]
    Dependents,
    /// Display: AuthoredBy
    ///
    /// Definition: The consent applies to instances of resources that are authored by.
    #[code(
        value = "authoredby",
        display = "AuthoredBy",
        definition = "The consent applies to instances of resources that are authored by."
    )]
    Authoredby,
}
/// Coded [`ConsentDataMeaning`] value: optional `id`, `extension` and member code.
pub type ConsentDataMeaningCode = Coded<ConsentDataMeaning>;
