// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: DiscriminatorType
/// Canonical URL: http://hl7.org/fhir/discriminator-type
/// Title: Discriminator Type
/// Status: active
///
/// How an element value is interpreted when discrimination is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "DiscriminatorType",
    system = "http://hl7.org/fhir/discriminator-type",
    version = "4.0.1"
)]
pub enum DiscriminatorType {
    /// Display: Value
    ///
    /// Definition: The slices have different values in the nominated element.
    #[code(
        value = "value",
        display = "Value",
        definition = "The slices have different values in the nominated element."
    )]
    Value,
    /// Display: Exists
    ///
    /// Definition: The slices are differentiated by the presence or absence of the nominated element.
    #[code(
        value = "exists",
        display = "Exists",
        definition = "The slices are differentiated by the presence or absence of the nominated element."
    )]
    Exists,
    /// Display: Pattern
    ///
    /// Definition: The slices have different values in the nominated element, as determined by testing them against the applicable ElementDefinition.pattern[x].
    #[code(
        value = "pattern",
        display = "Pattern",
        definition = "The slices have different values in the nominated element, as determined by testing them against the applicable ElementDefinition.pattern[x]."
    )]
    Pattern,
    /// Display: Type
    ///
    /// Definition: The slices are differentiated by type of the nominated element.
    #[code(
        value = "type",
        display = "Type",
        definition = "The slices are differentiated by type of the nominated element."
    )]
    Type,
    /// Display: Profile
    ///
    /// Definition: The slices are differentiated by conformance of the nominated element to a specified profile.
    #[code(
        value = "profile",
        display = "Profile",
        definition = "The slices are differentiated by conformance of the nominated element to a specified profile."
    )]
    Profile,
}
/// Coded [`DiscriminatorType`] value: optional `id`, `extension` and member code.
pub type DiscriminatorTypeCode = Coded<DiscriminatorType>;
