// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: IdentifierUse
/// Canonical URL: http://hl7.org/fhir/identifier-use
/// Title: Identifier Use
/// Status: active
///
/// Identifies the purpose for this identifier, if known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "IdentifierUse",
    system = "http://hl7.org/fhir/identifier-use",
    version = "4.0.1"
)]
pub enum IdentifierUse {
    /// Display: Usual
    ///
    /// Definition: The identifier recommended for display and use in real-world interactions.
    #[code(
        value = "usual",
        display = "Usual",
        definition = "The identifier recommended for display and use in real-world interactions."
    )]
    Usual,
    /// Display: Official
    ///
    /// Definition: The identifier considered to be most trusted for the identification of this item.
    #[code(
        value = "official",
        display = "Official",
        definition = "The identifier considered to be most trusted for the identification of this item."
    )]
    Official,
    /// Display: Temp
    ///
    /// Definition: A temporary identifier.
    #[code(value = "temp", display = "Temp", definition = "A temporary identifier.")]
    Temp,
    /// Display: Secondary
    ///
    /// Definition: An identifier that was assigned in secondary use - it serves to identify the object in a relative context, but cannot be consistently assigned to the same object again in a different context.
    #[code(
        value = "secondary",
        display = "Secondary",
        definition = "An identifier that was assigned in secondary use - it serves to identify the object in a relative context, but cannot be consistently assigned to the same object again in a different context."
    )]
    Secondary,
    /// Display: Old
    ///
    /// Definition: The identifier id no longer considered valid, but may be relevant for search purposes.
    #[code(
        value = "old",
        display = "Old",
        definition = "The identifier id no longer considered valid, but may be relevant for search purposes."
    )]
    Old,
}
/// Coded [`IdentifierUse`] value: optional `id`, `extension` and member code.
pub type IdentifierUseCode = Coded<IdentifierUse>;
