// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: BindingStrength
/// Canonical URL: http://hl7.org/fhir/binding-strength
/// Title: Binding Strength
/// Status: active
///
/// Indication of the degree of conformance expectations associated with a binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "BindingStrength",
    system = "http://hl7.org/fhir/binding-strength",
    version = "4.0.1"
)]
pub enum BindingStrength {
    /// Display: Required
    ///
    /// Definition: To be conformant, the concept in this element SHALL be from the specified value set.
    #[code(
        value = "required",
        display = "Required",
        definition = "To be conformant, the concept in this element SHALL be from the specified value set."
    )]
    Required,
    /// Display: Extensible
    ///
    /// Definition: To be conformant, the concept in this element SHALL be from the specified value set if any of the codes within the value set can apply to the concept being communicated.
    #[code(
        value = "extensible",
        display = "Extensible",
        definition = "To be conformant, the concept in this element SHALL be from the specified value set if any of the codes within the value set can apply to the concept being communicated."
    )]
    Extensible,
    /// Display: Preferred
    ///
    /// Definition: Instances are encouraged to draw from the specified codes for interoperability purposes but are not required to do so to be considered conformant.
    #[code(
        value = "preferred",
        display = "Preferred",
        definition = "Instances are encouraged to draw from the specified codes for interoperability purposes but are not required to do so to be considered conformant."
    )]
    Preferred,
    /// Display: Example
    ///
    /// Definition: Instances are not expected or even encouraged to draw from the specified value set.
    #[code(
        value = "example",
        display = "Example",
        definition = "Instances are not expected or even encouraged to draw from the specified value set."
    )]
    Example,
}
/// Coded [`BindingStrength`] value: optional `id`, `extension` and member code.
pub type BindingStrengthCode = Coded<BindingStrength>;
