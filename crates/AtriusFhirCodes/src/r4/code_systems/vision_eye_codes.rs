// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: VisionEyes
/// Canonical URL: http://hl7.org/fhir/vision-eye-codes
/// Title: Vision Eyes
/// Status: active
///
/// A coded concept listing the eye codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "VisionEyes",
    system = "http://hl7.org/fhir/vision-eye-codes",
    version = "4.0.1"
)]
pub enum VisionEyes {
    /// Display: Right Eye
    ///
    /// Definition: Right Eye.
    #[code(value = "right", display = "Right Eye", definition = "Right Eye.")]
    Right,
    /// Display: Left Eye
    ///
    /// Definition: Left Eye.
    #[code(value = "left", display = "Left Eye", definition = "Left Eye.")]
    Left,
}
/// Coded [`VisionEyes`] value: optional `id`, `extension` and member code.
pub type VisionEyesCode = Coded<VisionEyes>;
