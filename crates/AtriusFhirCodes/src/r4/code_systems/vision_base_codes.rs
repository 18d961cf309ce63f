// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: VisionBase
/// Canonical URL: http://hl7.org/fhir/vision-base-codes
/// Title: Vision Base
/// Status: active
///
/// A coded concept listing the base codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "VisionBase",
    system = "http://hl7.org/fhir/vision-base-codes",
    version = "4.0.1"
)]
pub enum VisionBase {
    /// Display: Up
    ///
    /// Definition: top.
    #[code(value = "up", display = "Up", definition = "top.")]
    Up,
    /// Display: Down
    ///
    /// Definition: bottom.
    #[code(value = "down", display = "Down", definition = "bottom.")]
    Down,
    /// Display: In
    ///
    /// Definition: inner edge.
    #[code(value = "in", display = "In", definition = "inner edge.")]
    In,
    /// Display: Out
    ///
    /// Definition: outer edge.
    #[code(value = "out", display = "Out", definition = "outer edge.")]
    Out,
}
/// Coded [`VisionBase`] value: optional `id`, `extension` and member code.
pub type VisionBaseCode = Coded<VisionBase>;
/// Legacy name of [`VisionBase`].
#[deprecated(note = "use `VisionBase`")]
pub type VisionBaseValueSet = VisionBase;
