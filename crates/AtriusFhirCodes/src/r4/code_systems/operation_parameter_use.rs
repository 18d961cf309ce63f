// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: OperationParameterUse
/// Canonical URL: http://hl7.org/fhir/operation-parameter-use
/// Title: Operation Parameter Use
/// Status: active
///
/// Whether an operation parameter is an input or an output parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "OperationParameterUse",
    system = "http://hl7.org/fhir/operation-parameter-use",
    version = "4.0.1"
)]
pub enum OperationParameterUse {
    /// Display: In
    ///
    /// Definition: This is an input parameter.
    #[code(value = "in", display = "In", definition = "This is an input parameter.")]
    In,
    /// Display: Out
    ///
    /// Definition: This is an output parameter.
    #[code(value = "out", display = "Out", definition = "This is an output parameter.")]
    Out,
}
/// Coded [`OperationParameterUse`] value: optional `id`, `extension` and member code.
pub type OperationParameterUseCode = Coded<OperationParameterUse>;
