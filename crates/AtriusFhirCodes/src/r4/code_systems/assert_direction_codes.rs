// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: AssertionDirectionType
/// Canonical URL: http://hl7.org/fhir/assert-direction-codes
/// Title: Assertion Direction Type
/// Status: active
///
/// The type of direction to use for assertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "AssertionDirectionType",
    system = "http://hl7.org/fhir/assert-direction-codes",
    version = "4.0.1"
)]
pub enum AssertionDirectionType {
    /// Display: response
    ///
    /// Definition: The assertion is evaluated on the response. This is the default value.
    #[code(
        value = "response",
        display = "response",
        definition = "The assertion is evaluated on the response. This is the default value."
    )]
    Response,
    /// Display: request
    ///
    /// Definition: The assertion is evaluated on the request.
    #[code(
        value = "request",
        display = "request",
        definition = "The assertion is evaluated on the request."
    )]
    Request,
}
/// Coded [`AssertionDirectionType`] value: optional `id`, `extension` and member code.
pub type AssertionDirectionTypeCode = Coded<AssertionDirectionType>;
