// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: TestReportResult
/// Canonical URL: http://hl7.org/fhir/report-result-codes
/// Title: Test Report Result
/// Status: active
///
/// The reported execution result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "TestReportResult",
    system = "http://hl7.org/fhir/report-result-codes",
    version = "4.0.1"
)]
pub enum TestReportResult {
    /// Display: Pass
    ///
    /// Definition: All test operations successfully passed all asserts.
    #[code(
        value = "pass",
        display = "Pass",
        definition = "All test operations successfully passed all asserts."
    )]
    Pass,
    /// Display: Fail
    ///
    /// Definition: One or more test operations failed one or more asserts.
    #[code(
        value = "fail",
        display = "Fail",
        definition = "One or more test operations failed one or more asserts."
    )]
    Fail,
    /// Display: Pending
    ///
    /// Definition: One or more test operations is pending execution completion.
    #[code(
        value = "pending",
        display = "Pending",
        definition = "One or more test operations is pending execution completion."
    )]
    Pending,
}
/// Coded [`TestReportResult`] value: optional `id`, `extension` and member code.
pub type TestReportResultCode = Coded<TestReportResult>;
