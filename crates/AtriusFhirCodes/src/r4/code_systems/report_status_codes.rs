// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: TestReportStatus
/// Canonical URL: http://hl7.org/fhir/report-status-codes
/// Title: Test Report Status
/// Status: active
///
/// The current status of the test report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "TestReportStatus",
    system = "http://hl7.org/fhir/report-status-codes",
    version = "4.0.1"
)]
pub enum TestReportStatus {
    /// Display: Completed
    ///
    /// Definition: All test operations have completed.
    #[code(
        value = "completed",
        display = "Completed",
        definition = "All test operations have completed."
    )]
    Completed,
    /// Display: In Progress
    ///
    /// Definition: A test operations is currently executing.
    #[code(
        value = "in-progress",
        display = "In Progress",
        definition = "A test operations is currently executing."
    )]
    InProgress,
    /// Display: Waiting
    ///
    /// Definition: A test operation is waiting for an external client request.
    #[code(
        value = "waiting",
        display = "Waiting",
        definition = "A test operation is waiting for an external client request."
    )]
    Waiting,
    /// Display: Stopped
    ///
    /// Definition: The test script execution was manually stopped.
    #[code(
        value = "stopped",
        display = "Stopped",
        definition = "The test script execution was manually stopped."
    )]
    Stopped,
    /// Display: Entered In Error
    ///
    /// Definition: This test report was entered or created in error.
    #[code(
        value = "entered-in-error",
        display = "Entered In Error",
        definition = "This test report was entered or created in error."
    )]
    EnteredInError,
}
/// Coded [`TestReportStatus`] value: optional `id`, `extension` and member code.
pub type TestReportStatusCode = Coded<TestReportStatus>;
