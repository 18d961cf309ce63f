// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: MeasureReportStatus
/// Canonical URL: http://hl7.org/fhir/measure-report-status
/// Title: Measure Report Status
/// Status: active
///
/// The status of the measure report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "MeasureReportStatus",
    system = "http://hl7.org/fhir/measure-report-status",
    version = "4.0.1"
)]
pub enum MeasureReportStatus {
    /// Display: Complete
    ///
    /// Definition: The report is complete and ready for use.
    #[code(
        value = "complete",
        display = "Complete",
        definition = "The report is complete and ready for use."
    )]
    Complete,
    /// Display: Pending
    ///
    /// Definition: The report is currently being generated.
    #[code(
        value = "pending",
        display = "Pending",
        definition = "The report is currently being generated."
    )]
    Pending,
    /// Display: Error
    ///
    /// Definition: An error occurred attempting to generate the report.
    #[code(
        value = "error",
        display = "Error",
        definition = "An error occurred attempting to generate the report."
    )]
    Error,
}
/// Coded [`MeasureReportStatus`] value: optional `id`, `extension` and member code.
pub type MeasureReportStatusCode = Coded<MeasureReportStatus>;
