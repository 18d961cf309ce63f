// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: DiagnosticReportStatus
/// Canonical URL: http://hl7.org/fhir/diagnostic-report-status
/// Title: Diagnostic Report Status
/// Status: active
///
/// The status of the diagnostic report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "DiagnosticReportStatus",
    system = "http://hl7.org/fhir/diagnostic-report-status",
    version = "4.0.1"
)]
pub enum DiagnosticReportStatus {
    /// Display: Registered
    ///
    /// Definition: The existence of the report is registered, but there is nothing yet available.
    #[code(
        value = "registered",
        display = "Registered",
        definition = "The existence of the report is registered, but there is nothing yet available."
    )]
    Registered,
    /// Display: Partial
    ///
    /// Definition: This is a partial (e.g. initial, interim or preliminary) report: data in the report may be incomplete or unverified.
    #[code(
        value = "partial",
        display = "Partial",
        definition = "This is a partial (e.g. initial, interim or preliminary) report: data in the report may be incomplete or unverified."
    )]
    Partial,
    /// Display: Preliminary
    ///
    /// Definition: Verified early results are available, but not all results are final.
    #[code(
        value = "preliminary",
        display = "Preliminary",
        definition = "Verified early results are available, but not all results are final."
    )]
    Preliminary,
    /// Display: Final
    ///
    /// Definition: The report is complete and verified by an authorized person.
    #[code(
        value = "final",
        display = "Final",
        definition = "The report is complete and verified by an authorized person."
    )]
    Final,
    /// Display: Amended
    ///
    /// Definition: Subsequent to being final, the report has been modified.
    #[code(
        value = "amended",
        display = "Amended",
        definition = "Subsequent to being final, the report has been modified."
    )]
    Amended,
    /// Display: Corrected
    ///
    /// Definition: Subsequent to being final, the report has been modified to correct an error in the report or referenced results.
    #[code(
        value = "corrected",
        display = "Corrected",
        definition = "Subsequent to being final, the report has been modified to correct an error in the report or referenced results."
    )]
    Corrected,
    /// Display: Appended
    ///
    /// Definition: Subsequent to being final, the report has been modified by adding new content.
    #[code(
        value = "appended",
        display = "Appended",
        definition = "Subsequent to being final, the report has been modified by adding new content."
    )]
    Appended,
    /// Display: Cancelled
    ///
    /// Definition: The report is unavailable because the measurement was not started or not completed (also sometimes called "aborted").
    #[code(
        value = "cancelled",
        display = "Cancelled",
        definition = "The report is unavailable because the measurement was not started or not completed (also sometimes called \"aborted\")."
    )]
    Cancelled,
    /// Display: Entered in Error
    ///
    /// Definition: The report has been withdrawn following a previous final release.
    #[code(
        value = "entered-in-error",
        display = "Entered in Error",
        definition = "The report has been withdrawn following a previous final release."
    )]
    EnteredInError,
    /// Display: Unknown
    ///
    /// Definition: The authoring/source system does not know which of the status values currently applies for this observation.
    #[code(
        value = "unknown",
        display = "Unknown",
        definition = "The authoring/source system does not know which of the status values currently applies for this observation."
    )]
    Unknown,
}
/// Coded [`DiagnosticReportStatus`] value: optional `id`, `extension` and member code.
pub type DiagnosticReportStatusCode = Coded<DiagnosticReportStatus>;
