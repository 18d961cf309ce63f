// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: ImagingStudyStatus
/// Canonical URL: http://hl7.org/fhir/imagingstudy-status
/// Title: Imaging Study Status
/// Status: active
///
/// The status of the ImagingStudy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "ImagingStudyStatus",
    system = "http://hl7.org/fhir/imagingstudy-status",
    version = "4.0.1"
)]
pub enum ImagingStudyStatus {
    /// Display: Registered
    ///
    /// Definition: The existence of the imaging study is registered, but there is nothing yet available.
    #[code(
        value = "registered",
        display = "Registered",
        definition = "The existence of the imaging study is registered, but there is nothing yet available."
    )]
    Registered,
    /// Display: Available
    ///
    /// Definition: At least one instance has been associated with this imaging study.
    #[code(
        value = "available",
        display = "Available",
        definition = "At least one instance has been associated with this imaging study."
    )]
    Available,
    /// Display: Cancelled
    ///
    /// Definition: The imaging study is unavailable because the imaging study was not started or not completed (also sometimes called "aborted").
    #[code(
        value = "cancelled",
        display = "Cancelled",
        definition = "The imaging study is unavailable because the imaging study was not started or not completed (also sometimes called \"aborted\")."
    )]
    Cancelled,
    /// Display: Entered in Error
    ///
    /// Definition: The imaging study has been withdrawn following a previous final release.
    #[code(
        value = "entered-in-error",
        display = "Entered in Error",
        definition = "The imaging study has been withdrawn following a previous final release."
    )]
    EnteredInError,
    /// Display: Unknown
    ///
    /// Definition: The system does not know which of the status values currently applies for this request.
    #[code(
        value = "unknown",
        display = "Unknown",
        definition = "The system does not know which of the status values currently applies for this request."
    )]
    Unknown,
}
/// Coded [`ImagingStudyStatus`] value: optional `id`, `extension` and member code.
pub type ImagingStudyStatusCode = Coded<ImagingStudyStatus>;
