// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: ObservationStatus
/// Canonical URL: http://hl7.org/fhir/observation-status
/// Title: Observation Status
/// Status: active
///
/// Codes providing the status of an observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "ObservationStatus",
    system = "http://hl7.org/fhir/observation-status",
    version = "4.0.1"
)]
pub enum ObservationStatus {
    /// Display: Registered
    ///
    /// Definition: The existence of the observation is registered, but there is no result yet available.
    #[code(
        value = "registered",
        display = "Registered",
        definition = "The existence of the observation is registered, but there is no result yet available."
    )]
    Registered,
    /// Display: Preliminary
    ///
    /// Definition: This is an initial or interim observation: data may be incomplete or unverified.
    #[code(
        value = "preliminary",
        display = "Preliminary",
        definition = "This is an initial or interim observation: data may be incomplete or unverified."
    )]
    Preliminary,
    /// Display: Final
    ///
    /// Definition: The observation is complete and there are no further actions needed.
    #[code(
        value = "final",
        display = "Final",
        definition = "The observation is complete and there are no further actions needed."
    )]
    Final,
    /// Display: Amended
    ///
    /// Definition: Subsequent to being Final, the observation has been modified subsequent.
    #[code(
        value = "amended",
        display = "Amended",
        definition = "Subsequent to being Final, the observation has been modified subsequent."
    )]
    Amended,
    /// Display: Corrected
    ///
    /// Definition: Subsequent to being Final, the observation has been modified to correct an error in the test result.
    #[code(
        value = "corrected",
        display = "Corrected",
        definition = "Subsequent to being Final, the observation has been modified to correct an error in the test result."
    )]
    Corrected,
    /// Display: Cancelled
    ///
    /// Definition: The observation is unavailable because the measurement was not started or not completed (also sometimes called "aborted").
    #[code(
        value = "cancelled",
        display = "Cancelled",
        definition = "The observation is unavailable because the measurement was not started or not completed (also sometimes called \"aborted\")."
    )]
    Cancelled,
    /// Display: Entered in Error
    ///
    /// Definition: The observation has been withdrawn following previous final release.
    #[code(
        value = "entered-in-error",
        display = "Entered in Error",
        definition = "The observation has been withdrawn following previous final release."
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
/// Coded [`ObservationStatus`] value: optional `id`, `extension` and member code.
pub type ObservationStatusCode = Coded<ObservationStatus>;
