// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: LocationStatus
/// Canonical URL: http://hl7.org/fhir/location-status
/// Title: Location Status
/// Status: active
///
/// Indicates whether the location is still in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "LocationStatus",
    system = "http://hl7.org/fhir/location-status",
    version = "4.0.1"
)]
pub enum LocationStatus {
    /// Display: Active
    ///
    /// Definition: The location is operational.
    #[code(
        value = "active",
        display = "Active",
        definition = "The location is operational."
    )]
    Active,
    /// Display: Suspended
    ///
    /// Definition: The location is temporarily closed.
    #[code(
        value = "suspended",
        display = "Suspended",
        definition = "The location is temporarily closed."
    )]
    Suspended,
    /// Display: Inactive
    ///
    /// Definition: The location is no longer used.
    #[code(
        value = "inactive",
        display = "Inactive",
        definition = "The location is no longer used."
    )]
    Inactive,
}
/// Coded [`LocationStatus`] value: optional `id`, `extension` and member code.
pub type LocationStatusCode = Coded<LocationStatus>;
