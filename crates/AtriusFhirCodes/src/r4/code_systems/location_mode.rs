// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: LocationMode
/// Canonical URL: http://hl7.org/fhir/location-mode
/// Title: Location Mode
/// Status: active
///
/// Indicates whether a resource instance represents a specific location or a class of locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "LocationMode",
    system = "http://hl7.org/fhir/location-mode",
    version = "4.0.1"
)]
pub enum LocationMode {
    /// Display: Instance
    ///
    /// Definition: The Location resource represents a specific instance of a location (e.g. Operating Theatre 1A).
    #[code(
        value = "instance",
        display = "Instance",
        definition = "The Location resource represents a specific instance of a location (e.g. Operating Theatre 1A)."
    )]
    Instance,
    /// Display: Kind
    ///
    /// Definition: The Location represents a class of locations (e.g. Any Operating Theatre) although this class of locations could be constrained within a specific boundary (such as organization, or parent location, address etc.).
    #[code(
        value = "kind",
        display = "Kind",
        definition = "The Location represents a class of locations (e.g. Any Operating Theatre) although this class of locations could be constrained within a specific boundary (such as organization, or parent location, address etc.)."
    )]
    Kind,
}
/// Coded [`LocationMode`] value: optional `id`, `extension` and member code.
pub type LocationModeCode = Coded<LocationMode>;
