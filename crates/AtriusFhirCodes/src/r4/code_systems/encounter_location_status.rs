// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: EncounterLocationStatus
/// Canonical URL: http://hl7.org/fhir/encounter-location-status
/// Title: Encounter Location Status
/// Status: active
///
/// The status of the location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "EncounterLocationStatus",
    system = "http://hl7.org/fhir/encounter-location-status",
    version = "4.0.1"
)]
pub enum EncounterLocationStatus {
    /// Display: Planned
    ///
    /// Definition: The patient is planned to be moved to this location at some point in the future.
    #[code(
        value = "planned",
        display = "Planned",
        definition = "The patient is planned to be moved to this location at some point in the future."
    )]
    Planned,
    /// Display: Active
    ///
    /// Definition: The patient is currently at this location, or was between the period specified.
    #[code(
        value = "active",
        display = "Active",
        definition = "The patient is currently at this location, or was between the period specified."
    )]
    Active,
    /// Display: Reserved
    ///
    /// Definition: This location is held empty for this patient.
    #[code(
        value = "reserved",
        display = "Reserved",
        definition = "This location is held empty for this patient."
    )]
    Reserved,
    /// Display: Completed
    ///
    /// Definition: The patient was at this location during the period specified.
    #[code(
        value = "completed",
        display = "Completed",
        definition = "The patient was at this location during the period specified."
    )]
    Completed,
}
/// Coded [`EncounterLocationStatus`] value: optional `id`, `extension` and member code.
pub type EncounterLocationStatusCode = Coded<EncounterLocationStatus>;
