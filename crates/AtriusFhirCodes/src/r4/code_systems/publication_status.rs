// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: PublicationStatus
/// Canonical URL: http://hl7.org/fhir/publication-status
/// Title: Publication Status
/// Status: active
///
/// The lifecycle status of an artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "PublicationStatus",
    system = "http://hl7.org/fhir/publication-status",
    version = "4.0.1"
)]
pub enum PublicationStatus {
    /// Display: Draft
    ///
    /// Definition: This resource is still under development and is not yet considered to be ready for normal use.
    #[code(
        value = "draft",
        display = "Draft",
        definition = "This resource is still under development and is not yet considered to be ready for normal use."
    )]
    Draft,
    /// Display: Active
    ///
    /// Definition: This resource is ready for normal use.
    #[code(
        value = "active",
        display = "Active",
        definition = "This resource is ready for normal use."
    )]
    Active,
    /// Display: Retired
    ///
    /// Definition: This resource has been withdrawn or superseded and should no longer be used.
    #[code(
        value = "retired",
        display = "Retired",
        definition = "This resource has been withdrawn or superseded and should no longer be used."
    )]
    Retired,
    /// Display: Unknown
    ///
    /// Definition: The authoring system does not know which of the status values currently applies for this resource.
    #[code(
        value = "unknown",
        display = "Unknown",
        definition = "The authoring system does not know which of the status values currently applies for this resource."
    )]
    Unknown,
}
/// Coded [`PublicationStatus`] value: optional `id`, `extension` and member code.
pub type PublicationStatusCode = Coded<PublicationStatus>;
