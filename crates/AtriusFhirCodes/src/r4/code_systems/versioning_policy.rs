// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: ResourceVersionPolicy
/// Canonical URL: http://hl7.org/fhir/versioning-policy
/// Title: Resource Version Policy
/// Status: active
///
/// How the system supports versioning for a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "ResourceVersionPolicy",
    system = "http://hl7.org/fhir/versioning-policy",
    version = "4.0.1"
)]
pub enum ResourceVersionPolicy {
    /// Display: No VersionId Support
    ///
    /// Definition: VersionId meta-property is not supported (server) or used (client).
    #[code(
        value = "no-version",
        display = "No VersionId Support",
        definition = "VersionId meta-property is not supported (server) or used (client)."
    )]
    NoVersion,
    /// Display: Versioned
    ///
    /// Definition: VersionId meta-property is supported (server) or used (client).
    #[code(
        value = "versioned",
        display = "Versioned",
        definition = "VersionId meta-property is supported (server) or used (client)."
    )]
    Versioned,
    /// Display: VersionId tracked fully
    ///
    /// Definition: VersionId must be correct for updates (server) or will be specified (If-match header) for updates (client).
    #[code(
        value = "versioned-update",
        display = "VersionId tracked fully",
        definition = "VersionId must be correct for updates (server) or will be specified (If-match header) for updates (client)."
    )]
    VersionedUpdate,
}
/// Coded [`ResourceVersionPolicy`] value: optional `id`, `extension` and member code.
pub type ResourceVersionPolicyCode = Coded<ResourceVersionPolicy>;
