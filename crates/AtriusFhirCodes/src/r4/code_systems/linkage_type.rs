// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: LinkageType
/// Canonical URL: http://hl7.org/fhir/linkage-type
/// Title: Linkage Type
/// Status: active
///
/// Used to distinguish different roles a resource can play within a set of linked resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "LinkageType",
    system = "http://hl7.org/fhir/linkage-type",
    version = "4.0.1"
)]
pub enum LinkageType {
    /// Display: Source of Truth
    ///
    /// Definition: The resource represents the "source of truth" (from the perspective of this Linkage resource) for the underlying event/condition/etc.
    #[code(
        value = "source",
        display = "Source of Truth",
        definition = "The resource represents the \"source of truth\" (from the perspective of this Linkage resource) for the underlying event/condition/etc."
    )]
    Source,
    /// Display: Alternate Record
    ///
    /// Definition: The resource represents an alternative view of the underlying event/condition/etc.
    #[code(
        value = "alternate",
        display = "Alternate Record",
        definition = "The resource represents an alternative view of the underlying event/condition/etc."
    )]
    Alternate,
    /// Display: Historical/Obsolete Record
    ///
    /// Definition: The resource represents an obsolete record of the underlying event/condition/etc.
    #[code(
        value = "historical",
        display = "Historical/Obsolete Record",
        definition = "The resource represents an obsolete record of the underlying event/condition/etc."
    )]
    Historical,
}
/// Coded [`LinkageType`] value: optional `id`, `extension` and member code.
pub type LinkageTypeCode = Coded<LinkageType>;
