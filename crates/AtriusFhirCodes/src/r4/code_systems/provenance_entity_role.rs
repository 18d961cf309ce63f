// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: ProvenanceEntityRole
/// Canonical URL: http://hl7.org/fhir/provenance-entity-role
/// Title: Provenance Entity Role
/// Status: active
///
/// How an entity was used in an activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "ProvenanceEntityRole",
    system = "http://hl7.org/fhir/provenance-entity-role",
    version = "4.0.1"
)]
pub enum ProvenanceEntityRole {
    /// Display: Derivation
    ///
    /// Definition: A transformation of an entity into another, an update of an entity resulting in a new one, or the construction of a new entity based on a pre-existing entity.
    #[code(
        value = "derivation",
        display = "Derivation",
        definition = "A transformation of an entity into another, an update of an entity resulting in a new one, or the construction of a new entity based on a pre-existing entity."
    )]
    Derivation,
    /// Display: Revision
    ///
    /// Definition: A derivation for which the resulting entity is a revised version of some original.
    #[code(
        value = "revision",
        display = "Revision",
        definition = "A derivation for which the resulting entity is a revised version of some original."
    )]
    Revision,
    /// Display: Quotation
    ///
    /// Definition: The repeat of (some or all of) an entity, such as text or image, by someone who might or might not be its original author.
    #[code(
        value = "quotation",
        display = "Quotation",
        definition = "The repeat of (some or all of) an entity, such as text or image, by someone who might or might not be its original author."
    )]
    Quotation,
    /// Display: Source
    ///
    /// Definition: A primary source for a topic refers to something produced by some agent with direct experience and knowledge about the topic, at the time of the topic's study, without benefit from hindsight.
    #[code(
        value = "source",
        display = "Source",
        definition = "A primary source for a topic refers to something produced by some agent with direct experience and knowledge about the topic, at the time of the topic's study, without benefit from hindsight."
    )]
    Source,
    /// Display: Removal
    ///
    /// Definition: A derivation for which the entity is removed from accessibility usually through the use of the Delete operation.
    #[code(
        value = "removal",
        display = "Removal",
        definition = "A derivation for which the entity is removed from accessibility usually through the use of the Delete operation."
    )]
    Removal,
}
/// Coded [`ProvenanceEntityRole`] value: optional `id`, `extension` and member code.
pub type ProvenanceEntityRoleCode = Coded<ProvenanceEntityRole>;
/// Legacy name of [`ProvenanceEntityRole`].
#[deprecated(note = "use `ProvenanceEntityRole`")]
pub type ProvenanceEntityRoleValueSet = ProvenanceEntityRole;
