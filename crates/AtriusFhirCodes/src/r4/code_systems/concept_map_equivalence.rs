// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: ConceptMapEquivalence
/// Canonical URL: http://hl7.org/fhir/concept-map-equivalence
/// Title: Concept Map Equivalence
/// Status: active
///
/// The degree of equivalence between concepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "ConceptMapEquivalence",
    system = "http://hl7.org/fhir/concept-map-equivalence",
    version = "4.0.1"
)]
pub enum ConceptMapEquivalence {
    /// Display: Related To
    ///
    /// Definition: The concepts are related to each other, and have at least some overlap in meaning, but the exact relationship is not known.
    #[code(
        value = "relatedto",
        display = "Related To",
        definition = "The concepts are related to each other, and have at least some overlap in meaning, but the exact relationship is not known."
    )]
    Relatedto,
    /// Display: Equivalent
    ///
    /// Definition: The definitions of the concepts mean the same thing (including when structural implications of meaning are considered).
    #[code(
        value = "equivalent",
        display = "Equivalent",
        definition = "The definitions of the concepts mean the same thing (including when structural implications of meaning are considered)."
    )]
    Equivalent,
    /// Display: Equal
    ///
    /// Definition: The definitions of the concepts are exactly the same (i.e. only grammatical differences) and structural implications of meaning are identical or irrelevant.
    #[code(
        value = "equal",
        display = "Equal",
        definition = "The definitions of the concepts are exactly the same (i.e. only grammatical differences) and structural implications of meaning are identical or irrelevant."
    )]
    Equal,
    /// Display: Wider
    ///
    /// Definition: The target mapping is wider in meaning than the source concept.
    #[code(
        value = "wider",
        display = "Wider",
        definition = "The target mapping is wider in meaning than the source concept."
    )]
    Wider,
    /// Display: Subsumes
    ///
    /// Definition: The target mapping subsumes the meaning of the source concept.
    #[code(
        value = "subsumes",
        display = "Subsumes",
        definition = "The target mapping subsumes the meaning of the source concept."
    )]
    Subsumes,
    /// Display: Narrower
    ///
    /// Definition: The target mapping is narrower in meaning than the source concept.
    #[code(
        value = "narrower",
        display = "Narrower",
        definition = "The target mapping is narrower in meaning than the source concept."
    )]
    Narrower,
    /// Display: Specializes
    ///
    /// Definition: The target mapping specializes the meaning of the source concept.
    #[code(
        value = "specializes",
        display = "Specializes",
        definition = "The target mapping specializes the meaning of the source concept."
    )]
    Specializes,
    /// Display: Inexact
    ///
    /// Definition: There is some similarity between the concepts, but the exact relationship is not known.
    #[code(
        value = "inexact",
        display = "Inexact",
        definition = "There is some similarity between the concepts, but the exact relationship is not known."
    )]
    Inexact,
    /// Display: Unmatched
    ///
    /// Definition: There is no match for this concept in the target code system.
    #[code(
        value = "unmatched",
        display = "Unmatched",
        definition = "There is no match for this concept in the target code system."
    )]
    Unmatched,
    /// Display: Disjoint
    ///
    /// Definition: This is an explicit assertion that there is no mapping between the source and target concept.
    #[code(
        value = "disjoint",
        display = "Disjoint",
        definition = "This is an explicit assertion that there is no mapping between the source and target concept."
    )]
    Disjoint,
}
/// Coded [`ConceptMapEquivalence`] value: optional `id`, `extension` and member code.
pub type ConceptMapEquivalenceCode = Coded<ConceptMapEquivalence>;
