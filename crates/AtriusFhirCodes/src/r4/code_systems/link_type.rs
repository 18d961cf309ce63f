// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: LinkType
/// Canonical URL: http://hl7.org/fhir/link-type
/// Title: Link Type
/// Status: active
///
/// The type of link between this patient resource and another patient resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "LinkType",
    system = "http://hl7.org/fhir/link-type",
    version = "4.0.1"
)]
pub enum LinkType {
    /// Display: Replaced-by
    ///
    /// Definition: The patient resource containing this link must no longer be used.
    #[code(
        value = "replaced-by",
        display = "Replaced-by",
        definition = "The patient resource containing this link must no longer be used."
    )]
    ReplacedBy,
    /// Display: Replaces
    ///
    /// Definition: The patient resource containing this link is the current active patient record.
    #[code(
        value = "replaces",
        display = "Replaces",
        definition = "The patient resource containing this link is the current active patient record."
    )]
    Replaces,
    /// Display: Refer
    ///
    /// Definition: The patient resource containing this link is in use and valid but not considered the main source of information about a patient.
    #[code(
        value = "refer",
        display = "Refer",
        definition = "The patient resource containing this link is in use and valid but not considered the main source of information about a patient."
    )]
    Refer,
    /// Display: See also
    ///
    /// Definition: The patient resource containing this link is in use and valid, but points to another patient resource that is known to contain data about the same person.
    #[code(
        value = "seealso",
        display = "See also",
        definition = "The patient resource containing this link is in use and valid, but points to another patient resource that is known to contain data about the same person."
    )]
    Seealso,
}
/// Coded [`LinkType`] value: optional `id`, `extension` and member code.
pub type LinkTypeCode = Coded<LinkType>;
