// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: GroupType
/// Canonical URL: http://hl7.org/fhir/group-type
/// Title: Group Type
/// Status: active
///
/// Types of resources that are part of group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "GroupType",
    system = "http://hl7.org/fhir/group-type",
    version = "4.0.1"
)]
pub enum GroupType {
    /// Display: Person
    ///
    /// Definition: Group contains "person" Patient resources.
    #[code(
        value = "person",
        display = "Person",
        definition = "Group contains \"person\" Patient resources."
    )]
    Person,
    /// Display: Animal
    ///
    /// Definition: Group contains "animal" Patient resources.
    #[code(
        value = "animal",
        display = "Animal",
        definition = "Group contains \"animal\" Patient resources."
    )]
    Animal,
    /// Display: Practitioner
    ///
    /// Definition: Group contains healthcare practitioner resources (Practitioner or PractitionerRole).
    #[code(
        value = "practitioner",
        display = "Practitioner",
        definition = "Group contains healthcare practitioner resources (Practitioner or PractitionerRole)."
    )]
    Practitioner,
    /// Display: Device
    ///
    /// Definition: Group contains Device resources.
    #[code(
        value = "device",
        display = "Device",
        definition = "Group contains Device resources."
    )]
    Device,
    /// Display: Medication
    ///
    /// Definition: Group contains Medication resources.
    #[code(
        value = "medication",
        display = "Medication",
        definition = "Group contains Medication resources."
    )]
    Medication,
    /// Display: Substance
    ///
    /// Definition: Group contains Substance resources.
    #[code(
        value = "substance",
        display = "Substance",
        definition = "Group contains Substance resources."
    )]
    Substance,
}
/// Coded [`GroupType`] value: optional `id`, `extension` and member code.
pub type GroupTypeCode = Coded<GroupType>;
