// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: NameUse
/// Canonical URL: http://hl7.org/fhir/name-use
/// Title: Name Use
/// Status: active
///
/// The use of a human name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "NameUse",
    system = "http://hl7.org/fhir/name-use",
    version = "4.0.1"
)]
pub enum NameUse {
    /// Display: Usual
    ///
    /// Definition: Known as/conventional/the one you normally use.
    #[code(
        value = "usual",
        display = "Usual",
        definition = "Known as/conventional/the one you normally use."
    )]
    Usual,
    /// Display: Official
    ///
    /// Definition: The formal name as registered in an official (government) registry, but which name might not be commonly used.
    #[code(
        value = "official",
        display = "Official",
        definition = "The formal name as registered in an official (government) registry, but which name might not be commonly used."
    )]
    Official,
    /// Display: Temp
    ///
    /// Definition: A temporary name. Name.period can provide more detailed information.
    #[code(
        value = "temp",
        display = "Temp",
        definition = "A temporary name. Name.period can provide more detailed information."
    )]
    Temp,
    /// Display: Nickname
    ///
    /// Definition: A name that is used to address the person in an informal manner, but is not part of their formal or usual name.
    #[code(
        value = "nickname",
        display = "Nickname",
        definition = "A name that is used to address the person in an informal manner, but is not part of their formal or usual name."
    )]
    Nickname,
    /// Display: Anonymous
    ///
    /// Definition: Anonymous assigned name, alias, or pseudonym (used to protect a person's identity for privacy reasons).
    #[code(
        value = "anonymous",
        display = "Anonymous",
        definition = "Anonymous assigned name, alias, or pseudonym (used to protect a person's identity for privacy reasons)."
    )]
    Anonymous,
    /// Display: Old
    ///
    /// Definition: This name is no longer in use (or was never correct, but retained for records).
    #[code(
        value = "old",
        display = "Old",
        definition = "This name is no longer in use (or was never correct, but retained for records)."
    )]
    Old,
    /// Display: Name changed for Marriage
    ///
    /// Definition: A name used prior to changing name because of marriage.
    #[code(
        value = "maiden",
        display = "Name changed for Marriage",
        definition = "A name used prior to changing name because of marriage."
    )]
    Maiden,
}
/// Coded [`NameUse`] value: optional `id`, `extension` and member code.
pub type NameUseCode = Coded<NameUse>;
