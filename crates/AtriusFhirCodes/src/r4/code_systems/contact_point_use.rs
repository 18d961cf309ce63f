// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: ContactPointUse
/// Canonical URL: http://hl7.org/fhir/contact-point-use
/// Title: Contact Point Use
/// Status: active
///
/// Use of contact point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "ContactPointUse",
    system = "http://hl7.org/fhir/contact-point-use",
    version = "4.0.1"
)]
pub enum ContactPointUse {
    /// Display: Home
    ///
    /// Definition: A communication contact point at a home; attempted contacts for business purposes might intrude privacy and chances are one will contact family or other household members instead of the person one wishes to call.
    #[code(
        value = "home",
        display = "Home",
        definition = "A communication contact point at a home; attempted contacts for business purposes might intrude privacy and chances are one will contact family or other household members instead of the person one wishes to call."
    )]
    Home,
    /// Display: Work
    ///
    /// Definition: An office contact point. First choice for business related contacts during business hours.
    #[code(
        value = "work",
        display = "Work",
        definition = "An office contact point. First choice for business related contacts during business hours."
    )]
    Work,
    /// Display: Temp
    ///
    /// Definition: A temporary contact point. The period can provide more detailed information.
    #[code(
        value = "temp",
        display = "Temp",
        definition = "A temporary contact point. The period can provide more detailed information."
    )]
    Temp,
    /// Display: Old
    ///
    /// Definition: This contact point is no longer in use (or was never correct, but retained for records).
    #[code(
        value = "old",
        display = "Old",
        definition = "This contact point is no longer in use (or was never correct, but retained for records)."
    )]
    Old,
    /// Display: Mobile
    ///
    /// Definition: A telecommunication device that moves and stays with its owner.
    #[code(
        value = "mobile",
        display = "Mobile",
        definition = "A telecommunication device that moves and stays with its owner."
    )]
    Mobile,
}
/// Coded [`ContactPointUse`] value: optional `id`, `extension` and member code.
pub type ContactPointUseCode = Coded<ContactPointUse>;
