// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: ContactPointSystem
/// Canonical URL: http://hl7.org/fhir/contact-point-system
/// Title: Contact Point System
/// Status: active
///
/// Telecommunications form for contact point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "ContactPointSystem",
    system = "http://hl7.org/fhir/contact-point-system",
    version = "4.0.1"
)]
pub enum ContactPointSystem {
    /// Display: Phone
    ///
    /// Definition: The value is a telephone number used for voice calls.
    #[code(
        value = "phone",
        display = "Phone",
        definition = "The value is a telephone number used for voice calls."
    )]
    Phone,
    /// Display: Fax
    ///
    /// Definition: The value is a fax machine.
    #[code(value = "fax", display = "Fax", definition = "The value is a fax machine.")]
    Fax,
    /// Display: Email
    ///
    /// Definition: The value is an email address.
    #[code(
        value = "email",
        display = "Email",
        definition = "The value is an email address."
    )]
    Email,
    /// Display: Pager
    ///
    /// Definition: The value is a pager number.
    #[code(
        value = "pager",
        display = "Pager",
        definition = "The value is a pager number."
    )]
    Pager,
    /// Display: URL
    ///
    /// Definition: A contact that is not a phone, fax, pager or email address and is expressed as a URL.
    #[code(
        value = "url",
        display = "URL",
        definition = "A contact that is not a phone, fax, pager or email address and is expressed as a URL."
    )]
    Url,
    /// Display: SMS
    ///
    /// Definition: A contact that can be used for sending an sms message (e.g. mobile phones, some landlines).
    #[code(
        value = "sms",
        display = "SMS",
        definition = "A contact that can be used for sending an sms message (e.g. mobile phones, some landlines)."
    )]
    Sms,
    /// Display: Other
    ///
    /// Definition: A contact that is not a phone, fax, page or email address and is not expressible as a URL.
    #[code(
        value = "other",
        display = "Other",
        definition = "A contact that is not a phone, fax, page or email address and is not expressible as a URL."
    )]
    Other,
}
/// Coded [`ContactPointSystem`] value: optional `id`, `extension` and member code.
pub type ContactPointSystemCode = Coded<ContactPointSystem>;
/// Legacy name of [`ContactPointSystem`].
#[deprecated(note = "use `ContactPointSystem`")]
pub type ContactPointSystemValueSet = ContactPointSystem;
