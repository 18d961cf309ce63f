// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: AddressUse
/// Canonical URL: http://hl7.org/fhir/address-use
/// Title: Address Use
/// Status: active
///
/// The use of an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "AddressUse",
    system = "http://hl7.org/fhir/address-use",
    version = "4.0.1"
)]
pub enum AddressUse {
    /// Display: Home
    ///
    /// Definition: A communication address at a home.
    #[code(
        value = "home",
        display = "Home",
        definition = "A communication address at a home."
    )]
    Home,
    /// Display: Work
    ///
    /// Definition: An office address. First choice for business related contacts during business hours.
    #[code(
        value = "work",
        display = "Work",
        definition = "An office address. First choice for business related contacts during business hours."
    )]
    Work,
    /// Display: Temporary
    ///
    /// Definition: A temporary address. The period can provide more detailed information.
    #[code(
        value = "temp",
        display = "Temporary",
        definition = "A temporary address. The period can provide more detailed information."
    )]
    Temp,
    /// Display: Old / Incorrect
    ///
    /// Definition: This address is no longer in use (or was never correct but retained for records).
    #[code(
        value = "old",
        display = "Old / Incorrect",
        definition = "This address is no longer in use (or was never correct but retained for records)."
    )]
    Old,
    /// Display: Billing
    ///
    /// Definition: An address to be used to send bills, invoices, receipts etc.
    #[code(
        value = "billing",
        display = "Billing",
        definition = "An address to be used to send bills, invoices, receipts etc."
    )]
    Billing,
}
/// Coded [`AddressUse`] value: optional `id`, `extension` and member code.
pub type AddressUseCode = Coded<AddressUse>;
