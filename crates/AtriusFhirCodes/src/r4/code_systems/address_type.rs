// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: AddressType
/// Canonical URL: http://hl7.org/fhir/address-type
/// Title: Address Type
/// Status: active
///
/// The type of an address (physical / postal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "AddressType",
    system = "http://hl7.org/fhir/address-type",
    version = "4.0.1"
)]
pub enum AddressType {
    /// Display: Postal
    ///
    /// Definition: Mailing addresses - PO Boxes and care-of addresses.
    #[code(
        value = "postal",
        display = "Postal",
        definition = "Mailing addresses - PO Boxes and care-of addresses."
    )]
    Postal,
    /// Display: Physical
    ///
    /// Definition: A physical address that can be visited.
    #[code(
        value = "physical",
        display = "Physical",
        definition = "A physical address that can be visited."
    )]
    Physical,
    /// Display: Postal & Physical
    ///
    /// Definition: An address that is both physical and postal.
    #[code(
        value = "both",
        display = "Postal & Physical",
        definition = "An address that is both physical and postal."
    )]
    Both,
}
/// Coded [`AddressType`] value: optional `id`, `extension` and member code.
pub type AddressTypeCode = Coded<AddressType>;
