// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: InvoiceStatus
/// Canonical URL: http://hl7.org/fhir/invoice-status
/// Title: Invoice Status
/// Status: active
///
/// Codes identifying the lifecycle stage of an Invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "InvoiceStatus",
    system = "http://hl7.org/fhir/invoice-status",
    version = "4.0.1"
)]
pub enum InvoiceStatus {
    /// Display: draft
    ///
    /// Definition: the invoice has been prepared but not yet finalized.
    #[code(
        value = "draft",
        display = "draft",
        definition = "the invoice has been prepared but not yet finalized."
    )]
    Draft,
    /// Display: issued
    ///
    /// Definition: the invoice has been finalized and sent to the recipient.
    #[code(
        value = "issued",
        display = "issued",
        definition = "the invoice has been finalized and sent to the recipient."
    )]
    Issued,
    /// Display: balanced
    ///
    /// Definition: the invoice has been balanced / completely paid.
    #[code(
        value = "balanced",
        display = "balanced",
        definition = "the invoice has been balanced / completely paid."
    )]
    Balanced,
    /// Display: cancelled
    ///
    /// Definition: the invoice was cancelled.
    #[code(
        value = "cancelled",
        display = "cancelled",
        definition = "the invoice was cancelled."
    )]
    Cancelled,
    /// Display: entered in error
    ///
    /// Definition: the invoice was determined as entered in error before it was issued.
    #[code(
        value = "entered-in-error",
        display = "entered in error",
        definition = "the invoice was determined as entered in error before it was issued."
    )]
    EnteredInError,
}
/// Coded [`InvoiceStatus`] value: optional `id`, `extension` and member code.
pub type InvoiceStatusCode = Coded<InvoiceStatus>;
