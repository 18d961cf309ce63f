// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: ChargeItemStatus
/// Canonical URL: http://hl7.org/fhir/chargeitem-status
/// Title: Charge Item Status
/// Status: active
///
/// Codes identifying the lifecycle stage of a ChargeItem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "ChargeItemStatus",
    system = "http://hl7.org/fhir/chargeitem-status",
    version = "4.0.1"
)]
pub enum ChargeItemStatus {
    /// Display: Planned
    ///
    /// Definition: The charge item has been entered, but the charged service is not yet complete, so it shall not be billed yet but might be used in the context of pre-authorization.
    #[code(
        value = "planned",
        display = "Planned",
        definition = "The charge item has been entered, but the charged service is not yet complete, so it shall not be billed yet but might be used in the context of pre-authorization."
    )]
    Planned,
    /// Display: Billable
    ///
    /// Definition: The charge item is ready for billing.
    #[code(
        value = "billable",
        display = "Billable",
        definition = "The charge item is ready for billing."
    )]
    Billable,
    /// Display: Not billable
    ///
    /// Definition: The charge item has been determined to be not billable.
    #[code(
        value = "not-billable",
        display = "Not billable",
        definition = "The charge item has been determined to be not billable."
    )]
    NotBillable,
    /// Display: Aborted
    ///
    /// Definition: The processing of the charge was aborted.
    #[code(
        value = "aborted",
        display = "Aborted",
        definition = "The processing of the charge was aborted."
    )]
    Aborted,
    /// Display: Billed
    ///
    /// Definition: The charge item has been billed.
    #[code(
        value = "billed",
        display = "Billed",
        definition = "The charge item has been billed."
    )]
    Billed,
    /// Display: Entered in Error
    ///
    /// Definition: The charge item has been entered in error and should not be processed for billing.
    #[code(
        value = "entered-in-error",
        display = "Entered in Error",
        definition = "The charge item has been entered in error and should not be processed for billing."
    )]
    EnteredInError,
    /// Display: Unknown
    ///
    /// Definition: The authoring system does not know which of the status values currently applies for this charge item.
    #[code(
        value = "unknown",
        display = "Unknown",
        definition = "The authoring system does not know which of the status values currently applies for this charge item."
    )]
    Unknown,
}
/// Coded [`ChargeItemStatus`] value: optional `id`, `extension` and member code.
pub type ChargeItemStatusCode = Coded<ChargeItemStatus>;
