// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: SubscriptionStatus
/// Canonical URL: http://hl7.org/fhir/subscription-status
/// Title: Subscription Status
/// Status: active
///
/// The status of a subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "SubscriptionStatus",
    system = "http://hl7.org/fhir/subscription-status",
    version = "4.0.1"
)]
pub enum SubscriptionStatus {
    /// Display: Requested
    ///
    /// Definition: The client has requested the subscription, and the server has not yet set it up.
    #[code(
        value = "requested",
        display = "Requested",
        definition = "The client has requested the subscription, and the server has not yet set it up."
    )]
    Requested,
    /// Display: Active
    ///
    /// Definition: The subscription is active.
    #[code(
        value = "active",
        display = "Active",
        definition = "The subscription is active."
    )]
    Active,
    /// Display: Error
    ///
    /// Definition: The server has an error executing the notification.
    #[code(
        value = "error",
        display = "Error",
        definition = "The server has an error executing the notification."
    )]
    Error,
    /// Display: Off
    ///
    /// Definition: Too many errors have occurred or the subscription has expired.
    #[code(
        value = "off",
        display = "Off",
        definition = "Too many errors have occurred or the subscription has expired."
    )]
    Off,
}
/// Coded [`SubscriptionStatus`] value: optional `id`, `extension` and member code.
pub type SubscriptionStatusCode = Coded<SubscriptionStatus>;
