// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: SubscriptionChannelType
/// Canonical URL: http://hl7.org/fhir/subscription-channel-type
/// Title: Subscription Channel Type
/// Status: active
///
/// The type of method used to execute a subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "SubscriptionChannelType",
    system = "http://hl7.org/fhir/subscription-channel-type",
    version = "4.0.1"
)]
pub enum SubscriptionChannelType {
    /// Display: Rest Hook
    ///
    /// Definition: The channel is executed by making a post to the URI. If a payload is included, the URL is interpreted as the service base, and an update (PUT) is made.
    #[code(
        value = "rest-hook",
        display = "Rest Hook",
        definition = "The channel is executed by making a post to the URI. If a payload is included, the URL is interpreted as the service base, and an update (PUT) is made."
    )]
    RestHook,
    /// Display: Websocket
    ///
    /// Definition: The channel is executed by sending a packet across a web socket connection maintained by the client.
    #[code(
        value = "websocket",
        display = "Websocket",
        definition = "The channel is executed by sending a packet across a web socket connection maintained by the client."
    )]
    Websocket,
    /// Display: Email
    ///
    /// Definition: The channel is executed by sending an email to the email addressed in the URI (which must be a mailto:).
    #[code(
        value = "email",
        display = "Email",
        definition = "The channel is executed by sending an email to the email addressed in the URI (which must be a mailto:)."
    )]
    Email,
    /// Display: SMS
    ///
    /// Definition: The channel is executed by sending an SMS message to the phone number identified in the URL (tel:).
    #[code(
        value = "sms",
        display = "SMS",
        definition = "The channel is executed by sending an SMS message to the phone number identified in the URL (tel:)."
    )]
    Sms,
    /// Display: Message
    ///
    /// Definition: The channel is executed by sending a message (e.g. a Bundle with a MessageHeader resource etc.) to the application identified in the URI.
    #[code(
        value = "message",
        display = "Message",
        definition = "The channel is executed by sending a message (e.g. a Bundle with a MessageHeader resource etc.) to the application identified in the URI."
    )]
    Message,
}
/// Coded [`SubscriptionChannelType`] value: optional `id`, `extension` and member code.
pub type SubscriptionChannelTypeCode = Coded<SubscriptionChannelType>;
