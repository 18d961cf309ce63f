// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: TaskIntent
/// Canonical URL: http://hl7.org/fhir/task-intent
/// Title: Task Intent
/// Status: active
///
/// Distinguishes whether the task is a proposal, plan or full order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "TaskIntent",
    system = "http://hl7.org/fhir/task-intent",
    version = "4.0.1"
)]
pub enum TaskIntent {
    /// Display: Unknown
    ///
    /// Definition: The intent is not known.
    #[code(
        value = "unknown",
        display = "Unknown",
        definition = "The intent is not known."
    )]
    Unknown,
    /// Display: Proposal
    ///
    /// Definition: The request is a suggestion made by someone/something that does not have an intention to ensure it occurs and without providing an authorization to act.
    #[code(
        value = "proposal",
        display = "Proposal",
        definition = "The request is a suggestion made by someone/something that does not have an intention to ensure it occurs and without providing an authorization to act."
    )]
    Proposal,
    /// Display: Plan
    ///
    /// Definition: The request represents an intention to ensure something occurs without providing an authorization for others to act.
    #[code(
        value = "plan",
        display = "Plan",
        definition = "The request represents an intention to ensure something occurs without providing an authorization for others to act."
    )]
    Plan,
    /// Display: Order
    ///
    /// Definition: The request represents a request/demand and authorization for action by a Practitioner.
    #[code(
        value = "order",
        display = "Order",
        definition = "The request represents a request/demand and authorization for action by a Practitioner."
    )]
    Order,
    /// Display: Original Order
    ///
    /// Definition: The request represents an original authorization for action.
    #[code(
        value = "original-order",
        display = "Original Order",
        definition = "The request represents an original authorization for action."
    )]
    OriginalOrder,
    /// Display: Reflex Order
    ///
    /// Definition: The request represents an automatically generated supplemental authorization for action based on a parent authorization together with initial results of the action taken against that parent authorization.
    #[code(
        value = "reflex-order",
        display = "Reflex Order",
        definition = "The request represents an automatically generated supplemental authorization for action based on a parent authorization together with initial results of the action taken against that parent authorization."
    )]
    ReflexOrder,
    /// Display: Filler Order
    ///
    /// Definition: The request represents the view of an authorization instantiated by a fulfilling system representing the details of the fulfiller's intention to act upon a submitted order.
    #[code(
        value = "filler-order",
        display = "Filler Order",
        definition = "The request represents the view of an authorization instantiated by a fulfilling system representing the details of the fulfiller's intention to act upon a submitted order."
    )]
    FillerOrder,
    /// Display: Instance Order
    ///
    /// Definition: An order created in fulfillment of a broader order that represents the authorization for a single activity occurrence.
    #[code(
        value = "instance-order",
        display = "Instance Order",
        definition = "An order created in fulfillment of a broader order that represents the authorization for a single activity occurrence."
    )]
    InstanceOrder,
    /// Display: Option
    ///
    /// Definition: The request represents a component or option for a RequestGroup that establishes timing, conditionality and/or other constraints among a set of requests.
    #[code(
        value = "option",
        display = "Option",
        definition = "The request represents a component or option for a RequestGroup that establishes timing, conditionality and/or other constraints among a set of requests."
    )]
    Option,
}
/// Coded [`TaskIntent`] value: optional `id`, `extension` and member code.
pub type TaskIntentCode = Coded<TaskIntent>;
