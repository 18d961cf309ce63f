// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: CarePlanIntent
/// Canonical URL: http://hl7.org/fhir/request-intent
/// Title: Care Plan Intent
/// Status: active
///
/// Codes indicating the degree of authority/intentionality associated with a care plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "CarePlanIntent",
    system = "http://hl7.org/fhir/request-intent",
    version = "4.0.1"
)]
pub enum CarePlanIntent {
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
    /// Definition: The request represents a request/demand and authorization for action by a Requester.
    #[code(
        value = "order",
        display = "Order",
        definition = "The request represents a request/demand and authorization for action by a Requester."
    )]
    Order,
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
/// Coded [`CarePlanIntent`] value: optional `id`, `extension` and member code.
pub type CarePlanIntentCode = Coded<CarePlanIntent>;
