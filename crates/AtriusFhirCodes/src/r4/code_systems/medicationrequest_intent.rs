// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: MedicationRequestIntent
/// Canonical URL: http://hl7.org/fhir/CodeSystem/medicationrequest-intent
/// Title: Medication Request Intent
/// Status: active
///
/// The kind of medication order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "MedicationRequestIntent",
    system = "http://hl7.org/fhir/CodeSystem/medicationrequest-intent",
    version = "4.0.1"
)]
pub enum MedicationRequestIntent {
    /// Display: Proposal
    ///
    /// Definition: The request is a suggestion made by someone/something that doesn't have an intention to ensure it occurs and without providing an authorization to act.
    #[code(
        value = "proposal",
        display = "Proposal",
        definition = "The request is a suggestion made by someone/something that doesn't have an intention to ensure it occurs and without providing an authorization to act."
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
    /// Definition: The request represents a request/demand and authorization for action.
    #[code(
        value = "order",
        display = "Order",
        definition = "The request represents a request/demand and authorization for action."
    )]
    Order,
    /// Display: Original Order
    ///
    /// Definition: The request represents the original authorization for the medication request.
    #[code(
        value = "original-order",
        display = "Original Order",
        definition = "The request represents the original authorization for the medication request."
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
    /// Definition: The request represents an instance for the particular order, for example a medication administration record.
    #[code(
        value = "instance-order",
        display = "Instance Order",
        definition = "The request represents an instance for the particular order, for example a medication administration record."
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
/// Coded [`MedicationRequestIntent`] value: optional `id`, `extension` and member code.
pub type MedicationRequestIntentCode = Coded<MedicationRequestIntent>;
