// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: RequestPriority
/// Canonical URL: http://hl7.org/fhir/request-priority
/// Title: Request Priority
/// Status: active
///
/// Identifies the level of importance to be assigned to actioning the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "RequestPriority",
    system = "http://hl7.org/fhir/request-priority",
    version = "4.0.1"
)]
pub enum RequestPriority {
    /// Display: Routine
    ///
    /// Definition: The request has normal priority.
    #[code(
        value = "routine",
        display = "Routine",
        definition = "The request has normal priority."
    )]
    Routine,
    /// Display: Urgent
    ///
    /// Definition: The request should be actioned promptly - higher priority than routine.
    #[code(
        value = "urgent",
        display = "Urgent",
        definition = "The request should be actioned promptly - higher priority than routine."
    )]
    Urgent,
    /// Display: ASAP
    ///
    /// Definition: The request should be actioned as soon as possible - higher priority than urgent.
    #[code(
        value = "asap",
        display = "ASAP",
        definition = "The request should be actioned as soon as possible - higher priority than urgent."
    )]
    Asap,
    /// Display: STAT
    ///
    /// Definition: The request should be actioned immediately - highest possible priority.
    #[code(
        value = "stat",
        display = "STAT",
        definition = "The request should be actioned immediately - highest possible priority."
    )]
    Stat,
}
/// Coded [`RequestPriority`] value: optional `id`, `extension` and member code.
pub type RequestPriorityCode = Coded<RequestPriority>;
