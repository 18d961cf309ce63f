// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: ConditionalDeleteStatus
/// Canonical URL: http://hl7.org/fhir/conditional-delete-status
/// Title: Conditional Delete Status
/// Status: active
///
/// A code that indicates how the server supports conditional delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "ConditionalDeleteStatus",
    system = "http://hl7.org/fhir/conditional-delete-status",
    version = "4.0.1"
)]
pub enum ConditionalDeleteStatus {
    /// Display: Not Supported
    ///
    /// Definition: No support for conditional deletes.
    #[code(
        value = "not-supported",
        display = "Not Supported",
        definition = "No support for conditional deletes."
    )]
    NotSupported,
    /// Display: Single Deletes Supported
    ///
    /// Definition: Conditional deletes are supported, but only single resources at a time.
    #[code(
        value = "single",
        display = "Single Deletes Supported",
        definition = "Conditional deletes are supported, but only single resources at a time."
    )]
    Single,
    /// Display: Multiple Deletes Supported
    ///
    /// Definition: Conditional deletes are supported, and multiple resources can be deleted in a single interaction.
    #[code(
        value = "multiple",
        display = "Multiple Deletes Supported",
        definition = "Conditional deletes are supported, and multiple resources can be deleted in a single interaction."
    )]
    Multiple,
}
/// Coded [`ConditionalDeleteStatus`] value: optional `id`, `extension` and member code.
pub type ConditionalDeleteStatusCode = Coded<ConditionalDeleteStatus>;
