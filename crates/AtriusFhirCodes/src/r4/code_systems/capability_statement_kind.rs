// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: CapabilityStatementKind
/// Canonical URL: http://hl7.org/fhir/capability-statement-kind
/// Title: Capability Statement Kind
/// Status: active
///
/// How a capability statement is intended to be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "CapabilityStatementKind",
    system = "http://hl7.org/fhir/capability-statement-kind",
    version = "4.0.1"
)]
pub enum CapabilityStatementKind {
    /// Display: Instance
    ///
    /// Definition: The CapabilityStatement instance represents the present capabilities of a specific system instance.
    #[code(
        value = "instance",
        display = "Instance",
        definition = "The CapabilityStatement instance represents the present capabilities of a specific system instance."
    )]
    Instance,
    /// Display: Capability
    ///
    /// Definition: The CapabilityStatement instance represents the capabilities of a system or piece of software, independent of a particular installation.
    #[code(
        value = "capability",
        display = "Capability",
        definition = "The CapabilityStatement instance represents the capabilities of a system or piece of software, independent of a particular installation."
    )]
    Capability,
    /// Display: Requirements
    ///
    /// Definition: The CapabilityStatement instance represents a set of requirements for other systems to meet.
    #[code(
        value = "requirements",
        display = "Requirements",
        definition = "The CapabilityStatement instance represents a set of requirements for other systems to meet."
    )]
    Requirements,
}
/// Coded [`CapabilityStatementKind`] value: optional `id`, `extension` and member code.
pub type CapabilityStatementKindCode = Coded<CapabilityStatementKind>;
