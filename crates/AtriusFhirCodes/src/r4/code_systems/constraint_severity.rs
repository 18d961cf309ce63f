// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: ConstraintSeverity
/// Canonical URL: http://hl7.org/fhir/constraint-severity
/// Title: Constraint Severity
/// Status: active
///
/// SHALL applications comply with this constraint?
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "ConstraintSeverity",
    system = "http://hl7.org/fhir/constraint-severity",
    version = "4.0.1"
)]
pub enum ConstraintSeverity {
    /// Display: Error
    ///
    /// Definition: If the constraint is violated, the resource is not conformant.
    #[code(
        value = "error",
        display = "Error",
        definition = "If the constraint is violated, the resource is not conformant."
    )]
    Error,
    /// Display: Warning
    ///
    /// Definition: If the constraint is violated, the resource is conformant, but it is not necessarily following best practice.
    #[code(
        value = "warning",
        display = "Warning",
        definition = "If the constraint is violated, the resource is conformant, but it is not necessarily following best practice."
    )]
    Warning,
}
/// Coded [`ConstraintSeverity`] value: optional `id`, `extension` and member code.
pub type ConstraintSeverityCode = Coded<ConstraintSeverity>;
