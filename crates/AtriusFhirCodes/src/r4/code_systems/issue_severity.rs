// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: IssueSeverity
/// Canonical URL: http://hl7.org/fhir/issue-severity
/// Title: Issue Severity
/// Status: active
///
/// How the issue affects the success of the action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "IssueSeverity",
    system = "http://hl7.org/fhir/issue-severity",
    version = "4.0.1"
)]
pub enum IssueSeverity {
    /// Display: Fatal
    ///
    /// Definition: The issue caused the action to fail and no further checking could be performed.
    #[code(
        value = "fatal",
        display = "Fatal",
        definition = "The issue caused the action to fail and no further checking could be performed."
    )]
    Fatal,
    /// Display: Error
    ///
    /// Definition: The issue is sufficiently important to cause the action to fail.
    #[code(
        value = "error",
        display = "Error",
        definition = "The issue is sufficiently important to cause the action to fail."
    )]
    Error,
    /// Display: Warning
    ///
    /// Definition: The issue is not important enough to cause the action to fail but may cause it to be performed suboptimally or in a way that is not as desired.
    #[code(
        value = "warning",
        display = "Warning",
        definition = "The issue is not important enough to cause the action to fail but may cause it to be performed suboptimally or in a way that is not as desired."
    )]
    Warning,
    /// Display: Information
    ///
    /// Definition: The issue has no relation to the degree of success of the action.
    #[code(
        value = "information",
        display = "Information",
        definition = "The issue has no relation to the degree of success of the action."
    )]
    Information,
}
/// Coded [`IssueSeverity`] value: optional `id`, `extension` and member code.
pub type IssueSeverityCode = Coded<IssueSeverity>;
