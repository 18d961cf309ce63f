// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: QuestionnaireItemOperator
/// Canonical URL: http://hl7.org/fhir/questionnaire-enable-operator
/// Title: Questionnaire Item Operator
/// Status: active
///
/// The criteria by which a question is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "QuestionnaireItemOperator",
    system = "http://hl7.org/fhir/questionnaire-enable-operator",
    version = "4.0.1"
)]
pub enum QuestionnaireItemOperator {
    /// Display: Exists
    ///
    /// Definition: True if whether an answer exists is equal to the enableWhen answer (which must be a boolean).
    #[code(
        value = "exists",
        display = "Exists",
        definition = "True if whether an answer exists is equal to the enableWhen answer (which must be a boolean)."
    )]
    Exists,
    /// Display: Equals
    ///
    /// Definition: True if whether at least one answer has a value that is equal to the enableWhen answer.
    #[code(
        value = "=",
        display = "Equals",
        definition = "True if whether at least one answer has a value that is equal to the enableWhen answer."
    )]
    Eq,
    /// Display: Not Equals
    ///
    /// Definition: True if whether at least no answer has a value that is equal to the enableWhen answer.
    #[code(
        value = "!=",
        display = "Not Equals",
        definition = "True if whether at least no answer has a value that is equal to the enableWhen answer."
    )]
    Ne,
    /// Display: Greater Than
    ///
    /// Definition: True if whether at least no answer has a value that is greater than the enableWhen answer.
    #[code(
        value = ">",
        display = "Greater Than",
        definition = "True if whether at least no answer has a value that is greater than the enableWhen answer."
    )]
    Gt,
    /// Display: Less Than
    ///
    /// Definition: True if whether at least no answer has a value that is less than the enableWhen answer.
    #[code(
        value = "<",
        display = "Less Than",
        definition = "True if whether at least no answer has a value that is less than the enableWhen answer."
    )]
    Lt,
    /// Display: Greater or Equals
    ///
    /// Definition: True if whether at least no answer has a value that is greater or equal to the enableWhen answer.
    #[code(
        value = ">=",
        display = "Greater or Equals",
        definition = "True if whether at least no answer has a value that is greater or equal to the enableWhen answer."
    )]
    Ge,
    /// Display: Less or Equals
    ///
    /// Definition: True if whether at least no answer has a value that is less or equal to the enableWhen answer.
    #[code(
        value = "<=",
        display = "Less or Equals",
        definition = "True if whether at least no answer has a value that is less or equal to the enableWhen answer."
    )]
    Le,
}
/// Coded [`QuestionnaireItemOperator`] value: optional `id`, `extension` and member code.
pub type QuestionnaireItemOperatorCode = Coded<QuestionnaireItemOperator>;
