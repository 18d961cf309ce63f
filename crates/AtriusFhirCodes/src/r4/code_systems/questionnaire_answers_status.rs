// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: QuestionnaireResponseStatus
/// Canonical URL: http://hl7.org/fhir/questionnaire-answers-status
/// Title: Questionnaire Response Status
/// Status: active
///
/// Lifecycle status of the questionnaire response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "QuestionnaireResponseStatus",
    system = "http://hl7.org/fhir/questionnaire-answers-status",
    version = "4.0.1"
)]
pub enum QuestionnaireResponseStatus {
    /// Display: In Progress
    ///
    /// Definition: This QuestionnaireResponse has been partially filled out with answers but changes or additions are still expected to be made to it.
    #[code(
        value = "in-progress",
        display = "In Progress",
        definition = "This QuestionnaireResponse has been partially filled out with answers but changes or additions are still expected to be made to it."
    )]
    InProgress,
    /// Display: Completed
    ///
    /// Definition: This QuestionnaireResponse has been filled out with answers and the current content is regarded as definitive.
    #[code(
        value = "completed",
        display = "Completed",
        definition = "This QuestionnaireResponse has been filled out with answers and the current content is regarded as definitive."
    )]
    Completed,
    /// Display: Amended
    ///
    /// Definition: This QuestionnaireResponse has been filled out with answers, then marked as complete, yet changes or additions have been made to it afterwards.
    #[code(
        value = "amended",
        display = "Amended",
        definition = "This QuestionnaireResponse has been filled out with answers, then marked as complete, yet changes or additions have been made to it afterwards."
    )]
    Amended,
    /// Display: Entered in Error
    ///
    /// Definition: This QuestionnaireResponse was entered in error and voided.
    #[code(
        value = "entered-in-error",
        display = "Entered in Error",
        definition = "This QuestionnaireResponse was entered in error and voided."
    )]
    EnteredInError,
    /// Display: Stopped
    ///
    /// Definition: This QuestionnaireResponse has been partially filled out with answers but has been abandoned.
    #[code(
        value = "stopped",
        display = "Stopped",
        definition = "This QuestionnaireResponse has been partially filled out with answers but has been abandoned."
    )]
    Stopped,
}
/// Coded [`QuestionnaireResponseStatus`] value: optional `id`, `extension` and member code.
pub type QuestionnaireResponseStatusCode = Coded<QuestionnaireResponseStatus>;
