// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: QuestionnaireItemType
/// Canonical URL: http://hl7.org/fhir/item-type
/// Title: Questionnaire Item Type
/// Status: active
///
/// Distinguishes groups from questions and display text and indicates data type for questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "QuestionnaireItemType",
    system = "http://hl7.org/fhir/item-type",
    version = "4.0.1"
)]
pub enum QuestionnaireItemType {
    /// Display: Group
    ///
    /// Definition: An item with no direct answer but should have at least one child item.
    #[code(
        value = "group",
        display = "Group",
        definition = "An item with no direct answer but should have at least one child item."
    )]
    Group,
    /// Display: Display
    ///
    /// Definition: Text for display that will not capture an answer or have child items.
    #[code(
        value = "display",
        display = "Display",
        definition = "Text for display that will not capture an answer or have child items."
    )]
    Display,
    /// Display: Question
    ///
    /// Definition: An item that defines a specific answer to be captured, and which may have child items.
    #[code(
        value = "question",
        display = "Question",
        definition = "An item that defines a specific answer to be captured, and which may have child items."
    )]
    Question,
    /// Display: Boolean
    ///
    /// Definition: Question with a yes/no answer (valueBoolean).
    #[code(
        value = "boolean",
        display = "Boolean",
        definition = "Question with a yes/no answer (valueBoolean)."
    )]
    Boolean,
    /// Display: Decimal
    ///
    /// Definition: Question with is a real number answer (valueDecimal).
    #[code(
        value = "decimal",
        display = "Decimal",
        definition = "Question with is a real number answer (valueDecimal)."
    )]
    Decimal,
    /// Display: Integer
    ///
    /// Definition: Question with an integer answer (valueInteger).
    #[code(
        value = "integer",
        display = "Integer",
        definition = "Question with an integer answer (valueInteger)."
    )]
    Integer,
    /// Display: Date
    ///
    /// Definition: Question with a date answer (valueDate).
    #[code(
        value = "date",
        display = "Date",
        definition = "Question with a date answer (valueDate)."
    )]
    Date,
    /// Display: Date Time
    ///
    /// Definition: Question with a date and time answer (valueDateTime).
    #[code(
        value = "dateTime",
        display = "Date Time",
        definition = "Question with a date and time answer (valueDateTime)."
    )]
    DateTime,
    /// Display: Time
    ///
    /// Definition: Question with a time (hour:minute:second) answer independent of date. (valueTime).
    #[code(
        value = "time",
        display = "Time",
        definition = "Question with a time (hour:minute:second) answer independent of date. (valueTime)."
    )]
    Time,
    /// Display: String
    ///
    /// Definition: Question with a short (few words to short sentence) free-text entry answer (valueString).
    #[code(
        value = "string",
        display = "String",
        definition = "Question with a short (few words to short sentence) free-text entry answer (valueString)."
    )]
    String,
    /// Display: Text
    ///
    /// Definition: Question with a long (potentially multi-paragraph) free-text entry answer (valueString).
    #[code(
        value = "text",
        display = "Text",
        definition = "Question with a long (potentially multi-paragraph) free-text entry answer (valueString)."
    )]
    Text,
    /// Display: Url
    ///
    /// Definition: Question with a URL (website, FTP site, etc.) answer (valueUri).
    #[code(
        value = "url",
        display = "Url",
        definition = "Question with a URL (website, FTP site, etc.) answer (valueUri)."
    )]
    Url,
    /// Display: Choice
    ///
    /// Definition: Question with a Coding drawn from a list of possible answers (specified in either the answerOption property, or via the valueset referenced in the answerValueSet property) as an answer (valueCoding).
    #[code(
        value = "choice",
        display = "Choice",
        definition = "Question with a Coding drawn from a list of possible answers (specified in either the answerOption property, or via the valueset referenced in the answerValueSet property) as an answer (valueCoding)."
    )]
    Choice,
    /// Display: Open Choice
    ///
    /// Definition: Answer is a Coding drawn from a list of possible answers (as with the choice type) or a free-text entry in a string (valueCoding or valueString).
    #[code(
        value = "open-choice",
        display = "Open Choice",
        definition = "Answer is a Coding drawn from a list of possible answers (as with the choice type) or a free-text entry in a string (valueCoding or valueString)."
    )]
    OpenChoice,
    /// Display: Attachment
    ///
    /// Definition: Question with binary content such as an image, PDF, etc. as an answer (valueAttachment).
    #[code(
        value = "attachment",
        display = "Attachment",
        definition = "Question with binary content such as an image, PDF, etc. as an answer (valueAttachment)."
    )]
    Attachment,
    /// Display: Reference
    ///
    /// Definition: Question with a reference to another resource (practitioner, organization, etc.) as an answer (valueReference).
    #[code(
        value = "reference",
        display = "Reference",
        definition = "Question with a reference to another resource (practitioner, organization, etc.) as an answer (valueReference)."
    )]
    Reference,
    /// Display: Quantity
    ///
    /// Definition: Question with a combination of a numeric value and unit, potentially with a comparator (<, >, etc.) as an answer. (valueQuantity).
    #[code(
        value = "quantity",
        display = "Quantity",
        definition = "Question with a combination of a numeric value and unit, potentially with a comparator (<, >, etc.) as an answer. (valueQuantity)."
    )]
    Quantity,
}
/// Coded [`QuestionnaireItemType`] value: optional `id`, `extension` and member code.
pub type QuestionnaireItemTypeCode = Coded<QuestionnaireItemType>;
