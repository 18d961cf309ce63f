// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: IssueType
/// Canonical URL: http://hl7.org/fhir/issue-type
/// Title: Issue Type
/// Status: active
///
/// A code that describes the type of issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "IssueType",
    system = "http://hl7.org/fhir/issue-type",
    version = "4.0.1"
)]
pub enum IssueType {
    /// Display: Invalid Content
    ///
    /// Definition: Content invalid against the specification or a profile.
    #[code(
        value = "invalid",
        display = "Invalid Content",
        definition = "Content invalid against the specification or a profile."
    )]
    Invalid,
    /// Display: Structural Issue
    ///
    /// Definition: A structural issue in the content such as wrong namespace, unable to parse the content completely, invalid syntax, etc.
    #[code(
        value = "structure",
        display = "Structural Issue",
        definition = "A structural issue in the content such as wrong namespace, unable to parse the content completely, invalid syntax, etc."
    )]
    Structure,
    /// Display: Required element missing
    ///
    /// Definition: A required element is missing.
    #[code(
        value = "required",
        display = "Required element missing",
        definition = "A required element is missing."
    )]
    Required,
    /// Display: Element value invalid
    ///
    /// Definition: An element or header value is invalid.
    #[code(
        value = "value",
        display = "Element value invalid",
        definition = "An element or header value is invalid."
    )]
    Value,
    /// Display: Validation rule failed
    ///
    /// Definition: A content validation rule failed - e.g. a schematron rule.
    #[code(
        value = "invariant",
        display = "Validation rule failed",
        definition = "A content validation rule failed - e.g. a schematron rule."
    )]
    Invariant,
    /// Display: Security Problem
    ///
    /// Definition: An authentication/authorization/permissions issue of some kind.
    #[code(
        value = "security",
        display = "Security Problem",
        definition = "An authentication/authorization/permissions issue of some kind."
    )]
    Security,
    /// Display: Login Required
    ///
    /// Definition: The client needs to initiate an authentication process.
    #[code(
        value = "login",
        display = "Login Required",
        definition = "The client needs to initiate an authentication process."
    )]
    Login,
    /// Display: Unknown User
    ///
    /// Definition: The user or system was not able to be authenticated (either there is no process, or the proferred token is unacceptable).
    #[code(
        value = "unknown",
        display = "Unknown User",
        definition = "The user or system was not able to be authenticated (either there is no process, or the proferred token is unacceptable)."
    )]
    Unknown,
    /// Display: Session Expired
    ///
    /// Definition: User session expired; a login may be required.
    #[code(
        value = "expired",
        display = "Session Expired",
        definition = "User session expired; a login may be required."
    )]
    Expired,
    /// Display: Forbidden
    ///
    /// Definition: The user does not have the rights to perform this action.
    #[code(
        value = "forbidden",
        display = "Forbidden",
        definition = "The user does not have the rights to perform this action."
    )]
    Forbidden,
    /// Display: Information Suppressed
    ///
    /// Definition: Some information was not or might not have been returned due to business rules, consent or privacy rules, or access permission constraints.
    #[code(
        value = "suppressed",
        display = "Information Suppressed",
        definition = "Some information was not or might not have been returned due to business rules, consent or privacy rules, or access permission constraints."
    )]
    Suppressed,
    /// Display: Processing Failure
    ///
    /// Definition: Processing issues. These are expected to be final e.g. there is no point resubmitting the same content unchanged.
    #[code(
        value = "processing",
        display = "Processing Failure",
        definition = "Processing issues. These are expected to be final e.g. there is no point resubmitting the same content unchanged."
    )]
    Processing,
    /// Display: Content not supported
    ///
    /// Definition: The interaction, operation, resource or profile is not supported.
    #[code(
        value = "not-supported",
        display = "Content not supported",
        definition = "The interaction, operation, resource or profile is not supported."
    )]
    NotSupported,
    /// Display: Duplicate
    ///
    /// Definition: An attempt was made to create a duplicate record.
    #[code(
        value = "duplicate",
        display = "Duplicate",
        definition = "An attempt was made to create a duplicate record."
    )]
    Duplicate,
    /// Display: Multiple Matches
    ///
    /// Definition: Multiple matching records were found when the operation required only one match.
    #[code(
        value = "multiple-matches",
        display = "Multiple Matches",
        definition = "Multiple matching records were found when the operation required only one match."
    )]
    MultipleMatches,
    /// Display: Not Found
    ///
    /// Definition: The reference provided was not found.
    #[code(
        value = "not-found",
        display = "Not Found",
        definition = "The reference provided was not found."
    )]
    NotFound,
    /// Display: Deleted
    ///
    /// Definition: The reference pointed to content (usually a resource) that has been deleted.
    #[code(
        value = "deleted",
        display = "Deleted",
        definition = "The reference pointed to content (usually a resource) that has been deleted."
    )]
    Deleted,
    /// Display: Content Too Long
    ///
    /// Definition: Provided content is too long (typically, this is a denial of service protection type of error).
    #[code(
        value = "too-long",
        display = "Content Too Long",
        definition = "Provided content is too long (typically, this is a denial of service protection type of error)."
    )]
    TooLong,
    /// Display: Invalid Code
    ///
    /// Definition: The code or system could not be understood, or it was not valid in the context of a particular ValueSet.binding.
    #[code(
        value = "code-invalid",
        display = "Invalid Code",
        definition = "The code or system could not be understood, or it was not valid in the context of a particular ValueSet.binding."
    )]
    CodeInvalid,
    /// Display: Unacceptable Extension
    ///
    /// Definition: An extension was found that was not acceptable, could not be resolved, or a modifierExtension was not recognized.
    #[code(
        value = "extension",
        display = "Unacceptable Extension",
        definition = "An extension was found that was not acceptable, could not be resolved, or a modifierExtension was not recognized."
    )]
    Extension,
    /// Display: Operation Too Costly
    ///
    /// Definition: The operation was stopped to protect server resources.
    #[code(
        value = "too-costly",
        display = "Operation Too Costly",
        definition = "The operation was stopped to protect server resources."
    )]
    TooCostly,
    /// Display: Business Rule Violation
    ///
    /// Definition: The content/operation failed to pass some business rule and so could not proceed.
    #[code(
        value = "business-rule",
        display = "Business Rule Violation",
        definition = "The content/operation failed to pass some business rule and so could not proceed."
    )]
    BusinessRule,
    /// Display: Edit Version Conflict
    ///
    /// Definition: Content could not be accepted because of an edit conflict (i.e. version aware updates).
    #[code(
        value = "conflict",
        display = "Edit Version Conflict",
        definition = "Content could not be accepted because of an edit conflict (i.e. version aware updates)."
    )]
    Conflict,
    /// Display: Transient Issue
    ///
    /// Definition: Transient processing issues. The system receiving the message may be able to resubmit the same content once an underlying issue is resolved.
    #[code(
        value = "transient",
        display = "Transient Issue",
        definition = "Transient processing issues. The system receiving the message may be able to resubmit the same content once an underlying issue is resolved."
    )]
    Transient,
    /// Display: Lock Error
    ///
    /// Definition: A resource/record locking failure (usually in an underlying database).
    #[code(
        value = "lock-error",
        display = "Lock Error",
        definition = "A resource/record locking failure (usually in an underlying database)."
    )]
    LockError,
    /// Display: No Store Available
    ///
    /// Definition: The persistent store is unavailable; e.g. the database is down for maintenance or similar action, and the interaction or operation cannot be processed.
    #[code(
        value = "no-store",
        display = "No Store Available",
        definition = "The persistent store is unavailable; e.g. the database is down for maintenance or similar action, and the interaction or operation cannot be processed."
    )]
    NoStore,
    /// Display: Exception
    ///
    /// Definition: An unexpected internal error has occurred.
    #[code(
        value = "exception",
        display = "Exception",
        definition = "An unexpected internal error has occurred."
    )]
    Exception,
    /// Display: Timeout
    ///
    /// Definition: An internal timeout has occurred.
    #[code(
        value = "timeout",
        display = "Timeout",
        definition = "An internal timeout has occurred."
    )]
    Timeout,
    /// Display: Incomplete Results
    ///
    /// Definition: Not all data sources typically accessed could be reached or responded in time, so the returned information might not be complete.
    #[code(
        value = "incomplete",
        display = "Incomplete Results",
        definition = "Not all data sources typically accessed could be reached or responded in time, so the returned information might not be complete."
    )]
    Incomplete,
    /// Display: Throttled
    ///
    /// Definition: The system is not prepared to handle this request due to load management.
    #[code(
        value = "throttled",
        display = "Throttled",
        definition = "The system is not prepared to handle this request due to load management."
    )]
    Throttled,
    /// Display: Informational Note
    ///
    /// Definition: A message unrelated to the processing success of the completed operation (examples of the latter include things like reminders of password expiry, system maintenance times, etc.).
    #[code(
        value = "informational",
        display = "Informational Note",
        definition = "A message unrelated to the processing success of the completed operation (examples of the latter include things like reminders of password expiry, system maintenance times, etc.)."
    )]
    Informational,
}
/// Coded [`IssueType`] value: optional `id`, `extension` and member code.
pub type IssueTypeCode = Coded<IssueType>;
