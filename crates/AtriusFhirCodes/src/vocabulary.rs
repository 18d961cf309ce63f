use std::fmt;
use std::hash::Hash;

use crate::coded::Coded;
use crate::error::CodeError;

/// A closed FHIR vocabulary: the member enum behind a [`Coded`] value.
///
/// Implementations are produced by `#[derive(FhirCode)]`; the code
/// generator emits one enum per code system and never implements this trait
/// by hand.
///
/// ```rust
/// use atrius_fhir_codes::r4::EncounterStatus;
/// use atrius_fhir_codes::CodedVocabulary;
///
/// assert_eq!(EncounterStatus::InProgress.code(), "in-progress");
/// assert_eq!(EncounterStatus::SYSTEM, "http://hl7.org/fhir/encounter-status");
/// assert_eq!(EncounterStatus::from_code("onleave"), Some(EncounterStatus::Onleave));
/// assert_eq!(EncounterStatus::from_code("ONLEAVE"), None);
/// ```
pub trait CodedVocabulary:
    Copy + Eq + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// Name of the vocabulary, e.g. `"EncounterStatus"`.
    const NAME: &'static str;
    /// Canonical code system URI.
    const SYSTEM: &'static str;
    /// Code system version, when the source declared one.
    const VERSION: Option<&'static str>;
    /// Every member in declaration order.
    const MEMBERS: &'static [Self];

    /// The exact wire code.
    fn code(self) -> &'static str;

    /// Human readable display text.
    fn display(self) -> &'static str;

    fn definition(self) -> Option<&'static str>;

    /// Exact, case-sensitive lookup of a wire code.
    fn from_code(code: &str) -> Option<Self>;

    /// The shared immutable coded value for this member.
    fn constant(self) -> &'static Coded<Self>;

    /// Like [`from_code`](Self::from_code) but reports the failing code.
    fn try_from_code(code: &str) -> Result<Self, CodeError> {
        Self::from_code(code).ok_or_else(|| {
            tracing::debug!(vocabulary = Self::NAME, code, "rejected unknown code");
            CodeError::invalid_code(code, Self::NAME)
        })
    }
}
