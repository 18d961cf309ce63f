//! The coded value type shared by every generated vocabulary.

use std::fmt;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::marker::PhantomData;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::builder::CodedBuilder;
use crate::element::{Code, Element};
use crate::error::CodeError;
use crate::extension::Extension;
use crate::validation;
use crate::vocabulary::CodedVocabulary;

/// A FHIR `code` element restricted to the members of vocabulary `V`.
///
/// Holds the optional `id`, the optional extension list and the optional
/// wire code. Values are immutable; use [`Coded::to_builder`] to derive a
/// modified copy.
///
/// Equality and hashing cover `id`, `extension` and `value`. The hash is
/// computed on first use and cached, so hashing the shared constants from
/// many threads is cheap after the first call.
///
/// ```rust
/// use atrius_fhir_codes::r4::{EncounterStatus, EncounterStatusCode};
///
/// let parsed = EncounterStatusCode::parse("planned").unwrap();
/// assert_eq!(&parsed, EncounterStatusCode::of(EncounterStatus::Planned));
/// assert_eq!(parsed.as_enum().unwrap(), Some(EncounterStatus::Planned));
///
/// assert!(EncounterStatusCode::parse("bogus-status").is_err());
/// assert!(EncounterStatusCode::parse(None).unwrap().value().is_none());
/// ```
pub struct Coded<V> {
    element: Element<&'static str, Extension>,
    hash: OnceLock<u64>,
    vocabulary: PhantomData<fn() -> V>,
}

impl<V> Coded<V> {
    /// Builds a shared constant. Only the `FhirCode` derive calls this, with
    /// a code it has already matched to a member.
    #[doc(hidden)]
    pub const fn __constant(code: &'static str) -> Self {
        Self {
            element: Element {
                id: None,
                extension: None,
                value: Some(code),
            },
            hash: OnceLock::new(),
            vocabulary: PhantomData,
        }
    }

    pub(crate) fn from_element(element: Element<&'static str, Extension>) -> Self {
        Self {
            element,
            hash: OnceLock::new(),
            vocabulary: PhantomData,
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.element.id.as_deref()
    }

    pub fn extension(&self) -> Option<&[Extension]> {
        self.element.extension.as_deref()
    }

    /// The literal wire code, if one was given.
    pub fn value(&self) -> Option<&'static str> {
        self.element.value
    }

    pub fn element(&self) -> &Element<&'static str, Extension> {
        &self.element
    }

    /// Drops the vocabulary and returns a plain FHIR `code`.
    pub fn into_element(self) -> Code {
        Element {
            id: self.element.id,
            extension: self.element.extension,
            value: self.element.value.map(str::to_string),
        }
    }

    /// Cached structural hash over `id`, `extension` and `value`.
    pub fn hash_code(&self) -> u64 {
        *self.hash.get_or_init(|| {
            let mut hasher = DefaultHasher::new();
            self.element.hash(&mut hasher);
            hasher.finish()
        })
    }

    /// `true` when no value is present and a data-absent-reason extension
    /// explains why.
    pub fn has_only_data_absent_reason_extension(&self) -> bool {
        validation::has_only_data_absent_reason_extension(&self.element)
    }
}

impl<V: CodedVocabulary> Coded<V> {
    /// The shared constant for `member`.
    pub fn of(member: V) -> &'static Self {
        member.constant()
    }

    /// Parses a wire code.
    ///
    /// `None` yields a value with no code rather than an error. Any other
    /// input must match a member exactly.
    pub fn parse<'a>(code: impl Into<Option<&'a str>>) -> Result<Self, CodeError> {
        match code.into() {
            Some(code) => V::try_from_code(code).map(|member| Self::of(member).clone()),
            None => Ok(Self::from_element(Element::default())),
        }
    }

    pub fn builder() -> CodedBuilder<V> {
        CodedBuilder::new()
    }

    /// A builder pre-populated with this value's `id`, `extension` and `value`.
    pub fn to_builder(&self) -> CodedBuilder<V> {
        CodedBuilder::new().copy_from(self)
    }

    /// The member matching the stored code, or `None` when no code is set.
    pub fn as_enum(&self) -> Result<Option<V>, CodeError> {
        self.element.value.map(V::try_from_code).transpose()
    }

    pub fn system(&self) -> &'static str {
        V::SYSTEM
    }
}

impl<V> Clone for Coded<V> {
    fn clone(&self) -> Self {
        Self {
            element: self.element.clone(),
            hash: self.hash.clone(),
            vocabulary: PhantomData,
        }
    }
}

impl<V> PartialEq for Coded<V> {
    fn eq(&self, other: &Self) -> bool {
        self.element == other.element
    }
}

impl<V> Eq for Coded<V> {}

impl<V> Hash for Coded<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

impl<V: CodedVocabulary> fmt::Debug for Coded<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(V::NAME)
            .field("id", &self.element.id)
            .field("extension", &self.element.extension)
            .field("value", &self.element.value)
            .finish()
    }
}

impl<V> fmt::Display for Coded<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.element.value.unwrap_or_default())
    }
}

impl<V: CodedVocabulary> From<V> for Coded<V> {
    fn from(member: V) -> Self {
        Self::of(member).clone()
    }
}

impl<V: CodedVocabulary> FromStr for Coded<V> {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<V: CodedVocabulary> TryFrom<&str> for Coded<V> {
    type Error = CodeError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

/// Narrows a plain `code` to vocabulary `V`, keeping `id` and `extension`.
impl<V: CodedVocabulary> TryFrom<Code> for Coded<V> {
    type Error = CodeError;

    fn try_from(code: Code) -> Result<Self, Self::Error> {
        let value = code
            .value
            .as_deref()
            .map(V::try_from_code)
            .transpose()?
            .map(V::code);
        Ok(Self::from_element(Element {
            id: code.id,
            extension: code.extension,
            value,
        }))
    }
}

impl<V> From<Coded<V>> for Code {
    fn from(coded: Coded<V>) -> Self {
        coded.into_element()
    }
}

impl<V> Serialize for Coded<V> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.element.serialize(serializer)
    }
}

// Membership is enforced on the way in; ele-1 is not, so `null` and
// extension-only forms read back as they were written.
impl<'de, V: CodedVocabulary> Deserialize<'de> for Coded<V> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = Code::deserialize(deserializer)?;
        Self::try_from(code).map_err(de::Error::custom)
    }
}
