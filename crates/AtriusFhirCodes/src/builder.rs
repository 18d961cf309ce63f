use std::fmt;
use std::marker::PhantomData;

use crate::coded::Coded;
use crate::element::Element;
use crate::error::CodeError;
use crate::extension::Extension;
use crate::validation;
use crate::vocabulary::CodedVocabulary;

/// Step-by-step construction of a [`Coded`] value.
///
/// Passing `None` to [`id`](Self::id), [`value`](Self::value) or
/// [`member`](Self::member) leaves the field untouched. Codes given as
/// strings are checked against the vocabulary immediately; the rest of the
/// validation runs in [`build`](Self::build) unless it was switched off with
/// [`validating(false)`](Self::validating).
///
/// ```rust
/// use atrius_fhir_codes::r4::{ObservationStatus, ObservationStatusCode};
/// use atrius_fhir_codes::Extension;
///
/// let status = ObservationStatusCode::builder()
///     .id("status-1")
///     .value("final")?
///     .extension(Extension::new("http://example.org/fhir/source").with("valueString", "lab"))
///     .build()?;
///
/// assert_eq!(status.as_enum()?, Some(ObservationStatus::Final));
/// assert_eq!(status.id(), Some("status-1"));
/// # Ok::<(), atrius_fhir_codes::CodeError>(())
/// ```
#[must_use]
pub struct CodedBuilder<V> {
    id: Option<String>,
    extension: Option<Vec<Extension>>,
    value: Option<&'static str>,
    validating: bool,
    vocabulary: PhantomData<fn() -> V>,
}

impl<V: CodedVocabulary> fmt::Debug for CodedBuilder<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodedBuilder")
            .field("vocabulary", &V::NAME)
            .field("id", &self.id)
            .field("extension", &self.extension)
            .field("value", &self.value)
            .field("validating", &self.validating)
            .finish()
    }
}

impl<V: CodedVocabulary> Default for CodedBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: CodedVocabulary> CodedBuilder<V> {
    pub fn new() -> Self {
        Self {
            id: None,
            extension: None,
            value: None,
            validating: true,
            vocabulary: PhantomData,
        }
    }

    pub fn id<'a>(mut self, id: impl Into<Option<&'a str>>) -> Self {
        if let Some(id) = id.into() {
            self.id = Some(id.to_string());
        }
        self
    }

    /// Appends one extension.
    pub fn extension(mut self, extension: Extension) -> Self {
        self.extension.get_or_insert_with(Vec::new).push(extension);
        self
    }

    /// Appends extensions in order. An empty iterator leaves an absent list absent.
    pub fn extensions(mut self, extensions: impl IntoIterator<Item = Extension>) -> Self {
        let mut extensions = extensions.into_iter().peekable();
        if extensions.peek().is_some() {
            self.extension.get_or_insert_with(Vec::new).extend(extensions);
        }
        self
    }

    /// Sets the code from its wire form.
    ///
    /// Fails with [`CodeError::InvalidCode`] when the code is not a member.
    pub fn value<'a>(mut self, code: impl Into<Option<&'a str>>) -> Result<Self, CodeError> {
        if let Some(code) = code.into() {
            self.value = Some(V::try_from_code(code)?.code());
        }
        Ok(self)
    }

    /// Sets the code from a typed member.
    pub fn member(mut self, member: impl Into<Option<V>>) -> Self {
        if let Some(member) = member.into() {
            self.value = Some(member.code());
        }
        self
    }

    /// Whether [`build`](Self::build) runs the validation pass. Defaults to `true`.
    pub fn validating(mut self, validating: bool) -> Self {
        self.validating = validating;
        self
    }

    /// Replaces every field with the contents of `coded`.
    pub fn copy_from(mut self, coded: &Coded<V>) -> Self {
        self.id = coded.id().map(str::to_string);
        self.extension = coded.extension().map(<[Extension]>::to_vec);
        self.value = coded.value();
        self
    }

    pub fn build(self) -> Result<Coded<V>, CodeError> {
        if !self.validating {
            return Ok(self.build_permissive());
        }
        let element = self.into_element();
        validation::validate::<V>(&element)?;
        Ok(Coded::from_element(element))
    }

    /// Builds without the validation pass.
    pub fn build_permissive(self) -> Coded<V> {
        tracing::trace!(vocabulary = V::NAME, "building coded value without validation");
        Coded::from_element(self.into_element())
    }

    fn into_element(self) -> Element<&'static str, Extension> {
        Element {
            id: self.id,
            extension: self.extension,
            value: self.value,
        }
    }
}
