//! # Atrius FHIR Codes
//!
//! Typed FHIR `code` values for vocabularies bound with `required` strength.
//!
//! Every vocabulary is a closed member enum deriving [`FhirCode`], plus a
//! coded value type `Coded<Enum>` that carries the FHIR element's `id` and
//! `extension` next to the code itself:
//!
//! ```rust
//! use atrius_fhir_codes::r4::{AdministrativeGender, AdministrativeGenderCode};
//! use atrius_fhir_codes::CodedVocabulary;
//!
//! let gender: AdministrativeGenderCode = "female".parse()?;
//! assert_eq!(gender.as_enum()?, Some(AdministrativeGender::Female));
//! assert_eq!(AdministrativeGender::Female.display(), "Female");
//! assert_eq!(serde_json::to_string(&gender).unwrap(), "\"female\"");
//! # Ok::<(), atrius_fhir_codes::CodeError>(())
//! ```
//!
//! Vocabularies are generated by `atrius-codes-gen` from a FHIR bundle of
//! CodeSystem resources. Each release lives behind its own feature (`R4`).

extern crate self as atrius_fhir_codes;

pub mod builder;
pub mod coded;
pub mod element;
pub mod error;
pub mod extension;
pub mod fhir_version;
pub mod registry;
pub mod validation;
pub mod vocabulary;

#[cfg(feature = "R4")]
pub mod r4;

pub use atrius_codes_macros::FhirCode;
pub use builder::CodedBuilder;
pub use coded::Coded;
pub use element::{Code, Element};
pub use error::CodeError;
pub use extension::{Extension, DATA_ABSENT_REASON_URL};
pub use fhir_version::FhirVersion;
pub use registry::{vocabularies, vocabulary_by_name, vocabulary_by_system, Concept, VocabularyInfo};
pub use vocabulary::CodedVocabulary;

#[doc(hidden)]
pub mod __private {
    pub use serde;
}
