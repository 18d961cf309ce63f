//! # Atrius Codes Macros
//!
//! Procedural macros behind the typed FHIR vocabularies of `atrius-fhir-codes`.
//!
//! ## Overview
//!
//! A FHIR code system bound with `required` strength is declared as a plain
//! Rust enum with one unit variant per concept. `#[derive(FhirCode)]` turns
//! that declaration into the full vocabulary implementation:
//!
//! - `CodedVocabulary` (name, system URI, version, member list, exact code
//!   lookup, display and definition text, shared constants)
//! - `Display`, `FromStr` and `TryFrom<&str>` on the wire code
//! - `serde::Serialize` / `serde::Deserialize` as the bare code string
//!
//! ## Usage
//!
//! ```ignore
//! use atrius_fhir_codes::FhirCode;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FhirCode)]
//! #[fhir_code(
//!     name = "QuantityComparator",
//!     system = "http://hl7.org/fhir/quantity-comparator",
//!     version = "4.0.1"
//! )]
//! pub enum QuantityComparator {
//!     #[code(value = "<", display = "Less than")]
//!     Lt,
//!     #[code(value = "<=", display = "Less or Equal to")]
//!     Le,
//! }
//! ```

extern crate proc_macro;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};
use crate::fhir_code_impl::generate_fhir_code_impl;

pub(crate) mod attrs;
pub(crate) mod fhir_code_impl;

/// Derives `atrius_fhir_codes::CodedVocabulary` for a closed vocabulary enum.
///
/// # Supported Attributes
///
/// On the enum:
///
/// - `#[fhir_code(system = "uri")]` - canonical code system URI (required)
/// - `#[fhir_code(name = "Name")]` - vocabulary name, defaults to the enum name
/// - `#[fhir_code(version = "4.0.1")]` - code system version
///
/// On each variant:
///
/// - `#[code(value = "in-progress")]` - the wire code, defaults to the
///   kebab-cased variant name
/// - `#[code(display = "In Progress")]` - display text, defaults to the code
/// - `#[code(definition = "...")]` - concept definition
///
/// # Errors
///
/// Non-enum inputs, generic enums, data-carrying variants, duplicate codes
/// and malformed attributes are reported as compile errors on the offending
/// span.
#[proc_macro_derive(FhirCode, attributes(fhir_code, code))]
pub fn fhir_code_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    generate_fhir_code_impl(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
