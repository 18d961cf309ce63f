//! FHIR R4 (4.0.1) vocabularies.
//!
//! Every code system is regenerated by `atrius-codes-gen` from
//! `crates/AtriusCodesGen/resources/R4/codesystems.json`.

pub mod code_systems;

pub use code_systems::*;
