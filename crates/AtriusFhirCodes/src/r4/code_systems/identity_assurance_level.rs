// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: IdentityAssuranceLevel
/// Canonical URL: http://hl7.org/fhir/identity-assuranceLevel
/// Title: Identity Assurance Level
/// Status: active
///
/// The level of confidence that this link represents the same actual person, based on NIST Authentication Levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "IdentityAssuranceLevel",
    system = "http://hl7.org/fhir/identity-assuranceLevel",
    version = "4.0.1"
)]
pub enum IdentityAssuranceLevel {
    /// Display: Level 1
    ///
    /// Definition: Little or no confidence in the asserted identity's accuracy.
    #[code(
        value = "level1",
        display = "Level 1",
        definition = "Little or no confidence in the asserted identity's accuracy."
    )]
    Level1,
    /// Display: Level 2
    ///
    /// Definition: Some confidence in the asserted identity's accuracy.
    #[code(
        value = "level2",
        display = "Level 2",
        definition = "Some confidence in the asserted identity's accuracy."
    )]
    Level2,
    /// Display: Level 3
    ///
    /// Definition: High confidence in the asserted identity's accuracy.
    #[code(
        value = "level3",
        display = "Level 3",
        definition = "High confidence in the asserted identity's accuracy."
    )]
    Level3,
    /// Display: Level 4
    ///
    /// Definition: Very high confidence in the asserted identity's accuracy.
    #[code(
        value = "level4",
        display = "Level 4",
        definition = "Very high confidence in the asserted identity's accuracy."
    )]
    Level4,
}
/// Coded [`IdentityAssuranceLevel`] value: optional `id`, `extension` and member code.
pub type IdentityAssuranceLevelCode = Coded<IdentityAssuranceLevel>;
