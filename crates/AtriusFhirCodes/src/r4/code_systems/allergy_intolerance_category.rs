// @generated by AtriusCodesGen
// DO NOT EDIT MANUALLY

use crate::{Coded, FhirCode};
/// FHIR CodeSystem: AllergyIntoleranceCategory
/// Canonical URL: http://hl7.org/fhir/allergy-intolerance-category
/// Title: Allergy Intolerance Category
/// Status: active
///
/// Category of an identified substance associated with allergies or intolerances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FhirCode)]
#[fhir_code(
    name = "AllergyIntoleranceCategory",
    system = "http://hl7.org/fhir/allergy-intolerance-category",
    version = "4.0.1"
)]
pub enum AllergyIntoleranceCategory {
    /// Display: Food
    ///
    /// Definition: Any substance consumed to provide nutritional support for the body.
    #[code(
        value = "food",
        display = "Food",
        definition = "Any substance consumed to provide nutritional support for the body."
    )]
    Food,
    /// Display: Medication
    ///
    /// Definition: Substances administered to achieve a physiological effect.
    #[code(
        value = "medication",
        display = "Medication",
        definition = "Substances administered to achieve a physiological effect."
    )]
    Medication,
    /// Display: Environment
    ///
    /// Definition: Any substances that are encountered in the environment, including any substance not already classified as food, medication, or biologic.
    #[code(
        value = "environment",
        display = "Environment",
        definition = "Any substances that are encountered in the environment, including any substance not already classified as food, medication, or biologic."
    )]
    Environment,
    /// Display: Biologic
    ///
    /// Definition: A preparation that is synthesized from living organisms or their products, especially a human or animal protein, such as a hormone or antitoxin, that is used as a diagnostic, preventive, or therapeutic agent.
    #[code(
        value = "biologic",
        display = "Biologic",
        definition = "A preparation that is synthesized from living organisms or their products, especially a human or animal protein, such as a hormone or antitoxin, that is used as a diagnostic, preventive, or therapeutic agent."
    )]
    Biologic,
}
/// Coded [`AllergyIntoleranceCategory`] value: optional `id`, `extension` and member code.
pub type AllergyIntoleranceCategoryCode = Coded<AllergyIntoleranceCategory>;
