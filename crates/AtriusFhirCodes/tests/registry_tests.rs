use std::collections::HashSet;

use atrius_fhir_codes::r4::{EncounterStatus, VOCABULARIES};
use atrius_fhir_codes::{
    CodeError, CodedVocabulary, VocabularyInfo, vocabularies, vocabulary_by_name,
    vocabulary_by_system,
};

#[test]
fn registry_lists_every_generated_vocabulary() {
    assert_eq!(vocabularies().len(), VOCABULARIES.len());

    let names: HashSet<_> = vocabularies().iter().map(VocabularyInfo::name).collect();
    assert_eq!(names.len(), vocabularies().len(), "vocabulary names are unique");
    for name in ["EncounterStatus", "AdministrativeGender", "QuantityComparator", "VisionBase"] {
        assert!(names.contains(name), "missing {name}");
    }
}

#[test]
fn lookup_by_name() {
    let info = vocabulary_by_name("EncounterStatus").unwrap();
    assert_eq!(info.system(), EncounterStatus::SYSTEM);
    assert_eq!(info.version(), Some("4.0.1"));
    assert_eq!(info.len(), EncounterStatus::MEMBERS.len());
    assert!(!info.is_empty());

    let concept = info.lookup("in-progress").unwrap();
    assert_eq!(concept.display, "In Progress");
    assert_eq!(concept.display, EncounterStatus::InProgress.display());
    assert_eq!(concept.definition, EncounterStatus::InProgress.definition());

    assert!(vocabulary_by_name("encounterstatus").is_none());
}

#[test]
fn validate_code_reports_the_vocabulary() {
    let info = vocabulary_by_name("AdministrativeGender").unwrap();
    assert!(info.contains("unknown"));
    assert!(!info.contains("Unknown"));
    assert_eq!(
        info.validate_code("M"),
        Err(CodeError::InvalidCode {
            code: "M".to_string(),
            vocabulary: "AdministrativeGender",
        })
    );
}

#[test]
fn concepts_follow_declaration_order() {
    let codes: Vec<_> = vocabulary_by_name("DaysOfWeek")
        .unwrap()
        .concepts()
        .into_iter()
        .map(|c| c.code)
        .collect();
    assert_eq!(codes, ["mon", "tue", "wed", "thu", "fri", "sat", "sun"]);
}

#[test]
fn lookup_by_system_prefers_the_full_vocabulary() {
    let info = vocabulary_by_system("http://hl7.org/fhir/encounter-status").unwrap();
    assert_eq!(info.name(), "EncounterStatus");

    // CarePlanStatus draws on the request-status code system
    let info = vocabulary_by_system("http://hl7.org/fhir/request-status").unwrap();
    assert_eq!(info.name(), "RequestStatus");

    assert!(vocabulary_by_system("http://example.org/unknown").is_none());
}

#[test]
fn debug_output_is_compact() {
    let info = vocabulary_by_name("QuantityComparator").unwrap();
    let rendered = format!("{info:?}");
    assert!(rendered.contains("QuantityComparator"));
    assert!(rendered.contains("len: 4"));
}
