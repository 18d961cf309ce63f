use std::collections::HashSet;
use std::hash::{BuildHasher, RandomState};
use std::thread;

use atrius_fhir_codes::r4::{
    EncounterStatus, EncounterStatusCode, IssueSeverity, IssueSeverityCode, ObservationStatus,
    ObservationStatusCode, QuantityComparator, QuantityComparatorCode,
};
use atrius_fhir_codes::{Code, CodeError, CodedVocabulary, Extension, vocabularies};

const ENCOUNTER_CODES: [&str; 9] = [
    "planned",
    "arrived",
    "triaged",
    "in-progress",
    "onleave",
    "finished",
    "cancelled",
    "entered-in-error",
    "unknown",
];

#[test]
fn every_member_round_trips_through_parse() {
    for member in EncounterStatus::MEMBERS.iter().copied() {
        let parsed = EncounterStatusCode::parse(member.code()).unwrap();
        assert_eq!(parsed.as_enum().unwrap(), Some(member));
        assert_eq!(parsed.value(), Some(member.code()));
    }

    let codes: Vec<_> = EncounterStatus::MEMBERS.iter().map(|m| m.code()).collect();
    assert_eq!(codes, ENCOUNTER_CODES);
}

#[test]
fn every_registered_vocabulary_round_trips() {
    assert!(!vocabularies().is_empty());
    for vocabulary in vocabularies() {
        let concepts = vocabulary.concepts();
        assert_eq!(concepts.len(), vocabulary.len(), "{}", vocabulary.name());
        for concept in concepts {
            let found = vocabulary.lookup(concept.code).unwrap();
            assert_eq!(found, concept, "{} / {}", vocabulary.name(), concept.code);

            // typed path: Coded::parse, as_enum and the shared constant
            let parsed = vocabulary.parse(concept.code);
            assert_eq!(parsed, Ok(concept), "{} / {}", vocabulary.name(), concept.code);
        }
        assert!(vocabulary.parse("bogus-status").is_err(), "{}", vocabulary.name());
    }
}

#[test]
fn members_named_error_parse_like_any_other() {
    let error = IssueSeverityCode::parse("error").unwrap();
    assert_eq!(error.as_enum().unwrap(), Some(IssueSeverity::Error));
    assert_eq!(&error, IssueSeverityCode::of(IssueSeverity::Error));
    assert_eq!("fatal".parse::<IssueSeverity>().unwrap(), IssueSeverity::Fatal);
    assert_eq!(IssueSeverity::try_from("error").unwrap(), IssueSeverity::Error);
    assert!(IssueSeverity::try_from("Error").is_err());
}

#[test]
fn unknown_codes_are_rejected_with_the_offending_string() {
    let err = EncounterStatusCode::parse("bogus-status").unwrap_err();
    assert_eq!(
        err,
        CodeError::InvalidCode {
            code: "bogus-status".to_string(),
            vocabulary: "EncounterStatus",
        }
    );
    assert_eq!(err.to_string(), "invalid code 'bogus-status' for EncounterStatus");
}

#[test]
fn matching_is_exact_and_case_sensitive() {
    for input in ["Planned", "PLANNED", " planned", "planned ", "in_progress", ""] {
        assert!(
            EncounterStatusCode::parse(input).is_err(),
            "{input:?} should not parse"
        );
    }
}

#[test]
fn parse_none_yields_an_empty_value() {
    let empty = EncounterStatusCode::parse(None).unwrap();
    assert_eq!(empty.value(), None);
    assert_eq!(empty.as_enum().unwrap(), None);
    assert!(empty.id().is_none());
    assert!(empty.extension().is_none());
    assert_eq!(empty.to_string(), "");
}

#[test]
fn independently_built_values_are_equal() {
    let a = ObservationStatusCode::builder().value("final").unwrap().build().unwrap();
    let b = ObservationStatusCode::builder().value("final").unwrap().build().unwrap();
    assert_eq!(a, b);
    assert_eq!(a.hash_code(), b.hash_code());
}

#[test]
fn changing_any_field_breaks_equality() {
    let base = ObservationStatusCode::builder().value("final").unwrap().build().unwrap();

    let with_id = base.to_builder().id("x").build().unwrap();
    let with_extension = base
        .to_builder()
        .extension(Extension::new("http://example.org/fhir/flag").with("valueBoolean", true))
        .build()
        .unwrap();
    let other_value = base.to_builder().member(ObservationStatus::Amended).build().unwrap();

    assert_ne!(base, with_id);
    assert_ne!(base, with_extension);
    assert_ne!(base, other_value);
}

#[test]
fn constants_equal_parsed_values() {
    let finished = EncounterStatusCode::of(EncounterStatus::Finished);
    assert_eq!(finished, &EncounterStatusCode::parse("finished").unwrap());
    assert_eq!(finished, &EncounterStatusCode::from(EncounterStatus::Finished));
    assert_eq!(finished.hash_code(), EncounterStatusCode::parse("finished").unwrap().hash_code());

    // The constant is shared; a parsed value is a separate instance.
    assert!(std::ptr::eq(finished, EncounterStatus::Finished.constant()));
}

#[test]
fn of_is_defined_for_every_member() {
    for member in EncounterStatus::MEMBERS.iter().copied() {
        let constant = EncounterStatusCode::of(member);
        assert_eq!(constant.value(), Some(member.code()));
        assert_eq!(constant.as_enum().unwrap(), Some(member));
        assert!(constant.id().is_none() && constant.extension().is_none());
    }
    for member in QuantityComparator::MEMBERS.iter().copied() {
        assert_eq!(QuantityComparatorCode::of(member).as_enum().unwrap(), Some(member));
    }
}

#[test]
fn hashing_is_idempotent_across_threads() {
    let shared = EncounterStatusCode::of(EncounterStatus::InProgress);
    let built = EncounterStatusCode::builder()
        .id("enc-1")
        .member(EncounterStatus::InProgress)
        .build()
        .unwrap();

    let hashes: Vec<(u64, u64)> = thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| s.spawn(|| (shared.hash_code(), built.hash_code())))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let first = hashes[0];
    assert!(hashes.iter().all(|h| *h == first));
    assert_eq!(shared.hash_code(), first.0);
    assert_eq!(built.hash_code(), first.1);

    // std::hash::Hash agrees for equal values
    let state = RandomState::new();
    let parsed = EncounterStatusCode::parse("in-progress").unwrap();
    assert_eq!(state.hash_one(shared), state.hash_one(&parsed));
}

#[test]
fn coded_values_work_as_set_keys() {
    let set: HashSet<EncounterStatusCode> = ["planned", "finished", "planned"]
        .into_iter()
        .map(|c| c.parse().unwrap())
        .collect();
    assert_eq!(set.len(), 2);
    assert!(set.contains(EncounterStatusCode::of(EncounterStatus::Planned)));
}

#[test]
fn string_conversions() {
    let status: EncounterStatusCode = "onleave".parse().unwrap();
    assert_eq!(status.to_string(), "onleave");
    assert_eq!(EncounterStatus::Onleave.to_string(), "onleave");
    assert_eq!("onleave".parse::<EncounterStatus>().unwrap(), EncounterStatus::Onleave);
    assert!(EncounterStatusCode::try_from("on-leave").is_err());
    assert!(EncounterStatus::try_from("on-leave").is_err());
    assert_eq!(status.system(), "http://hl7.org/fhir/encounter-status");
}

#[test]
fn symbolic_codes() {
    let le = QuantityComparatorCode::parse("<=").unwrap();
    assert_eq!(le.as_enum().unwrap(), Some(QuantityComparator::Le));
    assert_eq!(QuantityComparator::Gt.code(), ">");
}

#[test]
fn debug_names_the_vocabulary() {
    let rendered = format!("{:?}", EncounterStatusCode::of(EncounterStatus::Planned));
    assert!(rendered.starts_with("EncounterStatus {"), "{rendered}");
    assert!(rendered.contains("\"planned\""));
}

#[test]
fn plain_code_conversions_keep_id_and_extension() {
    let plain = Code {
        id: Some("s1".to_string()),
        extension: Some(vec![Extension::new("http://example.org/fhir/note").with("valueString", "n")]),
        value: Some("amended".to_string()),
    };

    let coded = ObservationStatusCode::try_from(plain.clone()).unwrap();
    assert_eq!(coded.id(), Some("s1"));
    assert_eq!(coded.extension().map(<[Extension]>::len), Some(1));
    assert_eq!(coded.as_enum().unwrap(), Some(ObservationStatus::Amended));

    let back: Code = coded.into();
    assert_eq!(back, plain);

    let bad = Code::from("Amended");
    assert!(matches!(
        ObservationStatusCode::try_from(bad),
        Err(CodeError::InvalidCode { vocabulary: "ObservationStatus", .. })
    ));
}

#[test]
fn data_absent_reason_detection() {
    let absent = ObservationStatusCode::builder()
        .extension(Extension::data_absent_reason("unknown"))
        .build()
        .unwrap();
    assert!(absent.has_only_data_absent_reason_extension());
    assert_eq!(absent.as_enum().unwrap(), None);

    let with_value = absent.to_builder().value("final").unwrap().build().unwrap();
    assert!(!with_value.has_only_data_absent_reason_extension());

    let other_extension = ObservationStatusCode::builder()
        .extension(Extension::new("http://example.org/fhir/other"))
        .build()
        .unwrap();
    assert!(!other_extension.has_only_data_absent_reason_extension());
}

#[test]
#[allow(deprecated)]
fn legacy_value_set_alias_is_the_same_vocabulary() {
    use atrius_fhir_codes::r4::EncounterStatusValueSet;

    let legacy: EncounterStatusValueSet = EncounterStatus::Triaged;
    assert_eq!(legacy.code(), "triaged");
    assert_eq!(
        EncounterStatusValueSet::MEMBERS.len(),
        EncounterStatus::MEMBERS.len()
    );
}
