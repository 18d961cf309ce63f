use atrius_fhir_codes::{Coded, CodedVocabulary, FhirCode, vocabularies};
use serde_json::json;

/// A local vocabulary declared by hand instead of by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FhirCode)]
#[fhir_code(system = "http://example.org/fhir/CodeSystem/triage-level")]
enum TriageLevel {
    #[code(display = "Immediate", definition = "Life-threatening, treat now.")]
    Immediate,
    #[code(value = "very-urgent")]
    VeryUrgent,
    UrgentCare,
    #[code(value = "0", display = "Not triaged")]
    NotTriaged,
}

type TriageLevelCode = Coded<TriageLevel>;

#[test]
fn defaults_and_overrides() {
    assert_eq!(TriageLevel::NAME, "TriageLevel");
    assert_eq!(TriageLevel::SYSTEM, "http://example.org/fhir/CodeSystem/triage-level");
    assert_eq!(TriageLevel::VERSION, None);

    assert_eq!(TriageLevel::Immediate.code(), "immediate");
    assert_eq!(TriageLevel::Immediate.display(), "Immediate");
    assert_eq!(
        TriageLevel::Immediate.definition(),
        Some("Life-threatening, treat now.")
    );

    assert_eq!(TriageLevel::VeryUrgent.code(), "very-urgent");
    assert_eq!(TriageLevel::VeryUrgent.display(), "very-urgent");
    assert_eq!(TriageLevel::UrgentCare.code(), "urgent-care");
    assert_eq!(TriageLevel::NotTriaged.code(), "0");
    assert_eq!(TriageLevel::NotTriaged.definition(), None);
}

#[test]
fn members_are_listed_in_declaration_order() {
    assert_eq!(
        TriageLevel::MEMBERS,
        &[
            TriageLevel::Immediate,
            TriageLevel::VeryUrgent,
            TriageLevel::UrgentCare,
            TriageLevel::NotTriaged
        ]
    );
    for member in TriageLevel::MEMBERS.iter().copied() {
        assert_eq!(TriageLevel::from_code(member.code()), Some(member));
        assert_eq!(TriageLevelCode::of(member).as_enum().unwrap(), Some(member));
    }
}

#[test]
fn local_vocabularies_get_the_full_coded_surface() {
    let level = TriageLevelCode::parse("0").unwrap();
    assert_eq!(level.as_enum().unwrap(), Some(TriageLevel::NotTriaged));
    assert_eq!(serde_json::to_value(&level).unwrap(), json!("0"));
    assert!(TriageLevelCode::parse("urgent_care").is_err());
    assert_eq!(
        serde_json::from_value::<TriageLevel>(json!("urgent-care")).unwrap(),
        TriageLevel::UrgentCare
    );
}

#[test]
fn local_vocabularies_are_not_registered() {
    assert!(vocabularies().iter().all(|v| v.name() != TriageLevel::NAME));
}

/// Member names that shadow the associated types of `FromStr` and `TryFrom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FhirCode)]
#[fhir_code(name = "Outcome", system = "http://example.org/fhir/CodeSystem/outcome")]
enum Outcome {
    Ok,
    Err,
    Error,
    #[code(value = "none")]
    None,
    Some,
}

#[test]
fn members_may_share_names_with_associated_types() {
    assert_eq!("err".parse::<Outcome>().unwrap(), Outcome::Err);
    assert_eq!(Outcome::try_from("error").unwrap(), Outcome::Error);
    assert_eq!(Outcome::from_code("none"), Some(Outcome::None));
    assert_eq!(Outcome::Some.code(), "some");
    assert_eq!(Outcome::Ok.definition(), None);

    let coded = Coded::<Outcome>::parse("error").unwrap();
    assert_eq!(coded.as_enum().unwrap(), Some(Outcome::Error));
    assert_eq!(&coded, Coded::of(Outcome::Error));
    assert!("Error".parse::<Outcome>().is_err());
    assert_eq!(serde_json::to_value(Outcome::Err).unwrap(), json!("err"));
}
