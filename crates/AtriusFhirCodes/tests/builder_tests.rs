use atrius_fhir_codes::r4::{DaysOfWeek, DaysOfWeekCode, ObservationStatus, ObservationStatusCode};
use atrius_fhir_codes::{CodeError, CodedBuilder, Extension};

fn note(text: &str) -> Extension {
    Extension::new("http://example.org/fhir/note").with("valueString", text)
}

#[test]
fn none_value_keeps_the_previous_value() {
    let status = ObservationStatusCode::builder()
        .value("final")
        .unwrap()
        .value(None)
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(status.as_enum().unwrap(), Some(ObservationStatus::Final));

    let status = ObservationStatusCode::builder()
        .member(ObservationStatus::Preliminary)
        .member(None)
        .build()
        .unwrap();
    assert_eq!(status.value(), Some("preliminary"));
}

#[test]
fn none_id_keeps_the_previous_id() {
    let status = ObservationStatusCode::builder()
        .id("obs-status")
        .id(None)
        .member(ObservationStatus::Final)
        .build()
        .unwrap();
    assert_eq!(status.id(), Some("obs-status"));
}

#[test]
fn value_rejects_unknown_codes_immediately() {
    let err = ObservationStatusCode::builder().value("done").unwrap_err();
    assert_eq!(
        err,
        CodeError::InvalidCode {
            code: "done".to_string(),
            vocabulary: "ObservationStatus",
        }
    );
}

#[test]
fn extensions_append_in_order() {
    let status = ObservationStatusCode::builder()
        .extension(note("first"))
        .extensions([note("second"), note("third")])
        .member(ObservationStatus::Final)
        .build()
        .unwrap();

    let texts: Vec<_> = status
        .extension()
        .unwrap()
        .iter()
        .map(|e| e.content["valueString"].as_str().unwrap())
        .collect();
    assert_eq!(texts, ["first", "second", "third"]);
}

#[test]
fn empty_extension_list_stays_absent() {
    let status = ObservationStatusCode::builder()
        .extensions(Vec::new())
        .member(ObservationStatus::Final)
        .build()
        .unwrap();
    assert!(status.extension().is_none());
    assert_eq!(status, *ObservationStatusCode::of(ObservationStatus::Final));
}

#[test]
fn strict_build_requires_a_value_or_an_extension() {
    let err = DaysOfWeekCode::builder().id("only-id").build().unwrap_err();
    assert_eq!(
        err,
        CodeError::MissingValueOrChildren {
            vocabulary: "DaysOfWeek"
        }
    );
    assert_eq!(
        err.to_string(),
        "ele-1: DaysOfWeek element must have a value or children"
    );
}

#[test]
fn permissive_build_skips_validation() {
    let empty = DaysOfWeekCode::builder().build_permissive();
    assert_eq!(empty.value(), None);

    let empty = DaysOfWeekCode::builder().validating(false).build().unwrap();
    assert_eq!(empty, DaysOfWeekCode::parse(None).unwrap());
}

#[test]
fn to_builder_copies_every_field() {
    let original = DaysOfWeekCode::builder()
        .id("d1")
        .extension(note("weekday"))
        .member(DaysOfWeek::Mon)
        .build()
        .unwrap();

    let copy = original.to_builder().build().unwrap();
    assert_eq!(copy, original);

    let changed = original.to_builder().member(DaysOfWeek::Tue).build().unwrap();
    assert_eq!(changed.id(), Some("d1"));
    assert_eq!(changed.extension(), original.extension());
    assert_eq!(changed.as_enum().unwrap(), Some(DaysOfWeek::Tue));
    assert_eq!(original.as_enum().unwrap(), Some(DaysOfWeek::Mon));
}

#[test]
fn copy_from_replaces_earlier_fields() {
    let source = DaysOfWeekCode::parse("sun").unwrap();
    let rebuilt = CodedBuilder::<DaysOfWeek>::new()
        .id("discarded")
        .copy_from(&source)
        .build()
        .unwrap();
    assert_eq!(rebuilt, source);
    assert!(rebuilt.id().is_none());
}

#[test]
fn debug_shows_the_pending_fields() {
    let builder = ObservationStatusCode::builder()
        .id("obs-status")
        .member(ObservationStatus::Final)
        .validating(false);
    let rendered = format!("{builder:?}");
    assert!(rendered.starts_with("CodedBuilder {"), "{rendered}");
    assert!(rendered.contains("ObservationStatus"), "{rendered}");
    assert!(rendered.contains("\"obs-status\""), "{rendered}");
    assert!(rendered.contains("\"final\""), "{rendered}");
    assert!(rendered.contains("validating: false"), "{rendered}");
}
