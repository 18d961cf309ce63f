use atrius_fhir_codes::r4::{
    AdministrativeGender, AdministrativeGenderCode, EncounterStatus, EncounterStatusCode,
};
use atrius_fhir_codes::{DATA_ABSENT_REASON_URL, Extension};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Encounter {
    status: EncounterStatusCode,
    #[serde(rename = "_status", skip_serializing_if = "Option::is_none", default)]
    history: Option<Vec<EncounterStatus>>,
}

#[test]
fn bare_code_form() {
    let status = EncounterStatusCode::of(EncounterStatus::InProgress);
    assert_eq!(serde_json::to_value(status).unwrap(), json!("in-progress"));

    let back: EncounterStatusCode = serde_json::from_value(json!("in-progress")).unwrap();
    assert_eq!(&back, status);
}

#[test]
fn object_form_with_id_and_extension() {
    let raw = json!({
        "id": "g1",
        "extension": [{
            "url": "http://example.org/fhir/StructureDefinition/source",
            "valueString": "intake form"
        }],
        "value": "other"
    });

    let gender: AdministrativeGenderCode = serde_json::from_value(raw.clone()).unwrap();
    assert_eq!(gender.id(), Some("g1"));
    assert_eq!(gender.as_enum().unwrap(), Some(AdministrativeGender::Other));
    assert_eq!(serde_json::to_value(&gender).unwrap(), raw);
}

#[test]
fn extension_only_form_reads_back() {
    let raw = json!({
        "extension": [{"url": DATA_ABSENT_REASON_URL, "valueCode": "asked-declined"}]
    });
    let gender: AdministrativeGenderCode = serde_json::from_value(raw.clone()).unwrap();
    assert!(gender.value().is_none());
    assert!(gender.has_only_data_absent_reason_extension());
    assert_eq!(
        gender.extension(),
        Some(&[Extension::data_absent_reason("asked-declined")][..])
    );
    assert_eq!(serde_json::to_value(&gender).unwrap(), raw);
}

#[test]
fn null_reads_as_an_empty_value() {
    let gender: AdministrativeGenderCode = serde_json::from_value(json!(null)).unwrap();
    assert_eq!(gender, AdministrativeGenderCode::parse(None).unwrap());
    assert_eq!(serde_json::to_value(&gender).unwrap(), json!(null));
}

#[test]
fn unknown_codes_fail_to_deserialize() {
    let err = serde_json::from_value::<AdministrativeGenderCode>(json!("F")).unwrap_err();
    assert!(
        err.to_string().contains("invalid code 'F' for AdministrativeGender"),
        "{err}"
    );

    let err = serde_json::from_value::<AdministrativeGender>(json!("F")).unwrap_err();
    assert!(err.to_string().contains("unknown variant `F`"), "{err}");
    assert!(err.to_string().contains("`female`"), "{err}");
}

#[test]
fn member_enums_serialize_as_codes() {
    let history = vec![EncounterStatus::Planned, EncounterStatus::EnteredInError];
    assert_eq!(
        serde_json::to_value(&history).unwrap(),
        json!(["planned", "entered-in-error"])
    );
}

#[test]
fn embedded_in_a_resource() {
    let raw = json!({
        "status": "finished",
        "_status": ["planned", "arrived", "finished"]
    });
    let encounter: Encounter = serde_json::from_value(raw.clone()).unwrap();
    assert_eq!(
        encounter.status.as_enum().unwrap(),
        Some(EncounterStatus::Finished)
    );
    assert_eq!(encounter.history.as_ref().map(Vec::len), Some(3));
    assert_eq!(serde_json::to_value(&encounter).unwrap(), raw);

    let bad = json!({"status": "done"});
    assert!(serde_json::from_value::<Encounter>(bad).is_err());
}
