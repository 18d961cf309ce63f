use std::fs;

use atrius_codes_gen::{
    GENERATED_HEADER, GeneratorConfig, generate, load_code_systems, parse_code_systems,
};
use atrius_fhir_codes::FhirVersion;
use serde_json::json;

fn bundle() -> String {
    json!({
        "resourceType": "Bundle",
        "type": "collection",
        "entry": [
            {
                "resource": {
                    "resourceType": "CodeSystem",
                    "id": "days-of-week",
                    "url": "http://hl7.org/fhir/days-of-week",
                    "name": "DaysOfWeek",
                    "title": "DaysOfWeek",
                    "status": "active",
                    "description": "The days of the week.",
                    "content": "complete",
                    "concept": [
                        {"code": "mon", "display": "Monday", "definition": "Monday."},
                        {"code": "tue", "display": "Tuesday", "definition": "Tuesday."}
                    ]
                }
            },
            {
                "resource": {
                    "resourceType": "CodeSystem",
                    "id": "quantity-comparator",
                    "url": "http://hl7.org/fhir/quantity-comparator",
                    "version": "4.0.1",
                    "name": "QuantityComparator",
                    "content": "complete",
                    "concept": [
                        {"code": "<", "display": "Less than"},
                        {"code": ">=", "display": "Greater or Equal to", "concept": [
                            {"code": "ge-nested", "display": "Nested"}
                        ]}
                    ]
                }
            },
            {
                "resource": {
                    "resourceType": "CodeSystem",
                    "id": "v3-ActCode",
                    "url": "http://terminology.hl7.org/CodeSystem/v3-ActCode",
                    "name": "ActCode",
                    "content": "not-present"
                }
            },
            {
                "resource": {
                    "resourceType": "ValueSet",
                    "id": "days-of-week",
                    "url": "http://hl7.org/fhir/ValueSet/days-of-week"
                }
            }
        ]
    })
    .to_string()
}

fn config(dir: &std::path::Path) -> GeneratorConfig {
    GeneratorConfig {
        output_dir: dir.to_path_buf(),
        fhir_version: FhirVersion::R4,
        crate_path: "atrius_fhir_codes".to_string(),
    }
}

#[test]
fn ignores_other_resource_types() {
    let code_systems = parse_code_systems(&bundle()).unwrap();
    let urls: Vec<_> = code_systems.iter().map(|cs| cs.url.as_str()).collect();
    assert_eq!(
        urls,
        [
            "http://hl7.org/fhir/days-of-week",
            "http://hl7.org/fhir/quantity-comparator",
            "http://terminology.hl7.org/CodeSystem/v3-ActCode",
        ]
    );
}

#[test]
fn writes_one_module_per_enumerated_code_system() {
    let dir = tempfile::tempdir().unwrap();
    let summary = generate(parse_code_systems(&bundle()).unwrap(), &config(dir.path())).unwrap();

    assert_eq!(
        summary.modules,
        [
            ("days_of_week".to_string(), "DaysOfWeek".to_string()),
            ("quantity_comparator".to_string(), "QuantityComparator".to_string()),
        ]
    );
    assert_eq!(summary.skipped, ["http://terminology.hl7.org/CodeSystem/v3-ActCode"]);

    let days = fs::read_to_string(dir.path().join("days_of_week.rs")).unwrap();
    assert!(days.starts_with(GENERATED_HEADER));
    assert!(days.contains("use atrius_fhir_codes::{Coded, FhirCode};"));
    assert!(days.contains("pub enum DaysOfWeek {"));
    assert!(days.contains("/// Canonical URL: http://hl7.org/fhir/days-of-week"));
    assert!(days.contains("/// Display: Monday"));
    assert!(days.contains(r#"version = "4.0.1""#));
    assert!(days.contains("pub type DaysOfWeekCode = Coded<DaysOfWeek>;"));
    assert!(days.contains("#[deprecated"));
    assert!(days.contains("pub type DaysOfWeekValueSet = DaysOfWeek;"));

    let comparator = fs::read_to_string(dir.path().join("quantity_comparator.rs")).unwrap();
    assert!(comparator.contains("Lt,"));
    assert!(comparator.contains("Ge,"));
    assert!(comparator.contains("GeNested,"));
    assert!(comparator.contains(r#"value = ">=""#));
    assert!(!comparator.contains("ValueSet"));

    let mod_rs = fs::read_to_string(dir.path().join("mod.rs")).unwrap();
    assert!(mod_rs.starts_with(GENERATED_HEADER));
    assert!(mod_rs.contains("pub mod days_of_week;"));
    assert!(mod_rs.contains("pub use quantity_comparator::*;"));
    assert!(mod_rs.contains("VocabularyInfo::of::<DaysOfWeek>()"));
    assert!(mod_rs.contains("VocabularyInfo::of::<QuantityComparator>()"));
    assert!(!mod_rs.contains("act_code"));
}

#[test]
fn regeneration_is_deterministic() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    generate(parse_code_systems(&bundle()).unwrap(), &config(first.path())).unwrap();

    let mut reversed = parse_code_systems(&bundle()).unwrap();
    reversed.reverse();
    generate(reversed, &config(second.path())).unwrap();

    for file in ["days_of_week.rs", "quantity_comparator.rs", "mod.rs"] {
        assert_eq!(
            fs::read_to_string(first.path().join(file)).unwrap(),
            fs::read_to_string(second.path().join(file)).unwrap(),
            "{file}"
        );
    }
}

#[test]
fn exported_name_collisions_are_errors() {
    let json = json!({
        "resourceType": "Bundle",
        "entry": [
            {"resource": {
                "resourceType": "CodeSystem", "id": "link-type",
                "url": "http://hl7.org/fhir/link-type", "name": "LinkType",
                "concept": [{"code": "replaced-by"}]
            }},
            {"resource": {
                "resourceType": "CodeSystem", "id": "link-type-legacy",
                "url": "http://example.org/link-type", "name": "LinkType",
                "concept": [{"code": "refer"}]
            }}
        ]
    })
    .to_string();

    let dir = tempfile::tempdir().unwrap();
    let err = generate(parse_code_systems(&json).unwrap(), &config(dir.path())).unwrap_err();
    assert!(err.to_string().contains("LinkType"), "{err}");
    assert!(!dir.path().join("mod.rs").exists());
}

#[test]
fn invalid_crate_path_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let mut cfg = config(dir.path());
    cfg.crate_path = "not a path".to_string();
    assert!(generate(parse_code_systems(&bundle()).unwrap(), &cfg).is_err());
}

#[test]
fn checked_in_r4_modules_match_regeneration() {
    let manifest_dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    let checked_in = manifest_dir.join("../AtriusFhirCodes/src/r4/code_systems");
    let code_systems = load_code_systems(&manifest_dir.join("resources/R4/codesystems.json")).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let mut cfg = config(dir.path());
    cfg.crate_path = "crate".to_string();
    generate(code_systems, &cfg).unwrap();

    let mut generated: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .collect();
    generated.sort();
    let mut existing: Vec<_> = fs::read_dir(&checked_in)
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .collect();
    existing.sort();
    assert_eq!(generated, existing);

    for file in generated {
        assert_eq!(
            fs::read_to_string(dir.path().join(&file)).unwrap(),
            fs::read_to_string(checked_in.join(&file)).unwrap(),
            "{} is stale; rerun atrius-codes-gen",
            file.to_string_lossy()
        );
    }
}
