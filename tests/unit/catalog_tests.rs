use std::path::PathBuf;

use arec::catalog::Catalog;
use arec::queries::{LabeledQuery, QuerySet};
use arec::test_utils::assessment;
use arec::test_utils::fixtures::UnitTestFixture;

fn data_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/data")
        .join(name)
}

#[test]
fn catalog_file_replaces_builtin() {
    let catalog = Catalog::load_or_builtin(Some(&data_path("mini_catalog.json"))).unwrap();
    assert_eq!(catalog.len(), 3);
    let entry = catalog.get("Numerical Reasoning | SHL").unwrap();
    assert!(!entry.remote_testing_support);
    assert!(entry.adaptive_irt_support);
    assert_eq!(entry.duration_minutes(), Some(20));
}

#[test]
fn builtin_is_used_without_path() {
    let catalog = Catalog::load_or_builtin(None).unwrap();
    assert_eq!(catalog.len(), 41);
}

#[test]
fn duplicate_names_in_file_fail_to_load() {
    let fixture = UnitTestFixture::new();
    let entry = assessment("Twice | SHL", "30 minutes", "Other");
    let path = fixture.create_catalog("catalog.json", &[entry.clone(), entry]);
    let err = Catalog::load(&path).unwrap_err();
    assert_eq!(err.code(), "catalog");
    assert!(err.to_string().contains("Twice | SHL"));
}

#[test]
fn missing_catalog_file_is_an_error() {
    let fixture = UnitTestFixture::new();
    assert!(Catalog::load(&fixture.data_path.join("nope.json")).is_err());
}

#[test]
fn loose_lookup_ignores_case_and_suffix() {
    let catalog = Catalog::builtin().unwrap();
    let found = catalog.find_loose("core java (entry level) (new)").unwrap();
    assert_eq!(found.name, "Core Java (Entry Level) (New) | SHL");
    assert!(catalog.find_loose("Cobol (New)").is_none());
}

#[test]
fn query_file_round_trips_through_fixture() {
    let fixture = UnitTestFixture::new();
    let written = vec![LabeledQuery::new("java", &["Java 8 (New) | SHL"])];
    let path = fixture.create_queries("queries.json", &written);
    let loaded = QuerySet::load(&path).unwrap();
    assert_eq!(loaded.queries(), written.as_slice());
}

#[test]
fn dangling_labels_against_custom_catalog() {
    let catalog = Catalog::load(&data_path("mini_catalog.json")).unwrap();
    let queries = QuerySet::load(&data_path("mini_queries.json")).unwrap();
    assert_eq!(queries.len(), 2);
    assert_eq!(queries.dangling_labels(&catalog), vec!["Retired Assessment | SHL"]);
}
