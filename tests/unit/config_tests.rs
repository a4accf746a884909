use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use arec::config::{Config, DEFAULT_GEMINI_ENDPOINT};
use arec::test_utils::fixtures::UnitTestFixture;
use arec::test_utils::{TestCase, run_table_tests};

fn fixture_path(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(relative)
}

fn load_fixture(relative: &str) -> Config {
    let content = fs::read_to_string(fixture_path(relative)).expect("read fixture");
    Config::from_toml(&content).expect("parse config")
}

#[test]
fn ranking_and_evaluation_from_fixture() -> Result<(), String> {
    let cases = vec![
        TestCase {
            name: "default",
            input: "tests/fixtures/configs/default.toml",
            expected: (10usize, 3usize, 10usize, None),
            should_panic: false,
        },
        TestCase {
            name: "custom",
            input: "tests/fixtures/configs/custom.toml",
            expected: (
                5usize,
                5usize,
                20usize,
                Some(PathBuf::from("/tmp/arec/queries.json")),
            ),
            should_panic: false,
        },
    ];

    run_table_tests(cases, |relative_path| {
        let config = load_fixture(relative_path);
        (
            config.ranking.max_results,
            config.evaluation.k,
            config.evaluation.max_results,
            config.evaluation.queries_path,
        )
    })?;
    Ok(())
}

#[test]
fn provider_settings_from_fixture() -> Result<(), String> {
    let cases = vec![
        TestCase {
            name: "default",
            input: "tests/fixtures/configs/default.toml",
            expected: (
                Duration::from_secs(10),
                false,
                DEFAULT_GEMINI_ENDPOINT.to_string(),
                "gemini-1.5-pro-latest".to_string(),
                false,
            ),
            should_panic: false,
        },
        TestCase {
            name: "custom",
            input: "tests/fixtures/configs/custom.toml",
            expected: (
                Duration::from_millis(2500),
                true,
                "http://localhost:9999/v1beta/models".to_string(),
                "gemini-1.5-flash".to_string(),
                true,
            ),
            should_panic: false,
        },
    ];

    run_table_tests(cases, |relative_path| {
        let config = load_fixture(relative_path);
        let providers = config.providers;
        (
            providers.timeout,
            providers.gemini.is_usable(),
            providers.gemini.endpoint().to_string(),
            providers.gemini.model.clone(),
            providers.rag.is_usable(),
        )
    })?;
    Ok(())
}

#[test]
fn fetch_and_catalog_from_fixture() {
    let config = load_fixture("tests/fixtures/configs/custom.toml");
    assert!(!config.fetch.enabled);
    assert_eq!(config.fetch.timeout, Duration::from_secs(60));
    assert_eq!(
        config.catalog.path,
        Some(PathBuf::from("/tmp/arec/catalog.json"))
    );
}

#[test]
fn explicit_file_replaces_project_layer() {
    let fixture = UnitTestFixture::new();
    let _ = fixture.create_project_config("[ranking]\nmax_results = 7\n");
    let explicit = fixture.create_file("explicit.toml", "[evaluation]\nk = 4\n");

    let config = Config::load(Some(explicit.as_path()), &fixture.data_path).expect("load config");
    assert_eq!(config.evaluation.k, 4);
    assert_eq!(config.ranking.max_results, 10);
}

#[test]
fn missing_explicit_file_means_defaults() {
    let fixture = UnitTestFixture::new();
    let absent = fixture.data_path.join("absent.toml");
    let config = Config::load(Some(absent.as_path()), &fixture.data_path).expect("load");
    assert_eq!(config.evaluation.max_results, 10);
    assert!(config.fetch.enabled);
}

#[test]
fn malformed_file_reports_path() {
    let fixture = UnitTestFixture::new();
    let path = fixture.create_file("broken.toml", "[ranking\nmax_results = 1");
    let err = Config::load(Some(path.as_path()), &fixture.data_path).unwrap_err();
    assert_eq!(err.code(), "config");
    assert!(err.to_string().contains("broken.toml"));
}
