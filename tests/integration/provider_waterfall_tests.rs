use std::time::Duration;

use arec::catalog::Catalog;
use arec::ranking::{RankingEngine, SourceKind};
use httpmock::prelude::*;
use serde_json::json;

use crate::common::providers::{GEMINI_KEY, RAG_KEY, gemini_body, gemini_path, providers};

fn names(assessments: &[arec::catalog::Assessment]) -> Vec<&str> {
    assessments.iter().map(|a| a.name.as_str()).collect()
}

#[test]
fn rag_results_win_when_present() {
    let server = MockServer::start();
    let rag = server.mock(|when, then| {
        when.method(POST)
            .path("/recommend")
            .header("authorization", format!("Bearer {RAG_KEY}"))
            .json_body(json!({"query": "java developer", "maxResults": 5}));
        then.status(200)
            .json_body(json!({"recommendations": ["Java 8", {"name": "Drupal (New) | SHL"}]}));
    });
    let gemini = server.mock(|when, then| {
        when.method(POST).path(gemini_path());
        then.status(200).json_body(gemini_body("{\"recommendations\": []}"));
    });

    let catalog = Catalog::builtin().unwrap();
    let config = providers(Some(server.url("/recommend")), Some(server.url("/models")));
    let rec = RankingEngine::new(&catalog).recommend("java developer", 5, &config);

    rag.assert();
    gemini.assert_calls(0);
    assert_eq!(rec.source.kind, SourceKind::Rag);
    assert_eq!(rec.source.name, "RAG System");
    assert_eq!(
        names(&rec.assessments),
        vec!["Java 8 (New) | SHL", "Drupal (New) | SHL"]
    );
}

#[test]
fn empty_rag_falls_through_to_gemini() {
    let server = MockServer::start();
    let rag = server.mock(|when, then| {
        when.method(POST).path("/recommend");
        then.status(200).json_body(json!({"recommendations": []}));
    });
    let gemini = server.mock(|when, then| {
        when.method(POST)
            .path(gemini_path())
            .query_param("key", GEMINI_KEY);
        then.status(200).json_body(gemini_body(
            "```json\n{\"recommendations\": [\"Selenium (New) | SHL\", \"Manual Testing (New) | SHL\"]}\n```",
        ));
    });

    let catalog = Catalog::builtin().unwrap();
    let config = providers(Some(server.url("/recommend")), Some(server.url("/models")));
    let rec = RankingEngine::new(&catalog).recommend("qa tester", 10, &config);

    rag.assert();
    gemini.assert();
    assert_eq!(rec.source.kind, SourceKind::Gemini);
    assert_eq!(
        names(&rec.assessments),
        vec!["Selenium (New) | SHL", "Manual Testing (New) | SHL"]
    );
}

#[test]
fn gemini_partial_names_are_matched_loosely() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path(gemini_path());
        then.status(200)
            .json_body(gemini_body("{\"recommendations\": [\"sql\", \"SQL | SHL\"]}"));
    });

    let catalog = Catalog::builtin().unwrap();
    let config = providers(None, Some(server.url("/models")));
    let rec = RankingEngine::new(&catalog).recommend("database skills", 10, &config);

    assert_eq!(rec.source.kind, SourceKind::Gemini);
    assert_eq!(
        names(&rec.assessments),
        vec!["SQL Server (New) | SHL", "Automata - SQL (New) | SHL"]
    );
}

#[test]
fn server_errors_fall_back_to_rule_based() {
    let server = MockServer::start();
    let rag = server.mock(|when, then| {
        when.method(POST).path("/recommend");
        then.status(500).body("boom");
    });
    let gemini = server.mock(|when, then| {
        when.method(POST).path(gemini_path());
        then.status(429).body("quota");
    });

    let catalog = Catalog::builtin().unwrap();
    let config = providers(Some(server.url("/recommend")), Some(server.url("/models")));
    let rec = RankingEngine::new(&catalog).recommend("java developer", 3, &config);

    rag.assert();
    gemini.assert();
    assert_eq!(rec.source.kind, SourceKind::RuleBased);
    assert_eq!(rec.assessments.len(), 3);
}

#[test]
fn malformed_bodies_fall_back_to_rule_based() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/recommend");
        then.status(200).body("<html>not json</html>");
    });
    server.mock(|when, then| {
        when.method(POST).path(gemini_path());
        then.status(200).json_body(gemini_body("I would suggest the Java tests."));
    });

    let catalog = Catalog::builtin().unwrap();
    let config = providers(Some(server.url("/recommend")), Some(server.url("/models")));
    let rec = RankingEngine::new(&catalog).recommend("java developer", 3, &config);
    assert_eq!(rec.source.kind, SourceKind::RuleBased);
}

#[test]
fn unmatched_names_count_as_empty() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path(gemini_path());
        then.status(200)
            .json_body(gemini_body("{\"recommendations\": [\"Underwater Basket Weaving\"]}"));
    });

    let catalog = Catalog::builtin().unwrap();
    let config = providers(None, Some(server.url("/models")));
    let rec = RankingEngine::new(&catalog).recommend("java developer", 3, &config);
    assert_eq!(rec.source.kind, SourceKind::RuleBased);
}

#[test]
fn slow_provider_times_out() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/recommend");
        then.status(200)
            .delay(Duration::from_secs(3))
            .json_body(json!({"recommendations": ["Java 8 (New) | SHL"]}));
    });

    let catalog = Catalog::builtin().unwrap();
    let mut config = providers(Some(server.url("/recommend")), None);
    config.timeout = Duration::from_millis(300);
    let rec = RankingEngine::new(&catalog).recommend("java developer", 3, &config);
    assert_eq!(rec.source.kind, SourceKind::RuleBased);
}
