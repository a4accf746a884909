use std::time::Duration;

use arec::config::{GeminiConfig, ProvidersConfig, RagConfig};

pub const RAG_KEY: &str = "rag-test-key";
pub const GEMINI_KEY: &str = "gemini-test-key";
pub const GEMINI_MODEL: &str = "test-model";

/// Providers pointed at a mock server; `None` leaves that provider disabled.
/// `gemini_base` is the models collection URL, e.g. `{server}/models`.
pub fn providers(rag_url: Option<String>, gemini_base: Option<String>) -> ProvidersConfig {
    ProvidersConfig {
        timeout: Duration::from_secs(2),
        rag: rag_url.map_or_else(RagConfig::default, |url| RagConfig {
            enabled: true,
            api_key: RAG_KEY.to_string(),
            endpoint: Some(url),
        }),
        gemini: gemini_base.map_or_else(GeminiConfig::default, |base| GeminiConfig {
            enabled: true,
            api_key: GEMINI_KEY.to_string(),
            endpoint: Some(base),
            model: GEMINI_MODEL.to_string(),
        }),
    }
}

/// Gemini `generateContent` path for the test model.
pub fn gemini_path() -> String {
    format!("/models/{GEMINI_MODEL}:generateContent")
}

/// A `generateContent` response whose text is `text`.
pub fn gemini_body(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [{
            "content": {"parts": [{"text": text}], "role": "model"},
            "finishReason": "STOP"
        }]
    })
}
