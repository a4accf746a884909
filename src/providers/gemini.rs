//! Generative-model provider (Gemini `generateContent`).

use std::time::Duration;

use reqwest::Url;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{extract_json_object, match_suggested_names};
use crate::catalog::{Assessment, Catalog};
use crate::config::GeminiConfig;
use crate::error::{ArecError, Result};

const PROVIDER: &str = "gemini";

const TEMPERATURE: f32 = 0.2;
const TOP_K: u32 = 40;
const TOP_P: f32 = 0.95;
const MAX_OUTPUT_TOKENS: u32 = 1024;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<TextPart>,
}

#[derive(Serialize, Deserialize)]
struct TextPart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_k: u32,
    top_p: f32,
    max_output_tokens: u32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<TextPart>,
}

#[derive(Deserialize)]
struct Suggestions {
    #[serde(default)]
    recommendations: Vec<String>,
}

pub struct GeminiClient {
    client: reqwest::blocking::Client,
    url: Url,
}

impl GeminiClient {
    pub fn from_config(config: &GeminiConfig, timeout: Duration) -> Result<Self> {
        if !config.is_usable() {
            return Err(ArecError::MissingConfig(
                "gemini provider needs enabled=true and an api_key in [providers.gemini]"
                    .to_string(),
            ));
        }
        let base = format!(
            "{}/{}:generateContent",
            config.endpoint().trim_end_matches('/'),
            config.model
        );
        let url = Url::parse_with_params(&base, &[("key", config.api_key.as_str())])
            .map_err(|err| ArecError::Config(format!("gemini endpoint {base}: {err}")))?;
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| ArecError::provider(PROVIDER, format!("http client: {err}")))?;
        Ok(Self { client, url })
    }

    /// Ask the model for assessment names and map them onto `catalog`.
    pub fn recommend(
        &self,
        query: &str,
        catalog: &Catalog,
        max_results: usize,
    ) -> Result<Vec<Assessment>> {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![TextPart {
                    text: Some(build_prompt(query)),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                top_k: TOP_K,
                top_p: TOP_P,
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        };

        let response = self
            .client
            .post(self.url.clone())
            .json(&request)
            .send()
            .map_err(|err| ArecError::provider(PROVIDER, format!("request failed: {err}")))?;

        if !response.status().is_success() {
            return Err(ArecError::provider(
                PROVIDER,
                format!("HTTP {}", response.status()),
            ));
        }

        let response: GenerateResponse = response
            .json()
            .map_err(|err| ArecError::provider(PROVIDER, format!("response parse: {err}")))?;

        let text = response
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts.into_iter().next())
            .and_then(|part| part.text)
            .ok_or_else(|| ArecError::provider(PROVIDER, "no text in response"))?;

        let names = parse_suggestions(&text)?;
        debug!(suggested = names.len(), "gemini suggestions");
        Ok(match_suggested_names(&names, catalog, max_results))
    }
}

/// Pull the recommended names out of free-form model text.
pub fn parse_suggestions(text: &str) -> Result<Vec<String>> {
    let object = extract_json_object(text)
        .ok_or_else(|| ArecError::provider(PROVIDER, "no JSON object in model output"))?;
    let suggestions: Suggestions = serde_json::from_str(object)
        .map_err(|err| ArecError::provider(PROVIDER, format!("model JSON: {err}")))?;
    Ok(suggestions.recommendations)
}

fn build_prompt(query: &str) -> String {
    format!(
        r#"You are an expert assistant for selecting SHL hiring assessments.

Job description or query:
"{query}"

Recommend the most relevant SHL assessments from the catalog:
1. Respect any duration constraint in the query (e.g. "less than 30 minutes", "within 45 mins").
2. Focus on the technical skills, job roles and other requirements mentioned.
3. Weigh named technologies (Java, Python, JavaScript, ...) heavily.
4. Account for administrative, sales or other specialised roles.

Answer with JSON only, in this shape:
{{
  "recommendations": ["Assessment Name 1 | SHL", "Assessment Name 2 | SHL"]
}}

Return at most 10 names, most relevant first, and only names likely to exist in the SHL catalog."#
    )
}
