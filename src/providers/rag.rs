//! Retrieval-augmented recommendation service.
//!
//! The service answers `{"recommendations": [...]}` where each entry is a
//! bare name or an object carrying a `name` field.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::match_fragments;
use crate::catalog::{Assessment, Catalog};
use crate::config::RagConfig;
use crate::error::{ArecError, Result};

const PROVIDER: &str = "rag";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RagRequest<'a> {
    query: &'a str,
    max_results: usize,
}

#[derive(Deserialize)]
struct RagResponse {
    #[serde(default)]
    recommendations: Vec<RagEntry>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RagEntry {
    Name(String),
    Record { name: String },
}

impl RagEntry {
    fn into_name(self) -> String {
        match self {
            Self::Name(name) | Self::Record { name } => name,
        }
    }
}

pub struct RagClient {
    client: reqwest::blocking::Client,
    endpoint: String,
    api_key: String,
}

impl RagClient {
    pub fn from_config(config: &RagConfig, timeout: Duration) -> Result<Self> {
        if !config.is_usable() {
            return Err(ArecError::MissingConfig(
                "rag provider needs enabled=true, api_key and endpoint in [providers.rag]"
                    .to_string(),
            ));
        }
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| ArecError::provider(PROVIDER, format!("http client: {err}")))?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone().unwrap_or_default(),
            api_key: config.api_key.clone(),
        })
    }

    pub fn recommend(
        &self,
        query: &str,
        catalog: &Catalog,
        max_results: usize,
    ) -> Result<Vec<Assessment>> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&RagRequest { query, max_results })
            .send()
            .map_err(|err| ArecError::provider(PROVIDER, format!("request failed: {err}")))?;

        if !response.status().is_success() {
            return Err(ArecError::provider(
                PROVIDER,
                format!("HTTP {}", response.status()),
            ));
        }

        let body: RagResponse = response
            .json()
            .map_err(|err| ArecError::provider(PROVIDER, format!("response parse: {err}")))?;
        let fragments: Vec<String> = body
            .recommendations
            .into_iter()
            .map(RagEntry::into_name)
            .collect();
        debug!(fragments = fragments.len(), "rag fragments");

        Ok(match_fragments(&fragments, catalog, max_results))
    }
}
