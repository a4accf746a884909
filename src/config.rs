//! Layered configuration: defaults, config files, then environment overrides.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ArecError, Result};

pub const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-pro-latest";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ranking: RankingConfig,
    pub providers: ProvidersConfig,
    pub evaluation: EvaluationConfig,
    pub catalog: CatalogConfig,
    pub fetch: FetchConfig,
}

impl Config {
    /// Layered load: defaults, then global and project files (or only the
    /// explicit file when one is given), then environment overrides.
    pub fn load(explicit_path: Option<&Path>, cwd: &Path) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("AREC_CONFIG").ok().map(PathBuf::from));

        if let Some(path) = explicit {
            if let Some(patch) = Self::load_patch(&path)? {
                config.merge_patch(patch);
            }
        } else {
            if let Some(global) = Self::load_global()? {
                config.merge_patch(global);
            }
            if let Some(project) = Self::load_project(cwd)? {
                config.merge_patch(project);
            }
        }

        config.apply_env_overrides()?;

        Ok(config)
    }

    /// Parse a complete TOML document on top of the defaults.
    pub fn from_toml(raw: &str) -> Result<Self> {
        let patch: ConfigPatch =
            toml::from_str(raw).map_err(|err| ArecError::Config(format!("parse config: {err}")))?;
        let mut config = Self::default();
        config.merge_patch(patch);
        Ok(config)
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        let Some(dir) = dirs::config_dir() else {
            return Ok(None);
        };
        Self::load_patch(&dir.join("arec/config.toml"))
    }

    fn load_project(cwd: &Path) -> Result<Option<ConfigPatch>> {
        match find_upwards(cwd, ".arec") {
            Some(root) => Self::load_patch(&root.join("config.toml")),
            None => Ok(None),
        }
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| ArecError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| ArecError::Config(format!("parse config {}: {err}", path.display())))?;
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.ranking {
            self.ranking.merge(patch);
        }
        if let Some(patch) = patch.providers {
            self.providers.merge(patch);
        }
        if let Some(patch) = patch.evaluation {
            self.evaluation.merge(patch);
        }
        if let Some(patch) = patch.catalog {
            self.catalog.merge(patch);
        }
        if let Some(patch) = patch.fetch {
            self.fetch.merge(patch);
        }
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Some(value) = env_usize("AREC_RANKING_MAX_RESULTS")? {
            self.ranking.max_results = value;
        }

        if let Some(value) = env_u64("AREC_PROVIDER_TIMEOUT_SECS")? {
            self.providers.timeout = Duration::from_secs(value);
        }

        let gemini = &mut self.providers.gemini;
        if let Some(value) = env_bool("AREC_GEMINI_ENABLED") {
            gemini.enabled = value;
        }
        if let Some(value) = env_string("AREC_GEMINI_API_KEY").or_else(|| env_string("GEMINI_API_KEY")) {
            gemini.api_key = value;
        }
        if let Some(value) = env_string("AREC_GEMINI_ENDPOINT") {
            gemini.endpoint = Some(value);
        }
        if let Some(value) = env_string("AREC_GEMINI_MODEL") {
            gemini.model = value;
        }

        let rag = &mut self.providers.rag;
        if let Some(value) = env_bool("AREC_RAG_ENABLED") {
            rag.enabled = value;
        }
        if let Some(value) = env_string("AREC_RAG_API_KEY") {
            rag.api_key = value;
        }
        if let Some(value) = env_string("AREC_RAG_ENDPOINT") {
            rag.endpoint = Some(value);
        }

        if let Some(value) = env_usize("AREC_EVAL_K")? {
            self.evaluation.k = value;
        }
        if let Some(value) = env_usize("AREC_EVAL_MAX_RESULTS")? {
            self.evaluation.max_results = value;
        }
        if let Some(value) = env_string("AREC_QUERIES_PATH") {
            self.evaluation.queries_path = Some(PathBuf::from(value));
        }

        if let Some(value) = env_string("AREC_CATALOG_PATH") {
            self.catalog.path = Some(PathBuf::from(value));
        }

        if let Some(value) = env_bool("AREC_FETCH_ENABLED") {
            self.fetch.enabled = value;
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    pub max_results: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self { max_results: 10 }
    }
}

impl RankingConfig {
    fn merge(&mut self, patch: RankingPatch) {
        if let Some(value) = patch.max_results {
            self.max_results = value;
        }
    }
}

/// Settings for the external recommendation providers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProvidersConfig {
    /// Bound on each external call
    #[serde(with = "humantime_serde")]
    pub timeout: Duration,
    pub gemini: GeminiConfig,
    pub rag: RagConfig,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            gemini: GeminiConfig::default(),
            rag: RagConfig::default(),
        }
    }
}

impl ProvidersConfig {
    /// No external provider enabled: every recommendation is rule-based.
    #[must_use]
    pub fn rule_based_only() -> Self {
        Self::default()
    }

    fn merge(&mut self, patch: ProvidersPatch) {
        if let Some(value) = patch.timeout {
            self.timeout = value;
        }
        if let Some(patch) = patch.gemini {
            self.gemini.merge(patch);
        }
        if let Some(patch) = patch.rag {
            self.rag.merge(patch);
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeminiConfig {
    pub enabled: bool,
    pub api_key: String,
    /// Base URL of the models API; defaults to Google's public endpoint
    pub endpoint: Option<String>,
    pub model: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            api_key: String::new(),
            endpoint: None,
            model: DEFAULT_GEMINI_MODEL.to_string(),
        }
    }
}

impl GeminiConfig {
    /// Enabled and carrying a credential.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        self.enabled && !self.api_key.trim().is_empty()
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.endpoint
            .as_deref()
            .filter(|endpoint| !endpoint.trim().is_empty())
            .unwrap_or(DEFAULT_GEMINI_ENDPOINT)
    }

    fn merge(&mut self, patch: GeminiPatch) {
        if let Some(value) = patch.enabled {
            self.enabled = value;
        }
        if let Some(value) = patch.api_key {
            self.api_key = value;
        }
        if let Some(value) = patch.endpoint {
            self.endpoint = Some(value);
        }
        if let Some(value) = patch.model {
            self.model = value;
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RagConfig {
    pub enabled: bool,
    pub api_key: String,
    pub endpoint: Option<String>,
}

impl RagConfig {
    /// Enabled with both a credential and an endpoint.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        self.enabled
            && !self.api_key.trim().is_empty()
            && self
                .endpoint
                .as_deref()
                .is_some_and(|endpoint| !endpoint.trim().is_empty())
    }

    fn merge(&mut self, patch: RagPatch) {
        if let Some(value) = patch.enabled {
            self.enabled = value;
        }
        if let Some(value) = patch.api_key {
            self.api_key = value;
        }
        if let Some(value) = patch.endpoint {
            self.endpoint = Some(value);
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationConfig {
    pub k: usize,
    /// List length requested per labeled query
    pub max_results: usize,
    pub queries_path: Option<PathBuf>,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            k: 3,
            max_results: 10,
            queries_path: None,
        }
    }
}

impl EvaluationConfig {
    fn merge(&mut self, patch: EvaluationPatch) {
        if let Some(value) = patch.k {
            self.k = value;
        }
        if let Some(value) = patch.max_results {
            self.max_results = value;
        }
        if let Some(value) = patch.queries_path {
            self.queries_path = Some(value);
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub path: Option<PathBuf>,
}

impl CatalogConfig {
    fn merge(&mut self, patch: CatalogPatch) {
        if let Some(value) = patch.path {
            self.path = Some(value);
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    pub enabled: bool,
    #[serde(with = "humantime_serde")]
    pub timeout: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            timeout: Duration::from_secs(15),
        }
    }
}

impl FetchConfig {
    fn merge(&mut self, patch: FetchPatch) {
        if let Some(value) = patch.enabled {
            self.enabled = value;
        }
        if let Some(value) = patch.timeout {
            self.timeout = value;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigPatch {
    pub ranking: Option<RankingPatch>,
    pub providers: Option<ProvidersPatch>,
    pub evaluation: Option<EvaluationPatch>,
    pub catalog: Option<CatalogPatch>,
    pub fetch: Option<FetchPatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RankingPatch {
    pub max_results: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ProvidersPatch {
    #[serde(default, with = "humantime_serde")]
    pub timeout: Option<Duration>,
    pub gemini: Option<GeminiPatch>,
    pub rag: Option<RagPatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct GeminiPatch {
    pub enabled: Option<bool>,
    pub api_key: Option<String>,
    pub endpoint: Option<String>,
    pub model: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RagPatch {
    pub enabled: Option<bool>,
    pub api_key: Option<String>,
    pub endpoint: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct EvaluationPatch {
    pub k: Option<usize>,
    pub max_results: Option<usize>,
    pub queries_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct CatalogPatch {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct FetchPatch {
    pub enabled: Option<bool>,
    #[serde(default, with = "humantime_serde")]
    pub timeout: Option<Duration>,
}

/// Mask a credential for display, keeping the last four characters.
#[must_use]
pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.is_empty() {
        return String::new();
    }
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{tail}", "*".repeat(chars.len() - 4))
}

fn find_upwards(start: &Path, name: &str) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.is_dir())
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}

fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
}

fn env_u64(key: &str) -> Result<Option<u64>> {
    match std::env::var(key) {
        Ok(value) => value
            .parse::<u64>()
            .map(Some)
            .map_err(|err| ArecError::Config(format!("invalid {key} value {value}: {err}"))),
        Err(_) => Ok(None),
    }
}

fn env_usize(key: &str) -> Result<Option<usize>> {
    match std::env::var(key) {
        Ok(value) => value
            .parse::<usize>()
            .map(Some)
            .map_err(|err| ArecError::Config(format!("invalid {key} value {value}: {err}"))),
        Err(_) => Ok(None),
    }
}
