//! Error types for arec

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArecError {
    #[error("config error: {0}")]
    Config(String),

    #[error("missing config: {0}")]
    MissingConfig(String),

    #[error("catalog error: {0}")]
    Catalog(String),

    #[error("{provider} provider failed: {message}")]
    Provider {
        provider: &'static str,
        message: String,
    },

    #[error("fetch failed: {0}")]
    Fetch(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl ArecError {
    pub(crate) fn provider(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Provider {
            provider,
            message: message.into(),
        }
    }

    /// Stable machine-readable code for robot output.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::MissingConfig(_) => "missing_config",
            Self::Catalog(_) => "catalog",
            Self::Provider { .. } => "provider",
            Self::Fetch(_) => "fetch",
            Self::NotFound(_) => "not_found",
            Self::Io(_) => "io",
            Self::Json(_) => "json",
        }
    }
}

pub type Result<T> = std::result::Result<T, ArecError>;
