//! Labeled query set used by the evaluation harness.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::catalog::Catalog;
use crate::error::{ArecError, Result};

const BUILTIN_QUERIES: &str = include_str!("../data/labeled_queries.json");

/// A query paired with the names of the assessments judged relevant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabeledQuery {
    pub query: String,
    pub relevant_assessments: Vec<String>,
}

impl LabeledQuery {
    pub fn new(query: impl Into<String>, relevant: &[&str]) -> Self {
        Self {
            query: query.into(),
            relevant_assessments: relevant.iter().map(|name| (*name).to_string()).collect(),
        }
    }

    /// Relevant names as a set (duplicates in the label list count once).
    #[must_use]
    pub fn relevant_set(&self) -> HashSet<&str> {
        self.relevant_assessments.iter().map(String::as_str).collect()
    }
}

#[derive(Debug, Clone, Default)]
pub struct QuerySet {
    queries: Vec<LabeledQuery>,
}

impl QuerySet {
    #[must_use]
    pub const fn new(queries: Vec<LabeledQuery>) -> Self {
        Self { queries }
    }

    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_QUERIES)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let queries = serde_json::from_str(raw)
            .map_err(|err| ArecError::Config(format!("parse labeled queries: {err}")))?;
        Ok(Self { queries })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|err| ArecError::Config(format!("read {}: {err}", path.display())))?;
        Self::from_json(&raw)
    }

    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(Self::builtin, Self::load)
    }

    #[must_use]
    pub fn queries(&self) -> &[LabeledQuery] {
        &self.queries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }

    /// Relevant names that do not exist in `catalog`. Labels are a usage
    /// contract only, so these are reported rather than rejected.
    #[must_use]
    pub fn dangling_labels(&self, catalog: &Catalog) -> Vec<String> {
        let mut missing: Vec<String> = self
            .queries
            .iter()
            .flat_map(|labeled| labeled.relevant_assessments.iter())
            .filter(|name| !catalog.contains(name))
            .cloned()
            .collect();
        missing.sort();
        missing.dedup();
        for name in &missing {
            warn!(assessment = %name, "labeled query references unknown assessment");
        }
        missing
    }
}
