//! Ranking engine and provider waterfall
//!
//! `recommend` tries the external providers in priority order (RAG, then
//! Gemini) and falls back to heuristic scoring of the whole catalog. The
//! first provider that returns a non-empty list wins; results are never
//! merged across providers.

use std::fmt;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::catalog::{Assessment, Catalog};
use crate::config::ProvidersConfig;
use crate::error::Result;
use crate::providers::{GeminiClient, RagClient};
use crate::scoring::{self, ScoreBreakdown};

/// Which path produced a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceKind {
    RuleBased,
    Gemini,
    Rag,
}

impl SourceKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RuleBased => "rule-based",
            Self::Gemini => "gemini",
            Self::Rag => "rag",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::RuleBased => "Rule-Based Engine",
            Self::Gemini => "Gemini AI",
            Self::Rag => "RAG System",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendationSource {
    #[serde(rename = "type")]
    pub kind: SourceKind,
    pub name: String,
}

impl From<SourceKind> for RecommendationSource {
    fn from(kind: SourceKind) -> Self {
        Self {
            kind,
            name: kind.display_name().to_string(),
        }
    }
}

/// Ordered assessments plus provenance.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub assessments: Vec<Assessment>,
    pub source: RecommendationSource,
}

/// An assessment with its heuristic score.
#[derive(Debug, Clone, Copy)]
pub struct ScoredCandidate<'a> {
    pub assessment: &'a Assessment,
    pub score: i32,
}

impl ScoredCandidate<'_> {
    #[must_use]
    pub fn explain(&self, query: &str) -> ScoreBreakdown {
        scoring::explain(query, self.assessment)
    }
}

/// One stage of the waterfall.
pub enum RecommendationProvider {
    Rag(RagClient),
    Gemini(GeminiClient),
    RuleBased,
}

impl RecommendationProvider {
    /// Stages to try for `config`, highest priority first. Rule-based
    /// scoring is always last.
    pub fn waterfall(config: &ProvidersConfig) -> Vec<Self> {
        let mut stages = Vec::with_capacity(3);
        if config.rag.is_usable() {
            match RagClient::from_config(&config.rag, config.timeout) {
                Ok(client) => stages.push(Self::Rag(client)),
                Err(err) => warn!(error = %err, "skipping rag provider"),
            }
        }
        if config.gemini.is_usable() {
            match GeminiClient::from_config(&config.gemini, config.timeout) {
                Ok(client) => stages.push(Self::Gemini(client)),
                Err(err) => warn!(error = %err, "skipping gemini provider"),
            }
        }
        stages.push(Self::RuleBased);
        stages
    }

    #[must_use]
    pub const fn kind(&self) -> SourceKind {
        match self {
            Self::Rag(_) => SourceKind::Rag,
            Self::Gemini(_) => SourceKind::Gemini,
            Self::RuleBased => SourceKind::RuleBased,
        }
    }

    pub fn attempt(
        &self,
        query: &str,
        catalog: &Catalog,
        max_results: usize,
    ) -> Result<Vec<Assessment>> {
        match self {
            Self::Rag(client) => client.recommend(query, catalog, max_results),
            Self::Gemini(client) => client.recommend(query, catalog, max_results),
            Self::RuleBased => Ok(rank(catalog, query, max_results)
                .into_iter()
                .map(|candidate| candidate.assessment.clone())
                .collect()),
        }
    }
}

/// Score every catalog entry and keep the best `limit` (at least one).
///
/// The sort is stable, so equal scores keep catalog order.
#[must_use]
pub fn rank<'a>(catalog: &'a Catalog, query: &str, limit: usize) -> Vec<ScoredCandidate<'a>> {
    let mut candidates: Vec<ScoredCandidate<'a>> = catalog
        .iter()
        .map(|assessment| ScoredCandidate {
            assessment,
            score: scoring::score(query, assessment),
        })
        .collect();
    candidates.sort_by(|a, b| b.score.cmp(&a.score));
    candidates.truncate(limit.max(1));
    candidates
}

pub struct RankingEngine<'a> {
    catalog: &'a Catalog,
}

impl<'a> RankingEngine<'a> {
    #[must_use]
    pub const fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    #[must_use]
    pub const fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Run the provider waterfall for `query`.
    pub fn recommend(
        &self,
        query: &str,
        max_results: usize,
        providers: &ProvidersConfig,
    ) -> Recommendation {
        let limit = max_results.max(1);
        for provider in RecommendationProvider::waterfall(providers) {
            let kind = provider.kind();
            match provider.attempt(query, self.catalog, limit) {
                Ok(assessments) if !assessments.is_empty() || kind == SourceKind::RuleBased => {
                    info!(source = %kind, results = assessments.len(), "recommendation ready");
                    return Recommendation {
                        assessments,
                        source: kind.into(),
                    };
                }
                Ok(_) => warn!(source = %kind, "provider returned no matching assessments"),
                Err(err) => warn!(source = %kind, error = %err, "provider failed"),
            }
        }

        // The waterfall always ends in the rule-based stage, which cannot fail.
        debug!("waterfall exhausted");
        Recommendation {
            assessments: Vec::new(),
            source: SourceKind::RuleBased.into(),
        }
    }

    /// Rule-based ranking with scores.
    #[must_use]
    pub fn rank(&self, query: &str, limit: usize) -> Vec<ScoredCandidate<'a>> {
        rank(self.catalog, query, limit)
    }
}
