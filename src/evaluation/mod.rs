//! Offline evaluation against the labeled query set
//!
//! Each labeled query is pushed through the same ranking path users hit,
//! then scored with standard retrieval metrics:
//! - Recall@K: share of the relevant set found in the top K
//! - AP@K: average precision over the top K, normalised by `min(K, |relevant|)`
//! - Precision@K: share of the top K that is relevant
//!
//! Every ratio is guarded, so empty inputs yield 0 rather than NaN.

use std::collections::HashSet;

use serde::Serialize;
use tracing::{debug, info};

use crate::config::ProvidersConfig;
use crate::queries::{LabeledQuery, QuerySet};
use crate::ranking::{RankingEngine, SourceKind};

/// Recall@K for one ranked list.
#[must_use]
pub fn recall_at_k(ranked: &[&str], relevant: &HashSet<&str>, k: usize) -> f64 {
    if relevant.is_empty() {
        return 0.0;
    }
    ratio(hits_at_k(ranked, relevant, k), relevant.len())
}

/// Average precision within the first K positions.
#[must_use]
pub fn average_precision_at_k(ranked: &[&str], relevant: &HashSet<&str>, k: usize) -> f64 {
    if relevant.is_empty() || k == 0 {
        return 0.0;
    }

    let mut found = 0usize;
    let mut sum = 0.0;
    for (index, name) in ranked.iter().take(k).enumerate() {
        if relevant.contains(name) {
            found += 1;
            sum += ratio(found, index + 1);
        }
    }

    sum / as_f64(k.min(relevant.len()))
}

/// Precision@K, measured over the positions actually returned.
#[must_use]
pub fn precision_at_k(ranked: &[&str], relevant: &HashSet<&str>, k: usize) -> f64 {
    let depth = k.min(ranked.len());
    if depth == 0 {
        return 0.0;
    }
    ratio(hits_at_k(ranked, relevant, k), depth)
}

fn hits_at_k(ranked: &[&str], relevant: &HashSet<&str>, k: usize) -> usize {
    ranked
        .iter()
        .take(k)
        .filter(|name| relevant.contains(*name))
        .count()
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        as_f64(numerator) / as_f64(denominator)
    }
}

#[allow(clippy::cast_precision_loss)]
fn as_f64(value: usize) -> f64 {
    value as f64
}

fn mean(values: impl ExactSizeIterator<Item = f64>) -> f64 {
    let count = values.len();
    if count == 0 {
        return 0.0;
    }
    values.sum::<f64>() / as_f64(count)
}

/// Metrics for a single labeled query.
#[derive(Debug, Clone, Serialize)]
pub struct QueryEvaluation {
    pub query: String,
    pub source: SourceKind,
    pub top_k: Vec<String>,
    pub hits: usize,
    pub relevant: usize,
    pub recall_at_k: f64,
    pub average_precision_at_k: f64,
    pub precision_at_k: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct EvaluationResult {
    pub k: usize,
    pub mean_recall_at_k: f64,
    pub map_at_k: f64,
    pub mean_precision_at_k: f64,
    pub total_queries: usize,
    pub queries: Vec<QueryEvaluation>,
}

pub struct Evaluator<'a> {
    engine: RankingEngine<'a>,
    queries: &'a QuerySet,
    max_results: usize,
}

impl<'a> Evaluator<'a> {
    /// `max_results` is the ranked-list depth requested per query.
    #[must_use]
    pub const fn new(engine: RankingEngine<'a>, queries: &'a QuerySet, max_results: usize) -> Self {
        Self {
            engine,
            queries,
            max_results,
        }
    }

    /// Rank every labeled query in order and aggregate the metrics.
    #[must_use]
    pub fn evaluate(&self, k: usize, providers: &ProvidersConfig) -> EvaluationResult {
        let queries: Vec<QueryEvaluation> = self
            .queries
            .queries()
            .iter()
            .map(|labeled| self.evaluate_one(labeled, k, providers))
            .collect();

        let result = EvaluationResult {
            k,
            mean_recall_at_k: mean(queries.iter().map(|q| q.recall_at_k)),
            map_at_k: mean(queries.iter().map(|q| q.average_precision_at_k)),
            mean_precision_at_k: mean(queries.iter().map(|q| q.precision_at_k)),
            total_queries: queries.len(),
            queries,
        };
        info!(
            k,
            queries = result.total_queries,
            recall = result.mean_recall_at_k,
            map = result.map_at_k,
            "evaluation complete"
        );
        result
    }

    fn evaluate_one(
        &self,
        labeled: &LabeledQuery,
        k: usize,
        providers: &ProvidersConfig,
    ) -> QueryEvaluation {
        let recommendation = self
            .engine
            .recommend(&labeled.query, self.max_results, providers);
        let ranked: Vec<&str> = recommendation
            .assessments
            .iter()
            .map(|assessment| assessment.name.as_str())
            .collect();
        let relevant = labeled.relevant_set();

        let evaluation = QueryEvaluation {
            query: labeled.query.clone(),
            source: recommendation.source.kind,
            top_k: ranked.iter().take(k).map(|name| (*name).to_string()).collect(),
            hits: hits_at_k(&ranked, &relevant, k),
            relevant: relevant.len(),
            recall_at_k: recall_at_k(&ranked, &relevant, k),
            average_precision_at_k: average_precision_at_k(&ranked, &relevant, k),
            precision_at_k: precision_at_k(&ranked, &relevant, k),
        };
        debug!(
            query = %labeled.query,
            hits = evaluation.hits,
            recall = evaluation.recall_at_k,
            "query evaluated"
        );
        evaluation
    }
}
