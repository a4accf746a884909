//! Heuristic relevance scoring
//!
//! An additive point system over lexical matches, duration constraints and
//! fixed skill/role vocabularies. Scores are unbounded integers; only their
//! relative order matters and negative values are a real penalty.

pub mod duration;
pub mod rules;

use serde::Serialize;

use crate::catalog::Assessment;

use self::rules::{SynonymRule, MIN_TOKEN_CHARS, TECHNICAL_TYPE};

/// Per-rule contribution to a score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub duration_mention: i32,
    pub duration_ceiling: i32,
    pub duration_range: i32,
    pub name_terms: i32,
    pub type_terms: i32,
    pub skill_synonyms: i32,
    pub role_synonyms: i32,
    pub role_type_pairs: i32,
    pub job_description: i32,
}

impl ScoreBreakdown {
    #[must_use]
    pub const fn total(&self) -> i32 {
        self.duration_mention
            + self.duration_ceiling
            + self.duration_range
            + self.name_terms
            + self.type_terms
            + self.skill_synonyms
            + self.role_synonyms
            + self.role_type_pairs
            + self.job_description
    }

    /// Non-zero terms as `(label, points)` pairs, in rule order.
    #[must_use]
    pub fn terms(&self) -> Vec<(&'static str, i32)> {
        [
            ("duration mention", self.duration_mention),
            ("duration ceiling", self.duration_ceiling),
            ("duration range", self.duration_range),
            ("name terms", self.name_terms),
            ("type terms", self.type_terms),
            ("skill synonyms", self.skill_synonyms),
            ("role synonyms", self.role_synonyms),
            ("role/type pairs", self.role_type_pairs),
            ("job description", self.job_description),
        ]
        .into_iter()
        .filter(|(_, points)| *points != 0)
        .collect()
    }
}

/// Relevance of `assessment` to `query`.
#[must_use]
pub fn score(query: &str, assessment: &Assessment) -> i32 {
    explain(query, assessment).total()
}

/// Score `assessment` against `query`, keeping each rule's contribution.
#[must_use]
pub fn explain(query: &str, assessment: &Assessment) -> ScoreBreakdown {
    let query_lower = query.to_lowercase();
    let name = assessment.name.to_lowercase();
    let test_type = assessment.test_type.to_lowercase();
    let minutes = assessment.duration_minutes();

    let mut breakdown = ScoreBreakdown::default();

    let duration = assessment.duration.to_lowercase();
    if !duration.is_empty() && query_lower.contains(&duration) {
        breakdown.duration_mention = rules::DURATION_MENTION;
    }

    if let (Some(ceiling), Some(minutes)) = (duration::ceiling_minutes(&query_lower), minutes) {
        breakdown.duration_ceiling = if minutes <= ceiling {
            rules::DURATION_WITHIN_CEILING
        } else {
            rules::DURATION_OVER_CEILING
        };
    }

    // Independent of the ceiling check: a query matching both phrases is
    // credited twice.
    if let (Some((low, high)), Some(minutes)) = (duration::range_minutes(&query_lower), minutes) {
        if (low..=high).contains(&minutes) {
            breakdown.duration_range = rules::DURATION_IN_RANGE;
        }
    }

    for token in query_lower
        .split_whitespace()
        .filter(|token| token.chars().count() > MIN_TOKEN_CHARS)
    {
        if name.contains(token) {
            breakdown.name_terms += rules::NAME_TERM;
        }
        if test_type.contains(token) {
            breakdown.type_terms += rules::TYPE_TERM;
        }

        breakdown.skill_synonyms += synonym_points(rules::TECHNICAL_SKILLS, token, |skill| {
            name.contains(skill) || test_type.contains(TECHNICAL_TYPE)
        }) * rules::SKILL_SYNONYM;

        breakdown.role_synonyms += synonym_points(rules::ROLES, token, |role| {
            name.contains(role) || test_type.contains(role)
        }) * rules::ROLE_SYNONYM;
    }

    breakdown.role_type_pairs = rules::ROLE_TYPE_PAIRS
        .iter()
        .filter(|pair| {
            query_lower.contains(pair.query_keyword) && test_type.contains(pair.type_fragment)
        })
        .map(|pair| pair.bonus)
        .sum();

    if query.chars().count() > rules::JOB_DESCRIPTION_CHARS {
        breakdown.job_description = job_description_points(&query_lower, &name, &test_type);
    }

    breakdown
}

/// Number of rules whose synonyms include `token` and whose keyword is
/// accepted by `applies`.
fn synonym_points(table: &[SynonymRule], token: &str, applies: impl Fn(&str) -> bool) -> i32 {
    let hits = table
        .iter()
        .filter(|rule| rule.matches_token(token) && applies(rule.keyword))
        .count();
    i32::try_from(hits).unwrap_or(i32::MAX)
}

fn job_description_points(query: &str, name: &str, test_type: &str) -> i32 {
    let languages: i32 = rules::JD_LANGUAGES
        .iter()
        .filter(|lang| query.contains(*lang) && name.contains(*lang))
        .map(|_| rules::JD_LANGUAGE)
        .sum();

    let frameworks: i32 = rules::JD_FRAMEWORKS
        .iter()
        .filter(|fw| {
            query.contains(*fw) && (name.contains(*fw) || test_type.contains(TECHNICAL_TYPE))
        })
        .map(|_| rules::JD_FRAMEWORK)
        .sum();

    let roles: i32 = rules::JD_ROLES
        .iter()
        .filter(|role| query.contains(*role) && (name.contains(*role) || test_type.contains(*role)))
        .map(|_| rules::JD_ROLE)
        .sum();

    languages + frameworks + roles
}
