//! Wire shape for recommendation responses.

use serde::Serialize;

use crate::catalog::Assessment;
use crate::ranking::{Recommendation, RecommendationSource};

/// An assessment as presented to API consumers: vendor suffix removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRecommendation {
    pub name: String,
    pub url: String,
    pub remote_testing_support: bool,
    #[serde(rename = "adaptiveIRTSupport")]
    pub adaptive_irt_support: bool,
    pub duration: String,
    pub test_type: String,
}

impl From<&Assessment> for ApiRecommendation {
    fn from(assessment: &Assessment) -> Self {
        Self {
            name: assessment.display_name().to_string(),
            url: assessment.url.clone(),
            remote_testing_support: assessment.remote_testing_support,
            adaptive_irt_support: assessment.adaptive_irt_support,
            duration: assessment.duration.clone(),
            test_type: assessment.test_type.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse {
    pub recommendations: Vec<ApiRecommendation>,
    pub query: String,
    pub source: RecommendationSource,
}

impl ApiResponse {
    #[must_use]
    pub fn new(query: impl Into<String>, recommendation: &Recommendation) -> Self {
        Self {
            recommendations: recommendation
                .assessments
                .iter()
                .map(ApiRecommendation::from)
                .collect(),
            query: query.into(),
            source: recommendation.source.clone(),
        }
    }
}
