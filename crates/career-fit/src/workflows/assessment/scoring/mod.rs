mod guidance;
mod policy;
mod rules;

pub use policy::{Recommendation, IMPROVEMENT_THRESHOLD, MODERATE_THRESHOLD, STRONG_THRESHOLD};
pub use rules::{
    confidence_score, psychometric_score, technical_score, wiscar_scores, WiscarScores,
};

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::catalog::{AnswerKey, QuestionCatalog};
use super::domain::{Question, ResponseSet};

/// Percentages for the three rubrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionScores {
    pub psychometric: u8,
    pub technical: u8,
    pub wiscar: WiscarScores,
}

/// Verdict derived from one complete response set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResults {
    pub scores: SectionScores,
    pub confidence_score: u8,
    pub recommendation: Recommendation,
    pub insights: Vec<String>,
    pub next_steps: Vec<String>,
    pub career_alignment: Vec<String>,
}

/// Score a response set against an ordered question list.
///
/// Total over its inputs: missing, malformed, or unknown responses contribute
/// zero (Likert) or count as incorrect (multiple choice).
pub fn compute_results(
    questions: &[Question],
    answer_key: &AnswerKey,
    responses: &ResponseSet,
) -> AssessmentResults {
    let psychometric = psychometric_score(questions, responses);
    let technical = technical_score(questions, answer_key, responses);
    let wiscar = wiscar_scores(questions, responses);
    let confidence = confidence_score(psychometric, technical, &wiscar);
    let recommendation = Recommendation::from_confidence(confidence);

    debug!(
        psychometric,
        technical,
        confidence,
        recommendation = recommendation.label(),
        answered = responses.len(),
        "assessment scored"
    );

    AssessmentResults {
        scores: SectionScores {
            psychometric,
            technical,
            wiscar,
        },
        confidence_score: confidence,
        recommendation,
        insights: guidance::generate_insights(psychometric, technical, &wiscar),
        next_steps: guidance::generate_next_steps(recommendation, psychometric, technical),
        career_alignment: guidance::career_alignment(confidence),
    }
}

/// Stateless scorer bound to one catalog and answer key.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    catalog: Arc<QuestionCatalog>,
    answer_key: Arc<AnswerKey>,
}

impl ScoringEngine {
    pub fn new(catalog: QuestionCatalog, answer_key: AnswerKey) -> Self {
        Self {
            catalog: Arc::new(catalog),
            answer_key: Arc::new(answer_key),
        }
    }

    pub fn standard() -> Self {
        Self::new(QuestionCatalog::standard(), AnswerKey::standard())
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    pub fn answer_key(&self) -> &AnswerKey {
        &self.answer_key
    }

    pub fn score(&self, responses: &ResponseSet) -> AssessmentResults {
        compute_results(self.catalog.questions(), &self.answer_key, responses)
    }
}
