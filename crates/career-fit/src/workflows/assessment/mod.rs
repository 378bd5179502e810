//! Career-fit self assessment: question catalog, scoring engine, and the
//! guidance derived from a completed response set.

pub mod catalog;
pub mod domain;
pub mod router;
pub mod scoring;
pub mod session;

#[cfg(test)]
mod tests;

pub use catalog::{AnswerKey, CatalogDocument, CatalogError, QuestionCatalog};
pub use domain::{
    LikertPoint, Question, QuestionId, QuestionKind, Response, ResponseSet, ResponseValue,
    Section, WiscarDimension, LIKERT_SCALE,
};
pub use router::{assessment_router, CatalogView, ScoreRequest};
pub use scoring::{
    compute_results, AssessmentResults, Recommendation, ScoringEngine, SectionScores,
    WiscarScores,
};
pub use session::{AssessmentSession, SessionError, SessionStep};
