use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use super::domain::{LikertPoint, Question, Response, ResponseSet, LIKERT_SCALE};
use super::scoring::{AssessmentResults, ScoringEngine};
use crate::error::AppError;

/// Catalog payload handed to front ends. The answer key stays server side.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogView {
    pub questions: Vec<Question>,
    pub likert_scale: Vec<LikertPoint>,
}

/// Body of a scoring request. Entries stay raw JSON until scoring so one
/// malformed answer cannot reject the rest of the batch.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ScoreRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub responses: Vec<Value>,
}

impl ScoreRequest {
    /// Entries that do not read as `{ questionId, value }` are skipped.
    pub fn into_response_set(self) -> ResponseSet {
        self.responses
            .into_iter()
            .enumerate()
            .filter_map(
                |(index, entry)| match serde_json::from_value::<Response>(entry) {
                    Ok(response) => Some(response),
                    Err(error) => {
                        warn!(index, %error, "skipping malformed response entry");
                        None
                    }
                },
            )
            .collect()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Router builder exposing the catalog and the scoring endpoint.
pub fn assessment_router(engine: Arc<ScoringEngine>) -> Router {
    Router::new()
        .route("/api/v1/assessment/questions", get(catalog_handler))
        .route("/api/v1/assessment/results", post(results_handler))
        .with_state(engine)
}

pub(crate) async fn catalog_handler(State(engine): State<Arc<ScoringEngine>>) -> Json<CatalogView> {
    Json(CatalogView {
        questions: engine.catalog().questions().to_vec(),
        likert_scale: LIKERT_SCALE.to_vec(),
    })
}

/// Bodies that are not a JSON object map to `AppError::Input` (400).
pub(crate) async fn results_handler(
    State(engine): State<Arc<ScoringEngine>>,
    body: Bytes,
) -> Result<Json<AssessmentResults>, AppError> {
    let request: ScoreRequest = serde_json::from_slice(&body)?;
    let submitted = request.responses.len();
    let responses = request.into_response_set();
    let results = engine.score(&responses);

    info!(
        submitted,
        accepted = responses.len(),
        confidence = results.confidence_score,
        recommendation = results.recommendation.label(),
        "assessment results computed"
    );

    Ok(Json(results))
}
