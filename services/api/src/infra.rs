use career_fit::error::AppError;
use career_fit::workflows::assessment::{CatalogDocument, Response, ResponseSet, ScoringEngine};
use metrics_exporter_prometheus::PrometheusHandle;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Build the scoring engine from a catalog document, or the built-in catalog when no path is set.
pub(crate) fn load_engine(catalog_path: Option<&Path>) -> Result<ScoringEngine, AppError> {
    match catalog_path {
        Some(path) => {
            let (catalog, answer_key) = CatalogDocument::load_from_path(path)?;
            info!(
                path = %path.display(),
                questions = catalog.len(),
                "loaded assessment catalog"
            );
            Ok(ScoringEngine::new(catalog, answer_key))
        }
        None => Ok(ScoringEngine::standard()),
    }
}

pub(crate) fn read_responses<R: Read>(reader: R) -> Result<ResponseSet, AppError> {
    let responses: Vec<Response> = serde_json::from_reader(reader)?;
    Ok(responses.into_iter().collect())
}

pub(crate) fn read_responses_from_path(path: &Path) -> Result<ResponseSet, AppError> {
    let file = File::open(path)?;
    read_responses(BufReader::new(file))
}
