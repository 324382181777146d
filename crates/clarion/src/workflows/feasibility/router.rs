use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use chrono::Utc;

use super::domain::ProjectSnapshot;
use super::engine::ScenarioEngine;
use super::external::GeneratedScenarioSet;
use super::report::FeasibilityReport;
use super::results::ScenarioResults;
use crate::error::AppError;

/// Router builder exposing scenario generation and external substitution.
pub fn feasibility_router(engine: Arc<ScenarioEngine>) -> Router {
    Router::new()
        .route("/api/v1/feasibility/scenarios", post(scenarios_handler))
        .route("/api/v1/feasibility/external", post(external_handler))
        .with_state(engine)
}

pub(crate) async fn scenarios_handler(
    State(engine): State<Arc<ScenarioEngine>>,
    body: String,
) -> Result<Json<FeasibilityReport>, AppError> {
    let snapshot = ProjectSnapshot::from_reader(body.as_bytes())?;
    let results = engine.generate(&snapshot);
    Ok(Json(FeasibilityReport::new(&snapshot, results)))
}

/// Accepts the generator's raw answer, fenced or not.
pub(crate) async fn external_handler(
    State(engine): State<Arc<ScenarioEngine>>,
    body: String,
) -> Result<Json<ScenarioResults>, AppError> {
    let set = GeneratedScenarioSet::from_response_text(&body)?;
    Ok(Json(set.into_results(engine.config(), Utc::now())?))
}
