// Aggregate endpoints.
//
// GET /api/overview   — global summary cards
// GET /api/platforms  — one summary per configured platform
// GET /api/toxicity   — density profiles for the violin chart
// GET /api/scatter    — scatter sample, optional ?limit= (capped by config)
// GET /api/insights   — key findings
// GET /api/snapshot   — all of the above in one document
//
// Each request recomputes from the current row set.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crate::aggregate::insights::insights;
use crate::web::AppState;

#[derive(Deserialize, Default)]
pub struct ScatterQuery {
    /// Sample size; never more than the configured limit
    pub limit: Option<usize>,
}

pub async fn get_overview(State(state): State<AppState>) -> impl IntoResponse {
    let dataset = state.session.read().await;
    Json(dataset.total_stats())
}

pub async fn get_platforms(State(state): State<AppState>) -> impl IntoResponse {
    let dataset = state.session.read().await;
    Json(dataset.platform_stats(&state.aggregate))
}

pub async fn get_toxicity(State(state): State<AppState>) -> impl IntoResponse {
    let dataset = state.session.read().await;
    Json(dataset.toxicity_distribution(&state.aggregate))
}

pub async fn get_scatter(
    State(state): State<AppState>,
    Query(params): Query<ScatterQuery>,
) -> impl IntoResponse {
    let mut config = (*state.aggregate).clone();
    if let Some(limit) = params.limit {
        config.scatter_limit = limit.min(config.scatter_limit);
    }

    let dataset = state.session.read().await;
    Json(dataset.scatter_data(&config))
}

pub async fn get_insights(State(state): State<AppState>) -> impl IntoResponse {
    let dataset = state.session.read().await;
    let overview = dataset.total_stats();
    let platforms = dataset.platform_stats(&state.aggregate);
    let scatter = dataset.scatter_data(&state.aggregate);
    Json(insights(&overview, &platforms, &scatter))
}

pub async fn get_snapshot(State(state): State<AppState>) -> impl IntoResponse {
    let dataset = state.session.read().await;
    Json(dataset.snapshot(&state.aggregate))
}
