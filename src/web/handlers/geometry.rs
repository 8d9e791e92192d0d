// Scene geometry endpoints.
//
// GET /api/geometry/violins — outline, extrusion and placement per platform
// GET /api/geometry/points  — position, size and color per scatter point

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::geometry::{scatter_geometry, violin_geometry};
use crate::web::AppState;

pub async fn get_violins(State(state): State<AppState>) -> impl IntoResponse {
    let dataset = state.session.read().await;
    let profiles = dataset.toxicity_distribution(&state.aggregate);
    Json(violin_geometry(&profiles))
}

pub async fn get_points(State(state): State<AppState>) -> impl IntoResponse {
    let dataset = state.session.read().await;
    let points = dataset.scatter_data(&state.aggregate);
    Json(scatter_geometry(&points))
}
