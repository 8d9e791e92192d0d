// GET /api/status — load state of the dataset.
//
// `loading` and `error` mirror the session's status pair so the front-end
// can show a spinner or an error banner without inspecting the aggregates.
// `status` carries the same state as `{ "state": ..., "message": ... }`.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::web::AppState;

pub async fn get_status(State(state): State<AppState>) -> impl IntoResponse {
    let dataset = state.session.read().await;

    Json(serde_json::json!({
        "status": dataset.status(),
        "loading": dataset.loading(),
        "error": dataset.error(),
        "source": dataset.source(),
        "rows": dataset.rows().len(),
        "dropped": dataset.dropped_count(),
        "loadedAt": dataset.loaded_at(),
        "platforms": state.aggregate.platforms,
    }))
}
