// Web server — Axum-based read-only JSON API for a 3D front-end.
//
// The dataset loads in the background when the server starts. Until it
// finishes every aggregate endpoint returns zero-valued defaults, and
// /api/status reports `loading: true`. After a failed load the status
// carries the error message and the aggregates stay zero-valued.

use std::sync::Arc;

use anyhow::Result;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::aggregate::AggregateConfig;
use crate::config::Config;
use crate::dataset::session::Session;

pub mod handlers;

/// Shared application state threaded through all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Session>,
    pub aggregate: Arc<AggregateConfig>,
}

impl AppState {
    pub fn new(session: Arc<Session>, aggregate: AggregateConfig) -> Self {
        Self {
            session,
            aggregate: Arc::new(aggregate),
        }
    }
}

/// Start the dataset load, then run the Axum web server until it exits.
pub async fn run_server(config: Config, port: u16, bind: &str) -> Result<()> {
    let session = Session::new(&config.dataset);
    session.start_load(config.record_source()?);

    let state = AppState::new(session, config.aggregate);
    let app = build_router(state);

    let addr = format!("{bind}:{port}");
    info!("misinfo-atlas API listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/api/status", get(handlers::status::get_status))
        .route("/api/overview", get(handlers::aggregates::get_overview))
        .route("/api/platforms", get(handlers::aggregates::get_platforms))
        .route("/api/toxicity", get(handlers::aggregates::get_toxicity))
        .route("/api/scatter", get(handlers::aggregates::get_scatter))
        .route("/api/insights", get(handlers::aggregates::get_insights))
        .route("/api/snapshot", get(handlers::aggregates::get_snapshot))
        .route(
            "/api/geometry/violins",
            get(handlers::geometry::get_violins),
        )
        .route("/api/geometry/points", get(handlers::geometry::get_points));

    Router::new()
        .route("/health", get(health))
        .merge(api)
        .fallback(not_found)
        .layer(
            CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods([axum::http::Method::GET, axum::http::Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        axum::Json(serde_json::json!({ "status": "ok" })),
    )
}

async fn not_found() -> Response {
    api_error(StatusCode::NOT_FOUND, "Not found")
}

/// Typed JSON error response helper.
pub fn api_error(status: StatusCode, message: &str) -> Response {
    (status, axum::Json(serde_json::json!({ "error": message }))).into_response()
}
