//! Liveness endpoints. Neither touches the database or DNS.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::adapters::http::app_state::AppState;

#[derive(Serialize)]
struct RootStatusResponse {
    status: &'static str,
    service: String,
    version: &'static str,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    message: String,
}

/// GET /
/// Base uptime probe for load balancers and hosting platforms.
async fn root_status(State(app_state): State<AppState>) -> Json<RootStatusResponse> {
    Json(RootStatusResponse {
        status: "ok",
        service: app_state.config.service_name.clone(),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /api/v1/health
async fn health(State(app_state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        message: format!("{} is operational", app_state.config.service_name),
    })
}

pub(crate) fn root_router() -> Router<AppState> {
    Router::new().route("/", get(root_status))
}

pub(crate) fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
