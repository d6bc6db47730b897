//! Waitlist signup route.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use serde::{Deserialize, Serialize};

use crate::{
    adapters::http::app_state::AppState,
    app_error::{AppError, AppResult},
};

#[derive(Deserialize)]
struct JoinWaitlistPayload {
    #[serde(default)]
    email: Option<String>,
}

#[derive(Serialize)]
struct JoinWaitlistResponse {
    success: bool,
    message: &'static str,
}

/// POST /api/v1/waitlist
/// Validates the email, optionally checks its domain for MX records, and stores it.
async fn join_waitlist(
    State(app_state): State<AppState>,
    payload: Result<Json<JoinWaitlistPayload>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(payload) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected waitlist payload");
        AppError::InvalidBody
    })?;

    let entry = app_state
        .waitlist_use_cases
        .join(payload.email.as_deref())
        .await?;

    tracing::info!(entry_id = entry.id, "Added to waitlist");

    Ok((
        StatusCode::CREATED,
        Json(JoinWaitlistResponse {
            success: true,
            message: "Added to waitlist",
        }),
    ))
}

pub(crate) fn router() -> Router<AppState> {
    Router::new().route("/waitlist", post(join_waitlist))
}
