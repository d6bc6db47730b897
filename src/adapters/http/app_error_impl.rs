use crate::app_error::AppError;
use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.is_client_error() {
            tracing::warn!(error = %self, "Request rejected");
            return error_resp(StatusCode::BAD_REQUEST, &self.to_string());
        }

        // Log the full error; the caller only sees a generic message.
        tracing::error!(error = ?self, "Request failed");
        error_resp(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
    }
}

fn error_resp(status: StatusCode, message: &str) -> Response {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}
