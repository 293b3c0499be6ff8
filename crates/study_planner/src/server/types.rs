use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Error body returned by every failing endpoint: `{ "error": ..., "detail": ... }`.
#[derive(Debug, Serialize)]
pub struct ApiErrorType {
    #[serde(skip)]
    status: StatusCode,
    error: String,
    detail: String,
}

impl From<(StatusCode, &str, Option<String>)> for ApiErrorType {
    fn from((status, error, detail): (StatusCode, &str, Option<String>)) -> Self {
        Self {
            status,
            error: error.to_string(),
            detail: detail.unwrap_or_else(|| "No additional details".to_string()),
        }
    }
}

impl IntoResponse for ApiErrorType {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}
