//! Timetable generation endpoint.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::generation::{self, GenerationError};
use crate::server::types::ApiErrorType;
use crate::types::AppState;

/// Set to `true` on a successful response when the model's answer had no
/// keys at all, so the UI can tell "nothing generated" from "empty days".
pub const SOURCE_EMPTY_HEADER: &str = "x-schedule-source-empty";

/// Body of `POST /generate`.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    /// Free-text study plan description. A missing field is treated as blank.
    #[serde(default)]
    pub description: String,
}

/// Converts a GenerationError to an API response.
fn generation_error_to_response(error: GenerationError) -> Response {
    let (status, message) = match &error {
        GenerationError::MissingApiKey | GenerationError::UrlError { .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Server configuration error",
        ),
        GenerationError::MissingInput => (StatusCode::BAD_REQUEST, "Missing description"),
        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to generate timetable",
        ),
    };

    ApiErrorType::from((status, message, Some(error.to_string()))).into_response()
}

/// POST /generate
///
/// Generates a one-week timetable from a description. Responds with an
/// object keyed by all seven weekday names.
pub async fn post_generate(
    State(s): State<Arc<AppState>>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Response {
    let body = match payload {
        Ok(Json(body)) => body,
        Err(rejection) => {
            warn!("POST /generate - Rejected request body: {}", rejection.body_text());
            return ApiErrorType::from((
                StatusCode::BAD_REQUEST,
                "Invalid request body",
                Some(rejection.body_text()),
            ))
            .into_response();
        }
    };

    info!(
        "POST /generate - Generating timetable (description_len={})",
        body.description.len()
    );

    match generation::generate_weekly_schedule(&s.generator, &body.description).await {
        Ok(generated) => {
            let mut response = (StatusCode::OK, Json(generated.schedule)).into_response();
            if !generated.source_had_keys {
                response
                    .headers_mut()
                    .insert(
                        HeaderName::from_static(SOURCE_EMPTY_HEADER),
                        HeaderValue::from_static("true"),
                    );
            }
            response
        }
        Err(e) => {
            if e.is_config_error() {
                error!("Server is misconfigured: {}", e);
            } else if e.is_before_request() {
                warn!("Rejected timetable request: {}", e);
            } else {
                error!("Failed to generate timetable: {}", e);
            }
            generation_error_to_response(e)
        }
    }
}
