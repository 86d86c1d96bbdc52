use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to reach quote API: {details}")]
    Transport { details: String },
    #[error("quote API returned status {status}")]
    UpstreamStatus { status: u16 },
    #[error("quote API error: {0}")]
    UpstreamData(String),
    #[error("failed to parse quote API response: {details}")]
    MalformedPayload { details: String },
    #[error("no valid price data found")]
    NoValidData,
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            AppError::Transport { details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Failed to fetch data from quote API",
                    "details": details,
                })),
            )
                .into_response(),
            AppError::UpstreamStatus { status } => {
                // relay whatever status the upstream answered with
                let code = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
                (
                    code,
                    Json(json!({ "error": format!("Quote API error: {}", status) })),
                )
                    .into_response()
            }
            AppError::UpstreamData(description) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": description }))).into_response()
            }
            AppError::MalformedPayload { details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Failed to parse response",
                    "details": details,
                })),
            )
                .into_response(),
            AppError::NoValidData => (
                StatusCode::BAD_GATEWAY,
                Json(json!({ "error": "No valid price data found" })),
            )
                .into_response(),
        }
    }
}
