use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use tracing::{error, info};

use crate::errors::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/:ticker", get(relay_chart))
}

/// Relays the upstream chart document for one ticker, status and all. Axum
/// percent-decodes the path param, so "%5EGSPC" arrives here as "^GSPC".
pub async fn relay_chart(
    Path(ticker): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, AppError> {
    info!("GET /api/quote/{} - Relaying chart payload", ticker);
    let payload = state
        .quote_provider
        .fetch_chart(&ticker)
        .await
        .map_err(|e| {
            error!("Quote relay failed for {}: {}", ticker, e);
            AppError::from(e)
        })?;
    Ok(Json(payload))
}
