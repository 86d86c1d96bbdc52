use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use tracing::info;

use crate::models::AssetCard;
use crate::services;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_returns))
}

/// Computes the full card set fresh on every call. Per-asset failures are
/// contained inside the dashboard service, so this endpoint never errors.
pub async fn get_returns(State(state): State<AppState>) -> Json<Vec<AssetCard>> {
    info!("GET /api/returns - Computing dashboard returns");
    let cards = services::dashboard::load(state.quote_provider.as_ref(), state.assets).await;
    Json(cards)
}
