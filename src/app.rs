use axum::Router;
use http::header::CONTENT_TYPE;
use http::Method;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::routes::{dashboard, health, quotes};
use crate::state::AppState;

pub fn create_app(state: AppState) -> Router {
    // Same policy the page relied on when the API lived on another origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);

    Router::<AppState>::new()
        .nest("/health", health::router())
        .nest("/api/quote", quotes::router())
        .nest("/api/returns", dashboard::router())
        // static assets are served straight from the working directory
        .fallback_service(ServeDir::new("."))
        .layer(cors)
        .with_state(state)
}
