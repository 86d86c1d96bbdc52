mod app;
mod config;
mod errors;
mod external;
mod logging;
mod models;
mod routes;
mod services;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::external::yahoo::YahooQuoteClient;
use crate::logging::LoggingConfig;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging FIRST
    logging::init_logging(LoggingConfig::from_env())?;

    let state = AppState {
        quote_provider: Arc::new(YahooQuoteClient::new()),
        assets: &config::ASSETS,
    };
    let app = app::create_app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config::server_port()));
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("🚀 Marketpulse backend running at http://{}/", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
