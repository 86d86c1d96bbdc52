use async_trait::async_trait;
use thiserror::Error;

use crate::errors::AppError;

#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("network error: {0}")]
    Network(String),

    #[error("upstream returned HTTP {0}")]
    BadStatus(u16),

    #[error("upstream error: {0}")]
    Upstream(String),

    #[error("parse error: {0}")]
    Parse(String),
}

impl From<QuoteError> for AppError {
    fn from(value: QuoteError) -> Self {
        match value {
            QuoteError::Network(details) => AppError::Transport { details },
            QuoteError::BadStatus(status) => AppError::UpstreamStatus { status },
            QuoteError::Upstream(description) => AppError::UpstreamData(description),
            QuoteError::Parse(details) => AppError::MalformedPayload { details },
        }
    }
}

/// Seam between the HTTP layer and whichever quote API backs the dashboard.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Fetches the chart document for one ticker. The returned value is the
    /// upstream JSON, already vetted for transport, status, and parse
    /// failures as well as upstream-reported errors.
    async fn fetch_chart(&self, ticker: &str) -> Result<serde_json::Value, QuoteError>;
}
