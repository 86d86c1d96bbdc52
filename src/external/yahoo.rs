use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::Deserialize;
use url::Url;

use crate::errors::AppError;
use crate::external::quote_provider::{QuoteError, QuoteProvider};

const CHART_BASE: &str = "https://query1.finance.yahoo.com/v8/finance/chart/";

// The default path-segment set leaves '^' alone, but index tickers like
// ^GSPC must reach Yahoo as %5EGSPC.
const TICKER_ENCODE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'#')
    .add(b'?')
    .add(b'{')
    .add(b'}')
    .add(b'%')
    .add(b'/')
    .add(b'^');

/// Yahoo Finance v8 chart client. No API key required.
pub struct YahooQuoteClient {
    client: reqwest::Client,
}

impl YahooQuoteClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("Mozilla/5.0 (compatible; Marketpulse/0.1)")
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
        }
    }

    fn chart_url(ticker: &str) -> Result<Url, QuoteError> {
        let encoded = utf8_percent_encode(ticker, TICKER_ENCODE);
        Url::parse(&format!("{}{}", CHART_BASE, encoded))
            .map_err(|e| QuoteError::Parse(e.to_string()))
    }
}

impl Default for YahooQuoteClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuoteProvider for YahooQuoteClient {
    async fn fetch_chart(&self, ticker: &str) -> Result<serde_json::Value, QuoteError> {
        let url = Self::chart_url(ticker)?;

        let resp = self
            .client
            .get(url)
            .query(&[("interval", "1d"), ("range", "6mo")])
            .send()
            .await
            .map_err(|e| QuoteError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(QuoteError::BadStatus(resp.status().as_u16()));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| QuoteError::Network(e.to_string()))?;
        if body.trim().is_empty() {
            return Err(QuoteError::Parse("empty response from quote API".to_string()));
        }

        let payload: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| QuoteError::Parse(e.to_string()))?;

        if let Some(error) = payload.pointer("/chart/error").filter(|e| !e.is_null()) {
            let description = error
                .get("description")
                .and_then(|d| d.as_str())
                .unwrap_or("quote API error")
                .to_string();
            return Err(QuoteError::Upstream(description));
        }

        Ok(payload)
    }
}

// Minimal payload structs (only what the return engine needs)
#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: Chart,
}

#[derive(Debug, Deserialize)]
struct Chart {
    result: Option<Vec<ChartResult>>,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    #[serde(default)]
    timestamp: Vec<Option<i64>>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Vec<Quote>,
}

#[derive(Debug, Deserialize)]
struct Quote {
    #[serde(default)]
    close: Vec<Option<f64>>,
}

/// Pulls the index-aligned timestamp/close arrays out of a vetted chart
/// document. Both arrays may contain nulls; the normalizer deals with those.
pub fn quote_arrays(
    payload: serde_json::Value,
) -> Result<(Vec<Option<i64>>, Vec<Option<f64>>), AppError> {
    let parsed: ChartResponse = serde_json::from_value(payload)
        .map_err(|e| AppError::MalformedPayload { details: e.to_string() })?;

    let result = parsed
        .chart
        .result
        .and_then(|r| r.into_iter().next())
        .ok_or_else(|| AppError::MalformedPayload {
            details: "missing chart result".to_string(),
        })?;

    let quote = result
        .indicators
        .quote
        .into_iter()
        .next()
        .ok_or_else(|| AppError::MalformedPayload {
            details: "missing quote block".to_string(),
        })?;

    Ok((result.timestamp, quote.close))
}
