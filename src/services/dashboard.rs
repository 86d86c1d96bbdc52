use futures::future::join_all;
use tracing::{info, warn};

use crate::config::Asset;
use crate::errors::AppError;
use crate::external::quote_provider::QuoteProvider;
use crate::external::yahoo;
use crate::models::{AssetCard, Period, PeriodReturn, ReturnSet};
use crate::services::{format, returns, series};

/// Loads the full dashboard: one card per configured asset, catalog order.
///
/// All fetches run concurrently. A failure on one asset degrades that card
/// to all-absent returns instead of failing the batch.
pub async fn load(provider: &dyn QuoteProvider, assets: &[Asset]) -> Vec<AssetCard> {
    let fetches = assets.iter().map(|asset| async move {
        match asset_returns(provider, asset.ticker).await {
            Ok(returns) => (asset, returns),
            Err(e) => {
                warn!("Degrading {} ({}) to N/A returns: {}", asset.name, asset.ticker, e);
                (asset, ReturnSet::absent())
            }
        }
    });

    // join_all keeps input order, so cards come back in catalog order
    join_all(fetches)
        .await
        .into_iter()
        .map(|(asset, returns)| build_card(asset, returns))
        .collect()
}

/// Fetch, normalize, and compute trailing returns for one ticker.
async fn asset_returns(
    provider: &dyn QuoteProvider,
    ticker: &str,
) -> Result<ReturnSet, AppError> {
    let payload = provider.fetch_chart(ticker).await?;
    let (timestamps, closes) = yahoo::quote_arrays(payload)?;
    let series = series::normalize(&timestamps, &closes)?;
    info!("{}: {} valid observations", ticker, series.len());
    Ok(returns::trailing_returns(&series))
}

fn build_card(asset: &Asset, returns: ReturnSet) -> AssetCard {
    let periods = Period::ALL
        .iter()
        .map(|&period| {
            let value = returns.get(period);
            let formatted = format::format_return(value);
            PeriodReturn {
                period: period.key(),
                label: period.label(),
                value,
                display: formatted.display,
                class: formatted.class,
            }
        })
        .collect();

    AssetCard {
        key: asset.key,
        name: asset.name,
        ticker: asset.ticker,
        icon: asset.icon,
        returns,
        periods,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;

    use crate::external::quote_provider::QuoteError;
    use crate::models::ReturnClass;

    // 2024-01-01, 2024-03-01, 2024-04-01 (all midnight UTC)
    const JAN_1: i64 = 1_704_067_200;
    const MAR_1: i64 = 1_709_251_200;
    const APR_1: i64 = 1_711_929_600;

    struct StubProvider;

    #[async_trait]
    impl QuoteProvider for StubProvider {
        async fn fetch_chart(&self, ticker: &str) -> Result<serde_json::Value, QuoteError> {
            if ticker == "DOWN" {
                return Err(QuoteError::Network("connection refused".to_string()));
            }
            Ok(json!({
                "chart": {
                    "result": [{
                        "timestamp": [JAN_1, MAR_1, APR_1],
                        "indicators": { "quote": [{ "close": [100.0, 110.0, 121.0] }] }
                    }],
                    "error": null
                }
            }))
        }
    }

    const TEST_ASSETS: [Asset; 3] = [
        Asset { key: "a", name: "Asset A", ticker: "AAA", icon: "📈" },
        Asset { key: "b", name: "Asset B", ticker: "DOWN", icon: "🌍" },
        Asset { key: "c", name: "Asset C", ticker: "CCC", icon: "📊" },
    ];

    #[tokio::test]
    async fn test_cards_follow_catalog_order_not_completion_order() {
        let cards = load(&StubProvider, &TEST_ASSETS).await;
        let keys: Vec<&str> = cards.iter().map(|c| c.key).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_failing_asset_degrades_without_aborting_batch() {
        let cards = load(&StubProvider, &TEST_ASSETS).await;

        assert_eq!(cards[1].returns, ReturnSet::absent());
        for period in &cards[1].periods {
            assert_eq!(period.display, "N/A");
            assert_eq!(period.class, ReturnClass::Neutral);
        }

        // neighbors still computed
        assert!(cards[0].returns.one_month.is_some());
        assert!(cards[2].returns.one_month.is_some());
    }

    #[tokio::test]
    async fn test_healthy_asset_card_is_display_ready() {
        let cards = load(&StubProvider, &TEST_ASSETS).await;
        let card = &cards[0];

        // latest Apr 1 @ 121; 1-month base Mar 1 @ 110 -> +10.00%
        assert_eq!(card.periods[0].period, "1month");
        assert_eq!(card.periods[0].display, "+10.00%");
        assert_eq!(card.periods[0].class, ReturnClass::Positive);
        // 3-month base Jan 1 @ 100 -> +21.00%
        assert_eq!(card.periods[1].display, "+21.00%");
        // 6-month target predates the series
        assert_eq!(card.periods[2].display, "N/A");
    }
}
