use serde::Serialize;

/// One dashboard instrument. The catalog is immutable configuration fixed at
/// startup; nothing mutates it at runtime.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Asset {
    pub key: &'static str,
    pub name: &'static str,
    pub ticker: &'static str,
    pub icon: &'static str,
}

/// The three instruments the dashboard tracks, in display order.
pub const ASSETS: [Asset; 3] = [
    Asset {
        key: "sp500",
        name: "S&P 500",
        ticker: "^GSPC",
        icon: "📈",
    },
    Asset {
        key: "intl_small_cap",
        name: "International Small-Cap",
        // Vanguard FTSE All-World ex-US Small-Cap ETF
        ticker: "VSS",
        icon: "🌍",
    },
    Asset {
        key: "us_long_bond",
        name: "US Long-Term Treasuries",
        // iShares 20+ Year Treasury Bond ETF
        ticker: "TLT",
        icon: "📊",
    },
];

pub fn server_port() -> u16 {
    std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080)
}
