use serde::Serialize;

/// Trailing windows the dashboard reports, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    OneMonth,
    ThreeMonth,
    SixMonth,
}

impl Period {
    pub const ALL: [Period; 3] = [Period::OneMonth, Period::ThreeMonth, Period::SixMonth];

    /// Calendar months the window extends back from the series' latest date.
    pub fn months(self) -> u32 {
        match self {
            Period::OneMonth => 1,
            Period::ThreeMonth => 3,
            Period::SixMonth => 6,
        }
    }

    /// Wire key used in JSON payloads.
    pub fn key(self) -> &'static str {
        match self {
            Period::OneMonth => "1month",
            Period::ThreeMonth => "3month",
            Period::SixMonth => "6month",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Period::OneMonth => "1M",
            Period::ThreeMonth => "3M",
            Period::SixMonth => "6M",
        }
    }
}

/// Percentage returns per trailing window. `None` means the window could not
/// be computed (no base price on or before the target date, or a zero base).
/// Built fresh per calculation and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Default)]
pub struct ReturnSet {
    #[serde(rename = "1month")]
    pub one_month: Option<f64>,
    #[serde(rename = "3month")]
    pub three_month: Option<f64>,
    #[serde(rename = "6month")]
    pub six_month: Option<f64>,
}

impl ReturnSet {
    /// All windows absent; the degraded shape used when an asset's fetch fails.
    pub fn absent() -> Self {
        Self::default()
    }

    pub fn get(&self, period: Period) -> Option<f64> {
        match period {
            Period::OneMonth => self.one_month,
            Period::ThreeMonth => self.three_month,
            Period::SixMonth => self.six_month,
        }
    }

    pub(crate) fn set(&mut self, period: Period, value: Option<f64>) {
        match period {
            Period::OneMonth => self.one_month = value,
            Period::ThreeMonth => self.three_month = value,
            Period::SixMonth => self.six_month = value,
        }
    }
}

/// Qualitative sign classification used for styling on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReturnClass {
    Positive,
    Negative,
    Neutral,
}
