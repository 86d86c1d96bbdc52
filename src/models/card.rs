use serde::Serialize;

use crate::models::{ReturnClass, ReturnSet};

/// One trailing window of a card, rendered display-ready for the page.
#[derive(Debug, Clone, Serialize)]
pub struct PeriodReturn {
    pub period: &'static str,
    pub label: &'static str,
    pub value: Option<f64>,
    pub display: String,
    pub class: ReturnClass,
}

/// One dashboard card: the asset descriptor plus its computed returns.
#[derive(Debug, Clone, Serialize)]
pub struct AssetCard {
    pub key: &'static str,
    pub name: &'static str,
    pub ticker: &'static str,
    pub icon: &'static str,
    pub returns: ReturnSet,
    pub periods: Vec<PeriodReturn>,
}
