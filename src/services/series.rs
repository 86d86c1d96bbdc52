use chrono::DateTime;

use crate::errors::AppError;
use crate::models::Observation;

/// Builds a clean, time-ordered series from the raw index-aligned arrays.
///
/// A row is kept only when both its timestamp and its close are present.
/// Raw timestamps are epoch seconds. The result is sorted ascending (stable,
/// so same-instant rows keep their input order) even though upstream already
/// delivers in order.
pub fn normalize(
    timestamps: &[Option<i64>],
    closes: &[Option<f64>],
) -> Result<Vec<Observation>, AppError> {
    let mut series: Vec<Observation> = timestamps
        .iter()
        .zip(closes.iter())
        .filter_map(|(ts, close)| match (ts, close) {
            (Some(ts), Some(close)) => {
                DateTime::from_timestamp(*ts, 0).map(|at| Observation { at, price: *close })
            }
            _ => None,
        })
        .collect();

    if series.is_empty() {
        return Err(AppError::NoValidData);
    }

    series.sort_by_key(|obs| obs.at);
    Ok(series)
}
