use chrono::{DateTime, Months, Utc};

use crate::models::{Observation, Period, ReturnSet};

/// Computes trailing percentage returns as of the series' own latest
/// observation. Wall-clock time is deliberately not consulted, so the same
/// series always yields the same returns.
///
/// Expects the series sorted ascending (what `series::normalize` produces).
pub fn trailing_returns(series: &[Observation]) -> ReturnSet {
    let mut returns = ReturnSet::absent();

    let Some(latest) = series.last() else {
        return returns;
    };

    for period in Period::ALL {
        // Calendar-aware subtraction: Mar 31 minus one month clamps to the
        // end of February, matching how the page computed target dates.
        let base = latest
            .at
            .checked_sub_months(Months::new(period.months()))
            .and_then(|target| closest_on_or_before(series, target))
            .map(|obs| obs.price);

        returns.set(period, percentage_return(base, latest.price));
    }

    returns
}

/// The observation nearest to `target` without being after it, or `None`
/// when every observation is later than the target. Among same-instant
/// observations the first wins (strict improvement only).
fn closest_on_or_before(
    series: &[Observation],
    target: DateTime<Utc>,
) -> Option<&Observation> {
    let mut closest: Option<&Observation> = None;

    for obs in series {
        if obs.at > target {
            continue;
        }
        if closest.map_or(true, |best| obs.at > best.at) {
            closest = Some(obs);
        }
    }

    closest
}

fn percentage_return(base: Option<f64>, current: f64) -> Option<f64> {
    match base {
        Some(base) if base != 0.0 => Some((current - base) / base * 100.0),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn obs(y: i32, m: u32, d: u32, price: f64) -> Observation {
        Observation {
            at: Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap(),
            price,
        }
    }

    #[test]
    fn test_one_and_three_month_windows_scenario() {
        // Jan 1 @ 100, Feb 1 @ 110, Apr 1 @ 121; latest is Apr 1.
        let series = vec![
            obs(2024, 1, 1, 100.0),
            obs(2024, 2, 1, 110.0),
            obs(2024, 4, 1, 121.0),
        ];

        let returns = trailing_returns(&series);

        // 1-month target Mar 1: closest on-or-before is Feb 1 @ 110
        assert!((returns.one_month.unwrap() - 10.0).abs() < 1e-9);
        // 3-month target Jan 1: exact hit on Jan 1 @ 100
        assert!((returns.three_month.unwrap() - 21.0).abs() < 1e-9);
        // 6-month target Oct 1 2023: before every observation
        assert_eq!(returns.six_month, None);
    }

    #[test]
    fn test_target_before_all_observations_never_falls_back_to_earliest() {
        let series = vec![obs(2024, 3, 1, 90.0), obs(2024, 4, 1, 100.0)];
        let returns = trailing_returns(&series);

        // only the 1-month window has a qualifying base (Mar 1 exactly);
        // the 3/6-month targets precede the series and must stay absent
        // instead of borrowing the earliest observation
        assert!(returns.one_month.is_some());
        assert_eq!(returns.three_month, None);
        assert_eq!(returns.six_month, None);
    }

    #[test]
    fn test_boundary_target_exactly_on_observation_selects_it() {
        let target = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
        let series = vec![obs(2024, 1, 1, 100.0), obs(2024, 2, 1, 110.0)];

        let chosen = closest_on_or_before(&series, target).unwrap();
        assert_eq!(chosen.price, 110.0);
    }

    #[test]
    fn test_single_observation_yields_all_windows_absent() {
        let series = vec![obs(2024, 4, 1, 100.0)];
        let returns = trailing_returns(&series);

        for period in Period::ALL {
            assert_eq!(returns.get(period), None);
        }
    }

    // The on-or-before comparison is `<=`, so the latest observation is
    // eligible as its own base whenever the target does not precede it. With
    // windows of one month or more the target always precedes the latest
    // observation, but the inclusion itself is intended behavior and a base
    // sitting exactly on the target that matches the latest price reads as a
    // flat +0.00% window rather than N/A.
    #[test]
    fn test_latest_observation_is_its_own_closest_at_zero_offset() {
        let series = vec![obs(2024, 1, 1, 100.0), obs(2024, 4, 1, 121.0)];
        let latest_at = series[1].at;

        let chosen = closest_on_or_before(&series, latest_at).unwrap();
        assert_eq!(chosen.price, 121.0);
    }

    #[test]
    fn test_base_equal_to_current_price_is_zero_percent_not_absent() {
        let series = vec![obs(2024, 3, 1, 121.0), obs(2024, 4, 1, 121.0)];
        let returns = trailing_returns(&series);

        assert_eq!(returns.one_month, Some(0.0));
    }

    #[test]
    fn test_zero_base_price_is_absent_not_infinite() {
        let series = vec![obs(2024, 3, 1, 0.0), obs(2024, 4, 1, 121.0)];
        let returns = trailing_returns(&series);

        assert_eq!(returns.one_month, None);
    }

    #[test]
    fn test_negative_return_when_price_fell() {
        let series = vec![obs(2024, 3, 1, 200.0), obs(2024, 4, 1, 150.0)];
        let returns = trailing_returns(&series);

        assert!((returns.one_month.unwrap() + 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_calendar_subtraction_clamps_month_end() {
        // Mar 31 minus one month clamps to Feb 29 (2024 is a leap year), so
        // an observation on Feb 29 is an exact boundary hit.
        let series = vec![obs(2024, 2, 29, 100.0), obs(2024, 3, 31, 110.0)];
        let returns = trailing_returns(&series);

        assert!((returns.one_month.unwrap() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_calculation_is_idempotent() {
        let series = vec![
            obs(2024, 1, 1, 100.0),
            obs(2024, 2, 1, 110.0),
            obs(2024, 4, 1, 121.0),
        ];

        assert_eq!(trailing_returns(&series), trailing_returns(&series));
    }

    #[test]
    fn test_same_instant_observations_use_first_as_base() {
        let mut series = vec![obs(2024, 3, 1, 100.0), obs(2024, 4, 1, 110.0)];
        series.insert(1, obs(2024, 3, 1, 999.0));

        let returns = trailing_returns(&series);
        // first of the Mar 1 pair wins, matching input order
        assert!((returns.one_month.unwrap() - 10.0).abs() < 1e-9);
    }
}
