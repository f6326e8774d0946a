use chrono::{DateTime, Duration, TimeZone, Utc};

use trendix::{find_high_points, find_low_points, AnalysisError, DailyBar, PriceSeries};

fn day(offset: usize) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::days(offset as i64)
}

fn series_from_highs(highs: &[f64]) -> PriceSeries {
    let bars = highs
        .iter()
        .enumerate()
        .map(|(offset, &high)| DailyBar {
            datetime: day(offset),
            open_price: high,
            high_price: high,
            low_price: high - 1.0,
            close_price: high,
        })
        .collect();
    PriceSeries::from_bars(bars)
}

fn series_from_lows(lows: &[f64]) -> PriceSeries {
    let bars = lows
        .iter()
        .enumerate()
        .map(|(offset, &low)| DailyBar {
            datetime: day(offset),
            open_price: low,
            high_price: low + 1.0,
            low_price: low,
            close_price: low,
        })
        .collect();
    PriceSeries::from_bars(bars)
}

#[test]
fn isolated_peak_is_the_only_high_point() {
    let series = series_from_highs(&[10.0, 11.0, 15.0, 11.0, 10.0, 9.0, 8.0]);

    let highs = find_high_points(&series, 2, 0.01).expect("detection should succeed");

    assert_eq!(highs.len(), 1, "only the peak should qualify");
    assert_eq!(highs[0].index, 2);
    assert!((highs[0].high_price - 15.0).abs() < 1e-9);
}

#[test]
fn tied_neighbors_disqualify_both_candidates() {
    let series = series_from_highs(&[10.0, 11.0, 15.0, 15.0, 10.0, 9.0, 8.0]);

    let highs = find_high_points(&series, 2, 0.01).expect("detection should succeed");

    assert!(highs.is_empty(), "an equal neighbor breaks strictness");
}

#[test]
fn isolated_trough_is_the_only_low_point() {
    let series = series_from_lows(&[10.0, 9.0, 5.0, 9.0, 10.0, 11.0, 12.0]);

    let lows = find_low_points(&series, 2, 0.01).expect("detection should succeed");

    assert_eq!(lows.len(), 1, "only the trough should qualify");
    assert_eq!(lows[0].index, 2);
    assert!((lows[0].low_price - 5.0).abs() < 1e-9);
}

#[test]
fn short_series_yields_no_candidates() {
    let series = series_from_highs(&[10.0, 11.0, 15.0, 11.0, 10.0, 9.0]);

    let highs = find_high_points(&series, 3, 0.01).expect("detection should succeed");

    assert!(highs.is_empty(), "series of length 2 * lookback is too short");
}

#[test]
fn zero_lookback_is_rejected() {
    let series = series_from_highs(&[10.0, 11.0, 10.0]);

    assert!(matches!(
        find_high_points(&series, 0, 0.01),
        Err(AnalysisError::InvalidLookback(0))
    ));
    assert!(matches!(
        find_low_points(&series, 0, 0.01),
        Err(AnalysisError::InvalidLookback(0))
    ));
}

#[test]
fn threshold_filters_shallow_moves() {
    let series = series_from_highs(&[10.0, 11.0, 15.0, 11.0, 10.0, 9.0, 8.0]);

    let highs = find_high_points(&series, 2, 0.5).expect("detection should succeed");

    assert!(
        highs.is_empty(),
        "a 50% threshold should reject a 30% forward move"
    );
}

#[test]
fn zero_threshold_admits_every_strict_extremum() {
    let series = series_from_highs(&[10.0, 11.0, 15.0, 11.0, 10.0, 9.0, 8.0]);

    let highs = find_high_points(&series, 2, 0.0).expect("detection should succeed");

    assert_eq!(highs.len(), 1);
    assert_eq!(highs[0].index, 2);
}

#[test]
fn high_points_are_returned_in_index_order() {
    let series = series_from_highs(&[10.0, 11.0, 15.0, 11.0, 10.0, 11.0, 16.0, 11.0, 10.0]);

    let highs = find_high_points(&series, 2, 0.01).expect("detection should succeed");

    let indices = highs.iter().map(|p| p.index).collect::<Vec<_>>();
    assert_eq!(indices, vec![2, 6]);
}

#[test]
fn zero_baseline_average_is_reported_as_degenerate() {
    let series = series_from_highs(&[0.0, 0.0, 5.0, 0.0, 0.0]);

    assert!(matches!(
        find_high_points(&series, 2, 0.01),
        Err(AnalysisError::DegenerateAverage { index: 2 })
    ));
}
