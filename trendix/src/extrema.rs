//! Strict local-extrema detection over a daily price series.
//!
//! A candidate qualifies as a pivot when it is a strict extremum against
//! every neighbor inside the lookback window on both sides, and when the
//! move relative to the average closes before and after it clears the
//! magnitude threshold.

use crate::bar::{PricePoint, PriceSeries};
use crate::constant::AnalysisError;

/// Scans for high pivots. Returns points in ascending index order.
///
/// `lookback` is the window radius on each side; `min_change_percent` is a
/// fraction (0.03 = 3%). A series shorter than `2 * lookback + 1` yields an
/// empty result.
pub fn find_high_points(
    series: &PriceSeries,
    lookback: usize,
    min_change_percent: f64,
) -> Result<Vec<PricePoint>, AnalysisError> {
    if lookback == 0 {
        return Err(AnalysisError::InvalidLookback(lookback));
    }

    let points = series.points();
    let mut high_points = Vec::new();
    if points.len() <= lookback * 2 {
        return Ok(high_points);
    }

    for i in lookback..points.len() - lookback {
        let candidate = &points[i];

        let mut is_high_point = true;
        for j in 1..=lookback {
            if points[i - j].high_price >= candidate.high_price
                || points[i + j].high_price >= candidate.high_price
            {
                is_high_point = false;
                break;
            }
        }
        if !is_high_point {
            continue;
        }

        let avg_before = mean_close(&points[i - lookback..i]);
        let avg_after = mean_close(&points[i + 1..i + 1 + lookback]);
        if avg_before == 0.0 || candidate.high_price == 0.0 {
            return Err(AnalysisError::DegenerateAverage { index: i });
        }

        // The backward change is normalized by the baseline average, the
        // forward change by the candidate's own high.
        let change_from_before = (candidate.high_price - avg_before) / avg_before;
        let change_to_after = (candidate.high_price - avg_after) / candidate.high_price;

        if change_from_before.abs() >= min_change_percent
            && change_to_after.abs() >= min_change_percent
        {
            high_points.push(candidate.clone());
        }
    }

    Ok(high_points)
}

/// Mirror of [`find_high_points`] for low pivots: strict local minimum on
/// `low`, with the deviation formulas inverted.
pub fn find_low_points(
    series: &PriceSeries,
    lookback: usize,
    min_change_percent: f64,
) -> Result<Vec<PricePoint>, AnalysisError> {
    if lookback == 0 {
        return Err(AnalysisError::InvalidLookback(lookback));
    }

    let points = series.points();
    let mut low_points = Vec::new();
    if points.len() <= lookback * 2 {
        return Ok(low_points);
    }

    for i in lookback..points.len() - lookback {
        let candidate = &points[i];

        let mut is_low_point = true;
        for j in 1..=lookback {
            if points[i - j].low_price <= candidate.low_price
                || points[i + j].low_price <= candidate.low_price
            {
                is_low_point = false;
                break;
            }
        }
        if !is_low_point {
            continue;
        }

        let avg_before = mean_close(&points[i - lookback..i]);
        let avg_after = mean_close(&points[i + 1..i + 1 + lookback]);
        if avg_before == 0.0 || candidate.low_price == 0.0 {
            return Err(AnalysisError::DegenerateAverage { index: i });
        }

        let change_from_before = (avg_before - candidate.low_price) / avg_before;
        let change_to_after = (avg_after - candidate.low_price) / candidate.low_price;

        if change_from_before.abs() >= min_change_percent
            && change_to_after.abs() >= min_change_percent
        {
            low_points.push(candidate.clone());
        }
    }

    Ok(low_points)
}

fn mean_close(points: &[PricePoint]) -> f64 {
    points.iter().map(|x| x.close_price).sum::<f64>() / points.len() as f64
}
