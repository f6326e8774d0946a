//! Trend line fitting over detected pivots.
//!
//! Every ordered pair of pivots defines a candidate line. The line
//! qualifies when enough other pivots sit within tolerance of it.

use crate::bar::PricePoint;
use crate::constant::{Const, TrendLineType};

/// A fitted line between two pivot points.
#[derive(Debug, Clone)]
pub struct TrendLine {
    pub line_type: TrendLineType,
    pub start_point: PricePoint,
    pub end_point: PricePoint,
    /// Price change per bar index, measured on the anchor price.
    pub slope: f64,
}

impl TrendLine {
    /// Whole calendar days spanned by the line.
    pub fn duration_days(&self) -> i64 {
        (self.end_point.date - self.start_point.date).num_days()
    }
}

/// Fits uptrend lines through the low pivots and downtrend lines through
/// the high pivots. Uptrend lines come first in the output.
///
/// Overlapping or near-duplicate lines are all kept; consumers that want
/// a sparser picture filter afterwards.
pub fn fit_trend_lines(high_points: &[PricePoint], low_points: &[PricePoint]) -> Vec<TrendLine> {
    let mut lines = fit_direction(low_points, TrendLineType::Uptrend);
    lines.extend(fit_direction(high_points, TrendLineType::Downtrend));
    lines
}

fn anchor(point: &PricePoint, line_type: TrendLineType) -> f64 {
    match line_type {
        TrendLineType::Uptrend => point.low_price,
        TrendLineType::Downtrend => point.high_price,
    }
}

fn fit_direction(points: &[PricePoint], line_type: TrendLineType) -> Vec<TrendLine> {
    let mut lines = Vec::new();
    if points.len() < 2 {
        return lines;
    }

    let mut sorted: Vec<PricePoint> = points.to_vec();
    sorted.sort_by_key(|x| x.index);

    for i in 0..sorted.len() - 1 {
        for j in i + 1..sorted.len() {
            let start = &sorted[i];
            let end = &sorted[j];

            let run = end.index as f64 - start.index as f64;
            let slope = (anchor(end, line_type) - anchor(start, line_type)) / run;

            // Endpoints count toward support.
            let mut support = 2;
            for (k, point) in sorted.iter().enumerate() {
                if k == i || k == j {
                    continue;
                }
                let expected = anchor(start, line_type)
                    + slope * (point.index as f64 - start.index as f64);
                let tolerance = anchor(point, line_type) * Const::LINE_TOLERANCE;
                if (expected - anchor(point, line_type)).abs() <= tolerance {
                    support += 1;
                }
            }

            if support < Const::MIN_SUPPORT {
                continue;
            }
            // Only downtrend lines carry a slope-sign requirement.
            if line_type == TrendLineType::Downtrend && slope >= 0.0 {
                continue;
            }

            lines.push(TrendLine {
                line_type,
                start_point: start.clone(),
                end_point: end.clone(),
                slope,
            });
        }
    }

    lines
}
