//! Analysis session: holds the loaded series and the latest result.

use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::bar::{PricePoint, PriceSeries};
use crate::constant::AnalysisError;
use crate::extrema::{find_high_points, find_low_points};
use crate::fitter::{fit_trend_lines, TrendLine};

/// Tuning knobs for one analysis pass.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    pub lookback: usize,
    pub min_change_percent: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            lookback: 5,
            min_change_percent: 0.003,
        }
    }
}

impl AnalysisConfig {
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.lookback == 0 {
            return Err(AnalysisError::InvalidLookback(self.lookback));
        }
        if self.min_change_percent < 0.0 {
            return Err(AnalysisError::InvalidThreshold(self.min_change_percent));
        }
        Ok(())
    }

    /// Overlays the fields present in `patch` onto this config.
    pub fn apply(&mut self, patch: &AnalysisConfigPatch) {
        if let Some(lookback) = patch.lookback {
            self.lookback = lookback;
        }
        if let Some(min_change_percent) = patch.min_change_percent {
            self.min_change_percent = min_change_percent;
        }
    }

    /// Loads a patch file (`.yaml`/`.yml` or `.json`) and overlays it on
    /// the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let patch: AnalysisConfigPatch = match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&raw)?,
            Some("json") => serde_json::from_str(&raw)?,
            other => {
                return Err(format!(
                    "unsupported config extension: {:?} ({})",
                    other,
                    path.display()
                )
                .into());
            }
        };
        let mut config = Self::default();
        config.apply(&patch);
        config.validate()?;
        Ok(config)
    }
}

/// Partial config as read from disk. Absent fields keep their defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisConfigPatch {
    pub lookback: Option<usize>,
    pub min_change_percent: Option<f64>,
}

/// Output of one analysis pass over the session's series.
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub high_points: Vec<PricePoint>,
    pub low_points: Vec<PricePoint>,
    pub trend_lines: Vec<TrendLine>,
}

/// Owns a price series and caches the most recent analysis over it.
///
/// A failed pass leaves the previous result untouched; loading a new
/// series discards it.
#[derive(Debug, Default)]
pub struct AnalysisSession {
    series: PriceSeries,
    result: Option<AnalysisResult>,
}

impl AnalysisSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the series wholesale and drops any cached result.
    pub fn set_series(&mut self, series: PriceSeries) {
        self.series = series;
        self.result = None;
    }

    pub fn series(&self) -> &PriceSeries {
        &self.series
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    /// Runs pivot detection and line fitting over the loaded series.
    ///
    /// The cached result is only replaced once the whole pass succeeds.
    pub fn analyze(&mut self, config: &AnalysisConfig) -> Result<&AnalysisResult, AnalysisError> {
        config.validate()?;
        if self.series.is_empty() {
            return Err(AnalysisError::NoData);
        }

        let high_points =
            find_high_points(&self.series, config.lookback, config.min_change_percent)?;
        let low_points =
            find_low_points(&self.series, config.lookback, config.min_change_percent)?;
        let trend_lines = fit_trend_lines(&high_points, &low_points);

        info!(
            bars = self.series.len(),
            highs = high_points.len(),
            lows = low_points.len(),
            lines = trend_lines.len(),
            "analysis pass complete"
        );

        Ok(self.result.insert(AnalysisResult {
            high_points,
            low_points,
            trend_lines,
        }))
    }
}
