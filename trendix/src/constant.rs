use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrendLineType {
    Uptrend,
    Downtrend,
}

impl TrendLineType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Uptrend => "Uptrend",
            Self::Downtrend => "Downtrend",
        }
    }

    pub fn parse(value: &str) -> Result<Self, AnalysisError> {
        match value.trim() {
            "Uptrend" => Ok(Self::Uptrend),
            "Downtrend" => Ok(Self::Downtrend),
            _ => Err(AnalysisError::InvalidTrendLineType(value.to_string())),
        }
    }
}

impl Display for TrendLineType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub struct Const;

impl Const {
    /// Admissible deviation from a fitted line, as a fraction of the
    /// examined point's own anchor value.
    pub const LINE_TOLERANCE: f64 = 0.02;
    /// Minimum extrema (endpoints included) that must lie on a line.
    pub const MIN_SUPPORT: usize = 3;
}

#[derive(Debug)]
pub enum AnalysisError {
    NoData,
    InvalidLookback(usize),
    InvalidThreshold(f64),
    DegenerateAverage { index: usize },
    InvalidTrendLineType(String),
}

impl Display for AnalysisError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoData => write!(f, "no price data loaded"),
            Self::InvalidLookback(v) => write!(f, "lookback must be at least 1, got {v}"),
            Self::InvalidThreshold(v) => {
                write!(f, "min change percent must be non-negative, got {v}")
            }
            Self::DegenerateAverage { index } => {
                write!(f, "zero denominator while scoring candidate at index {index}")
            }
            Self::InvalidTrendLineType(v) => write!(f, "invalid trend line type: {v}"),
        }
    }
}

impl std::error::Error for AnalysisError {}

#[derive(Debug)]
pub enum ExportError {
    NoTrendLines,
    Io(std::io::Error),
    Csv(csv::Error),
}

impl Display for ExportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoTrendLines => write!(f, "no trend lines to export"),
            Self::Io(e) => write!(f, "io error: {e}"),
            Self::Csv(e) => write!(f, "csv error: {e}"),
        }
    }
}

impl std::error::Error for ExportError {}

impl From<std::io::Error> for ExportError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<csv::Error> for ExportError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}
