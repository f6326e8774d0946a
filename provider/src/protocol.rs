use chrono::NaiveDate;
use trendix::DailyBar;

use crate::error::ProviderError;

/// A daily-history query: which symbol, over which inclusive date span.
#[derive(Debug, Clone)]
pub struct HistoryRequest {
    pub symbol: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl HistoryRequest {
    pub fn new(symbol: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            symbol: symbol.into(),
            start,
            end,
        }
    }

    pub fn validate(&self) -> Result<(), ProviderError> {
        if self.symbol.trim().is_empty() {
            return Err(ProviderError::MissingSymbol);
        }
        if self.start > self.end {
            return Err(ProviderError::InvalidDateRange {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }
}

/// Source of daily OHLC history. Implementations validate the request
/// before touching their backend.
pub trait MarketDataProvider {
    fn venue(&self) -> &str;

    /// Returns bars in chronological order, restricted to the request's
    /// date span. An empty result is not an error.
    fn daily_bars(&mut self, request: &HistoryRequest) -> Result<Vec<DailyBar>, ProviderError>;

    /// Presents a credential to the backend. Sources that need none keep
    /// the default no-op.
    fn authenticate(&mut self, _token: &str) -> Result<(), ProviderError> {
        Ok(())
    }
}
