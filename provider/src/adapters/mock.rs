use chrono::{Duration, NaiveTime};
use trendix::DailyBar;

use crate::{HistoryRequest, MarketDataProvider, ProviderError};

/// Deterministic in-memory provider. Prices follow a triangle wave so
/// that every span long enough contains pivots to detect.
pub struct MockProvider {
    venue: String,
    start_price: f64,
    authenticated: bool,
    auth_status: i32,
    history_status: i32,
}

impl MockProvider {
    pub fn new(venue: impl Into<String>, start_price: f64) -> Self {
        Self {
            venue: venue.into(),
            start_price,
            authenticated: false,
            auth_status: 0,
            history_status: 0,
        }
    }

    /// Makes the next `authenticate` call fail with the given status.
    pub fn fail_auth_with(&mut self, status: i32) {
        self.auth_status = status;
    }

    /// Makes every `daily_bars` call fail with the given status.
    pub fn fail_history_with(&mut self, status: i32) {
        self.history_status = status;
    }
}

impl MarketDataProvider for MockProvider {
    fn venue(&self) -> &str {
        &self.venue
    }

    fn authenticate(&mut self, _token: &str) -> Result<(), ProviderError> {
        if self.auth_status != 0 {
            return Err(ProviderError::AuthFailed(self.auth_status));
        }
        self.authenticated = true;
        Ok(())
    }

    fn daily_bars(&mut self, request: &HistoryRequest) -> Result<Vec<DailyBar>, ProviderError> {
        request.validate()?;
        if !self.authenticated {
            return Err(ProviderError::NotAuthenticated);
        }
        if self.history_status != 0 {
            return Err(ProviderError::Status(self.history_status));
        }

        let span = (request.end - request.start).num_days();
        let mut bars = Vec::new();
        for offset in 0..=span {
            let phase = (offset % 20) as f64;
            let base = self.start_price + if phase < 10.0 { phase } else { 20.0 - phase };

            let open = base;
            let close = base + 0.2;
            let high = close + 0.4;
            let low = open - 0.3;

            let date = request.start + Duration::days(offset);
            bars.push(DailyBar {
                datetime: date.and_time(NaiveTime::MIN).and_utc(),
                open_price: open,
                high_price: high,
                low_price: low,
                close_price: close,
            });
        }

        Ok(bars)
    }
}
