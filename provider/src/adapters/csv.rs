use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::Deserialize;
use trendix::DailyBar;

use crate::{HistoryRequest, MarketDataProvider, ProviderError};

/// Daily history read from a local CSV file.
///
/// The file must carry a header; column names may be either the short
/// (`open`) or long (`open_price`) form.
pub struct CsvBarSource {
    path: PathBuf,
}

impl CsvBarSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl MarketDataProvider for CsvBarSource {
    fn venue(&self) -> &str {
        "CSV"
    }

    fn daily_bars(&mut self, request: &HistoryRequest) -> Result<Vec<DailyBar>, ProviderError> {
        request.validate()?;

        let mut reader = csv::Reader::from_path(&self.path)?;
        let mut bars = Vec::new();
        for row in reader.deserialize::<CsvBarRow>() {
            let row = row?;
            let datetime = parse_datetime(&row.datetime)?;
            let date = datetime.date_naive();
            if date < request.start || date > request.end {
                continue;
            }
            bars.push(DailyBar {
                datetime,
                open_price: row.open_price,
                high_price: row.high_price,
                low_price: row.low_price,
                close_price: row.close_price,
            });
        }

        Ok(bars)
    }
}

#[derive(Debug, Deserialize)]
struct CsvBarRow {
    #[serde(alias = "date")]
    datetime: String,
    #[serde(alias = "open")]
    open_price: f64,
    #[serde(alias = "high")]
    high_price: f64,
    #[serde(alias = "low")]
    low_price: f64,
    #[serde(alias = "close")]
    close_price: f64,
}

fn parse_datetime(value: &str) -> Result<DateTime<Utc>, ProviderError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }

    let datetime_patterns = ["%Y-%m-%d %H:%M:%S%.f", "%Y/%m/%d %H:%M:%S%.f"];
    for pattern in datetime_patterns {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, pattern) {
            return Ok(DateTime::<Utc>::from_naive_utc_and_offset(dt, Utc));
        }
    }

    // Daily files usually carry a bare date.
    let date_patterns = ["%Y-%m-%d", "%Y/%m/%d", "%Y%m%d"];
    for pattern in date_patterns {
        if let Ok(date) = NaiveDate::parse_from_str(value, pattern) {
            return Ok(DateTime::<Utc>::from_naive_utc_and_offset(
                date.and_time(NaiveTime::MIN),
                Utc,
            ));
        }
    }

    Err(ProviderError::InvalidDatetime(value.to_string()))
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Utc};

    use super::{parse_datetime, CsvBarSource};
    use crate::{HistoryRequest, MarketDataProvider};

    #[test]
    fn parse_datetime_accepts_bare_dates_and_timestamps() {
        let from_date = parse_datetime("2024-03-05").expect("bare date should parse");
        assert_eq!(from_date.format("%Y-%m-%d %H:%M:%S").to_string(), "2024-03-05 00:00:00");

        let from_ts = parse_datetime("2024-03-05 15:00:00").expect("timestamp should parse");
        assert_eq!(from_ts.format("%Y-%m-%d").to_string(), "2024-03-05");

        assert!(parse_datetime("not-a-date").is_err());
    }

    #[test]
    fn daily_bars_are_filtered_to_the_requested_span() {
        let path = std::env::temp_dir().join(format!(
            "provider_csv_test_{}_{}.csv",
            std::process::id(),
            Utc::now().timestamp_nanos_opt().unwrap_or_default()
        ));
        std::fs::write(
            &path,
            "date,open,high,low,close\n\
             2024-01-01,10,11,9,10.5\n\
             2024-01-02,10.5,12,10,11.5\n\
             2024-02-01,11.5,13,11,12.5\n",
        )
        .expect("fixture should write");

        let mut source = CsvBarSource::new(&path);
        let request = HistoryRequest::new(
            "AAPL",
            NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date"),
            NaiveDate::from_ymd_opt(2024, 1, 31).expect("valid date"),
        );
        let bars = source.daily_bars(&request).expect("load should succeed");

        assert_eq!(bars.len(), 2, "the February row falls outside the span");
        assert!((bars[0].close_price - 10.5).abs() < 1e-9);
        assert!((bars[1].high_price - 12.0).abs() < 1e-9);

        let _ = std::fs::remove_file(path);
    }
}
