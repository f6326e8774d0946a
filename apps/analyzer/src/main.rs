use std::path::PathBuf;

use chrono::{Months, NaiveDate, Utc};
use provider::{CsvBarSource, HistoryRequest, MarketDataProvider};
use tracing::info;
use trendix::{
    export_trend_lines_csv, init_logging, AnalysisConfig, AnalysisConfigPatch, AnalysisSession,
    PriceSeries,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        eprintln!(
            "usage: cargo run -p analyzer -- <csv_path> <symbol> [start:YYYY-MM-DD] [end:YYYY-MM-DD] [lookback] [min_change_pct] [output_csv]"
        );
        std::process::exit(2);
    }

    let csv_path = PathBuf::from(&args[1]);
    let symbol = args[2].clone();

    let end = if args.len() >= 5 {
        NaiveDate::parse_from_str(&args[4], "%Y-%m-%d")?
    } else {
        Utc::now().date_naive()
    };
    let start = if args.len() >= 4 {
        NaiveDate::parse_from_str(&args[3], "%Y-%m-%d")?
    } else {
        end.checked_sub_months(Months::new(6))
            .ok_or("start date out of range")?
    };

    let mut config = match std::env::var("TRENDIX_CONFIG") {
        Ok(path) => AnalysisConfig::load(&path)?,
        Err(_) => AnalysisConfig::default(),
    };
    let mut patch = AnalysisConfigPatch::default();
    if args.len() >= 6 {
        patch.lookback = Some(args[5].parse::<usize>()?);
    }
    if args.len() >= 7 {
        // Thresholds on the command line are percentages, 0.3 means 0.3%.
        patch.min_change_percent = Some(args[6].parse::<f64>()? / 100.0);
    }
    config.apply(&patch);
    config.validate()?;

    let output = if args.len() >= 8 {
        PathBuf::from(&args[7])
    } else {
        PathBuf::from(format!("trend_lines_{symbol}.csv"))
    };

    let token = std::env::var("TRENDIX_TOKEN").unwrap_or_else(|_| "local".to_string());
    let mut source = CsvBarSource::new(&csv_path);
    source.authenticate(&token)?;

    let request = HistoryRequest::new(symbol.clone(), start, end);
    let bars = source.daily_bars(&request)?;
    info!(venue = source.venue(), symbol = %symbol, bars = bars.len(), "history loaded");
    println!("loaded {} daily bars for {}", bars.len(), symbol);

    let mut session = AnalysisSession::new();
    session.set_series(PriceSeries::from_bars(bars));
    let result = session.analyze(&config)?;

    println!(
        "found {} high points, {} low points, {} trend lines",
        result.high_points.len(),
        result.low_points.len(),
        result.trend_lines.len()
    );

    if result.trend_lines.is_empty() {
        println!("no trend lines to export");
        return Ok(());
    }

    export_trend_lines_csv(&result.trend_lines, &output)?;
    println!("exported trend lines to {}", output.display());
    Ok(())
}
