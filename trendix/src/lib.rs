pub mod bar;
pub mod constant;
pub mod export;
pub mod extrema;
pub mod fitter;
pub mod logging;
pub mod session;

pub use bar::{DailyBar, PricePoint, PriceSeries};
pub use constant::{AnalysisError, Const, ExportError, TrendLineType};
pub use export::export_trend_lines_csv;
pub use extrema::{find_high_points, find_low_points};
pub use fitter::{fit_trend_lines, TrendLine};
pub use logging::init_logging;
pub use session::{AnalysisConfig, AnalysisConfigPatch, AnalysisResult, AnalysisSession};
