pub mod adapters;
pub mod error;
pub mod protocol;

pub use adapters::{CsvBarSource, MockProvider};
pub use error::ProviderError;
pub use protocol::{HistoryRequest, MarketDataProvider};
