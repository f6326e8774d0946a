use chrono::NaiveDate;

#[derive(Debug)]
pub enum ProviderError {
    MissingSymbol,
    InvalidDateRange { start: NaiveDate, end: NaiveDate },
    NotAuthenticated,
    AuthFailed(i32),
    Status(i32),
    InvalidDatetime(String),
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderError::MissingSymbol => write!(f, "request has no symbol"),
            ProviderError::InvalidDateRange { start, end } => {
                write!(f, "invalid date range: {start} to {end}")
            }
            ProviderError::NotAuthenticated => write!(f, "provider not authenticated"),
            ProviderError::AuthFailed(status) => {
                write!(f, "authentication failed with status {status}")
            }
            ProviderError::Status(status) => {
                write!(f, "provider returned failure status {status}")
            }
            ProviderError::InvalidDatetime(value) => write!(f, "invalid datetime: {value}"),
            ProviderError::Io(e) => write!(f, "io error: {e}"),
            ProviderError::Csv(e) => write!(f, "csv error: {e}"),
        }
    }
}

impl std::error::Error for ProviderError {}

impl From<std::io::Error> for ProviderError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<csv::Error> for ProviderError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}
