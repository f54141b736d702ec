use thiserror::Error;

/// Errors raised while fetching or caching exchange rates.
#[derive(Error, Debug)]
pub enum RatesError {
    #[error("Rate cache I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Rate snapshot is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered, but not with usable rates.
    #[error("Unable to retrieve exchange rates: {0}")]
    Fetch(String),

    #[error("Invalid rate for {currency}: {rate}")]
    InvalidRate { currency: String, rate: f64 },
}

pub type Result<T> = std::result::Result<T, RatesError>;
