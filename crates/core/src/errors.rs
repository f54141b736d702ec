//! Core error types for the fxtext engine.
//!
//! Each domain module owns a narrow error enum; this module gathers them
//! into the root [`Error`] used by the pipeline entry points.

use thiserror::Error;

use crate::amounts::AmountError;
use crate::fx::FxError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Currency '{0}' is not supported")]
    UnsupportedCurrency(String),

    #[error("Currency data could not be loaded: {0}")]
    CurrencyData(String),

    #[error("Invalid surface form pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Amount could not be interpreted: {0}")]
    Amount(#[from] AmountError),

    #[error("Fx error: {0}")]
    Fx(#[from] FxError),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::CurrencyData(err.to_string())
    }
}
