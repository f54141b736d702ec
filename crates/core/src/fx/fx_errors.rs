use thiserror::Error;

/// Errors raised while converting between currencies.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FxError {
    /// The currency is absent from the rate table, or has a zero rate.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    #[error("Conversion from {from} to {to} overflowed")]
    ConversionOverflow { from: String, to: String },
}
