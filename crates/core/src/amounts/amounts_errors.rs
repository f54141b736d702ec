use thiserror::Error;

/// Errors raised while interpreting a raw amount string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
    /// A character is neither a digit nor a recognized separator.
    #[error("'{ch}' in '{raw}' is not a digit or separator")]
    InvalidCharacter { ch: char, raw: String },

    /// The separators cannot be assigned decimal/thousands roles.
    #[error("Cannot interpret separators in '{0}'")]
    AmbiguousSeparators(String),

    /// The separator in decimal position cannot mark a fraction.
    #[error("'{ch}' in '{raw}' is not a valid decimal separator")]
    InvalidDecimalSeparator { ch: char, raw: String },

    /// The cleaned digits did not form a number.
    #[error("'{0}' is not a valid number")]
    InvalidNumber(String),
}
