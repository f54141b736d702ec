use super::currencies_model::CurrencyRecord;
use crate::errors::Result;

/// Lookup of currency reference data by ISO 4217 code.
pub trait CurrencyLookup: Send + Sync {
    /// Returns the record for `code`, or `Error::UnsupportedCurrency`.
    fn get_currency(&self, code: &str) -> Result<CurrencyRecord>;

    /// All codes this lookup can resolve, sorted.
    fn codes(&self) -> Vec<String>;

    fn is_valid_code(&self, code: &str) -> bool {
        self.get_currency(code).is_ok()
    }
}
