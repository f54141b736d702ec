use rust_decimal::Decimal;

use super::fx_errors::FxError;

/// Source of exchange rates for converting extracted amounts.
pub trait ExchangeRateProvider: Send + Sync {
    /// Converts `amount` of `from_currency` into `to_currency`.
    fn convert(
        &self,
        amount: Decimal,
        from_currency: &str,
        to_currency: &str,
    ) -> Result<Decimal, FxError>;

    /// Price of one unit of `from_currency` in `to_currency`.
    fn get_rate(&self, from_currency: &str, to_currency: &str) -> Result<Decimal, FxError> {
        self.convert(Decimal::ONE, from_currency, to_currency)
    }
}
