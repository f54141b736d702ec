use rust_decimal::Decimal;
use std::collections::HashMap;

use super::fx_errors::FxError;
use super::fx_traits::ExchangeRateProvider;

/// Converts between currencies using rates quoted against one base currency.
///
/// Each rate is the number of units of a currency bought by one unit of the
/// base, so any pair converts through the base without a direct quote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyConverter {
    base: String,
    rates: HashMap<String, Decimal>,
}

impl CurrencyConverter {
    /// Creates a converter holding only the base currency at rate 1.
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        let mut rates = HashMap::new();
        rates.insert(base.clone(), Decimal::ONE);
        Self { base, rates }
    }

    /// Creates a converter from base-relative rates.
    pub fn from_rates(base: impl Into<String>, rates: HashMap<String, Decimal>) -> Self {
        let mut converter = Self::new(base);
        for (currency, rate) in rates {
            converter.insert_rate(currency, rate);
        }
        converter
    }

    pub fn with_rate(mut self, currency: impl Into<String>, rate: Decimal) -> Self {
        self.insert_rate(currency, rate);
        self
    }

    /// Adds or replaces a rate. The base currency always stays at 1.
    pub fn insert_rate(&mut self, currency: impl Into<String>, rate: Decimal) {
        let currency = currency.into();
        if currency == self.base {
            return;
        }
        self.rates.insert(currency, rate);
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn currencies(&self) -> Vec<String> {
        let mut codes: Vec<String> = self.rates.keys().cloned().collect();
        codes.sort();
        codes
    }

    fn usable_rate(&self, currency: &str) -> Result<Decimal, FxError> {
        self.rates
            .get(currency)
            .copied()
            .filter(|rate| !rate.is_zero())
            .ok_or_else(|| FxError::UnknownCurrency(currency.to_string()))
    }
}

impl ExchangeRateProvider for CurrencyConverter {
    fn convert(
        &self,
        amount: Decimal,
        from_currency: &str,
        to_currency: &str,
    ) -> Result<Decimal, FxError> {
        let from_rate = self.usable_rate(from_currency)?;
        let to_rate = self.usable_rate(to_currency)?;
        if from_currency == to_currency {
            return Ok(amount);
        }

        amount
            .checked_mul(to_rate)
            .and_then(|v| v.checked_div(from_rate))
            .ok_or_else(|| FxError::ConversionOverflow {
                from: from_currency.to_string(),
                to: to_currency.to_string(),
            })
    }
}
