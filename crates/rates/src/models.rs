use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use fxtext_core::CurrencyConverter;

use crate::errors::{RatesError, Result};

/// A day's worth of rates as published by the provider.
///
/// Field names follow the provider payload so the cached file is the
/// response body as received.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RateSnapshot {
    pub result: String,
    pub base_code: String,
    pub time_last_update_unix: i64,
    pub time_next_update_unix: i64,
    /// Units of each currency bought by one unit of `base_code`
    pub rates: HashMap<String, f64>,
}

impl RateSnapshot {
    pub fn is_success(&self) -> bool {
        self.result == "success"
    }

    /// True once the provider has published, or is due to publish, newer rates.
    pub fn is_outdated(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() > self.time_next_update_unix
    }

    pub fn last_update(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.time_last_update_unix, 0)
    }

    pub fn next_update(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.time_next_update_unix, 0)
    }

    /// Builds a converter over these rates.
    pub fn to_converter(&self) -> Result<CurrencyConverter> {
        let mut converter = CurrencyConverter::new(self.base_code.clone());
        for (currency, rate) in &self.rates {
            let value = Decimal::try_from(*rate).map_err(|_| RatesError::InvalidRate {
                currency: currency.clone(),
                rate: *rate,
            })?;
            converter.insert_rate(currency.clone(), value);
        }
        Ok(converter)
    }
}

/// Formats an optional timestamp the way update messages show it.
pub fn format_update_time(time: Option<DateTime<Utc>>) -> String {
    time.map(|t| t.format("%Y-%m-%d %H:%M:%SZ").to_string())
        .unwrap_or_else(|| "Never".to_string())
}
