//! FX (Foreign Exchange) module - conversion interface and an in-memory rate table.

mod currency_converter;
mod fx_errors;
mod fx_traits;

pub use currency_converter::CurrencyConverter;
pub use fx_errors::FxError;
pub use fx_traits::ExchangeRateProvider;
