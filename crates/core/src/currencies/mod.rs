//! Currency reference data: names, symbols and demonyms by ISO code.

mod currencies_model;
mod currencies_traits;
mod currency_catalog;

pub use currencies_model::CurrencyRecord;
pub use currencies_traits::CurrencyLookup;
pub use currency_catalog::CurrencyCatalog;
