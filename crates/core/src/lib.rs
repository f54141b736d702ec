//! fxtext core - currency amount extraction, normalization and re-rendering.
//!
//! This crate finds the amounts written in one currency inside free text,
//! recovers their numeric value together with the way they were written,
//! and renders converted values back in that same style. It performs no
//! I/O; exchange rates and currency data are supplied through traits.

pub mod amounts;
pub mod constants;
pub mod conversion;
pub mod currencies;
pub mod errors;
pub mod fx;

pub use amounts::{
    extract_amounts, reformat, AmountExtractor, ExtractionReport, ExtractorConfig,
    NormalizedAmount, NumberFormat, PriceMatch,
};
pub use conversion::{ConversionReport, TextConverter};
pub use currencies::{CurrencyCatalog, CurrencyLookup, CurrencyRecord};
pub use fx::{CurrencyConverter, ExchangeRateProvider, FxError};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
