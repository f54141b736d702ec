//! Locale-aware amount extraction.
//!
//! A currency's spellings are derived ([`surface_forms`]), located in the
//! text ([`locator`]), the adjacent digit run is recovered ([`scanner`]) and
//! interpreted ([`number_format`]). [`formatter`] later renders a converted
//! value in the style the original amount was written in.
//!
//! ```text
//! CurrencyRecord -> SurfaceForm* -> Occurrence* -> RawAmount -> NormalizedAmount
//!                                                                   |
//!                                  converted value + style -> reformat -> String
//! ```

mod amounts_errors;
mod amounts_model;
mod extractor;
pub mod formatter;
pub mod locator;
pub mod number_format;
pub mod scanner;
pub mod surface_forms;

#[cfg(test)]
mod extractor_tests;

pub use amounts_errors::AmountError;
pub use amounts_model::{
    ExtractionFailure, ExtractionReport, NormalizedAmount, Occurrence, Placement, PriceMatch,
    RawAmount, SeparatorMark, Side, Spacing, SurfaceForm, SurfaceKind, TextSpan,
};
pub use extractor::{extract_amounts, AmountExtractor, ExtractorConfig};
pub use formatter::reformat;
pub use locator::{OccurrenceLocator, TextView};
pub use number_format::NumberFormat;
pub use scanner::BothSidesPolicy;
pub use surface_forms::surface_forms;
