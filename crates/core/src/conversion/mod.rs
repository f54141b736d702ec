//! Rewriting the amounts of one currency in a text into another currency.

mod conversion_model;
mod text_converter;

pub use conversion_model::{ConversionFailure, ConversionReport};
pub use text_converter::TextConverter;
