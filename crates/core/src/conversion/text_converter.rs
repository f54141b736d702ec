use rust_decimal::Decimal;
use std::sync::Arc;

use super::conversion_model::{ConversionFailure, ConversionReport};
use crate::amounts::{
    reformat, AmountExtractor, ExtractorConfig, PriceMatch, SurfaceKind, TextSpan, TextView,
};
use crate::currencies::{CurrencyLookup, CurrencyRecord};
use crate::errors::Result;
use crate::fx::ExchangeRateProvider;

/// Converts every amount of one currency in a text into another currency,
/// keeping the way each amount was written.
pub struct TextConverter {
    currencies: Arc<dyn CurrencyLookup>,
    rates: Arc<dyn ExchangeRateProvider>,
    config: ExtractorConfig,
}

impl TextConverter {
    pub fn new(currencies: Arc<dyn CurrencyLookup>, rates: Arc<dyn ExchangeRateProvider>) -> Self {
        Self {
            currencies,
            rates,
            config: ExtractorConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ExtractorConfig) -> Self {
        self.config = config;
        self
    }

    /// Rewrites the amounts written in `from_currency` as amounts in
    /// `to_currency`.
    ///
    /// Only the symbol, the gap and the amount of each match are replaced;
    /// every other character is copied through. An amount that cannot be
    /// converted is left as written and reported as a failure.
    pub fn convert_text(
        &self,
        text: &str,
        from_currency: &str,
        to_currency: &str,
    ) -> Result<ConversionReport> {
        let target = self.currencies.get_currency(to_currency)?;
        let extractor = AmountExtractor::for_code(
            from_currency,
            self.currencies.as_ref(),
            self.config.clone(),
        )?;
        let extraction = extractor.extract(text);

        let mut report = ConversionReport {
            failures: extraction
                .failures
                .iter()
                .map(|failure| ConversionFailure {
                    symbol: failure.symbol.clone(),
                    span: failure.amount_span,
                    message: failure.error.to_string(),
                })
                .collect(),
            ..ConversionReport::default()
        };

        let view = TextView::new(text);
        let chars = view.chars();
        let mut matches = extraction.matches;
        matches.sort_by_key(|m| m.full_span().start);

        let mut output = String::with_capacity(text.len());
        let mut cursor = 0;
        for price in &matches {
            let span = price.full_span();
            if span.start < cursor {
                log::debug!(
                    "Skipping '{}' at {}: overlaps a rewritten amount",
                    price.symbol,
                    span.start
                );
                continue;
            }

            let converted = match self
                .rates
                .convert(price.amount.value, from_currency, to_currency)
            {
                Ok(value) => value,
                Err(e) => {
                    log::warn!("Leaving '{}' unconverted: {}", view.slice(span), e);
                    report.failures.push(ConversionFailure {
                        symbol: price.symbol.clone(),
                        span: price.amount_span,
                        message: e.to_string(),
                    });
                    continue;
                }
            };

            output.extend(&chars[cursor..span.start]);
            output.push_str(&self.render(&view, price, converted, &target));
            cursor = span.end;
            report.converted += 1;
        }
        output.extend(&chars[cursor..]);
        report.failures.sort_by_key(|f| f.span.start);

        log::debug!(
            "Converted {} amount(s) from {} to {}, {} failure(s)",
            report.converted,
            from_currency,
            to_currency,
            report.failures.len()
        );
        report.text = output;
        Ok(report)
    }

    fn render(
        &self,
        view: &TextView<'_>,
        price: &PriceMatch,
        converted: Decimal,
        target: &CurrencyRecord,
    ) -> String {
        let amount = reformat(converted, &price.amount, &self.config.number_format);
        let written_symbol = view.slice(price.symbol_span);
        let symbol = target_symbol(price.symbol_kind, target, &written_symbol, converted);

        if price.symbol_placed_before {
            let gap = view.slice(TextSpan::new(
                price.symbol_span.end,
                price.amount_span.start,
            ));
            format!("{symbol}{gap}{amount}")
        } else {
            let gap = view.slice(TextSpan::new(
                price.amount_span.end,
                price.symbol_span.start,
            ));
            format!("{amount}{gap}{symbol}")
        }
    }
}

/// The spelling of `target` matching the kind of spelling found in the text.
///
/// Names follow the letter case they were written in and agree in number
/// with the converted value.
fn target_symbol(
    kind: SurfaceKind,
    target: &CurrencyRecord,
    written: &str,
    converted: Decimal,
) -> String {
    let code = target.code.as_str();
    match kind {
        SurfaceKind::IsoCode => target.code.clone(),
        SurfaceKind::Symbol => first_non_empty(&[&target.symbol], code),
        SurfaceKind::NativeSymbol => {
            first_non_empty(&[&target.symbol_native, &target.symbol], code)
        }
        SurfaceKind::FullName => match_case(&first_non_empty(&[&target.name], code), written),
        SurfaceKind::Name | SurfaceKind::PluralName => {
            let name = if converted == Decimal::ONE {
                target.bare_name()
            } else {
                target.bare_plural_name()
            };
            match_case(&first_non_empty(&[&name], code), written)
        }
    }
}

fn first_non_empty(candidates: &[&String], fallback: &str) -> String {
    candidates
        .iter()
        .map(|c| c.trim())
        .find(|c| !c.is_empty())
        .unwrap_or(fallback)
        .to_string()
}

fn match_case(text: &str, written: &str) -> String {
    let has_upper = written.chars().any(char::is_uppercase);
    let has_lower = written.chars().any(char::is_lowercase);
    match (has_upper, has_lower) {
        (true, false) => text.to_uppercase(),
        (false, true) => text.to_lowercase(),
        _ => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currencies::CurrencyCatalog;
    use crate::fx::CurrencyConverter;
    use rust_decimal_macros::dec;

    fn converter_with(config: ExtractorConfig) -> TextConverter {
        let rates = CurrencyConverter::new("USD")
            .with_rate("EUR", dec!(0.5))
            .with_rate("GBP", dec!(0.5))
            .with_rate("INR", dec!(80));
        TextConverter::new(Arc::new(CurrencyCatalog::embedded().unwrap()), Arc::new(rates))
            .with_config(config)
    }

    fn converter() -> TextConverter {
        converter_with(ExtractorConfig::default())
    }

    #[test]
    fn test_symbol_amount_is_rewritten_in_place() {
        let report = converter()
            .convert_text("$1,000 and 50 EUR", "USD", "EUR")
            .unwrap();
        assert_eq!(report.text, "€500 and 50 EUR");
        assert_eq!(report.converted, 1);
        assert!(!report.has_failures());
    }

    #[test]
    fn test_price_list_converts_every_amount() {
        let report = converter()
            .convert_text("Tickets: $20 $30 $40", "USD", "EUR")
            .unwrap();
        assert_eq!(report.text, "Tickets: €10 €15 €20");
        assert_eq!(report.converted, 3);
        assert!(!report.has_failures());
    }

    #[test]
    fn test_gap_and_order_are_kept() {
        let report = converter()
            .convert_text("Pay 5 USD or USD 10.", "USD", "EUR")
            .unwrap();
        assert_eq!(report.text, "Pay 2.5 EUR or EUR 5.");
        assert_eq!(report.converted, 2);
    }

    #[test]
    fn test_name_agrees_in_number_and_case() {
        let report = converter()
            .convert_text("It costs 2 DOLLARS or 4 DOLLARS", "USD", "GBP")
            .unwrap();
        assert_eq!(report.text, "It costs 1 POUND or 2 POUNDS");
    }

    #[test]
    fn test_lowercase_name_with_fold_case() {
        let converter = converter_with(ExtractorConfig {
            fold_case: true,
            ..ExtractorConfig::default()
        });
        let report = converter.convert_text("about 20 dollars", "USD", "GBP").unwrap();
        assert_eq!(report.text, "about 10 pounds");
    }

    #[test]
    fn test_indian_style_survives_conversion() {
        let report = converter()
            .convert_text("₹12,34,567.89 total", "INR", "USD")
            .unwrap();
        assert_eq!(report.text, "$15,432.09 total");
    }

    #[test]
    fn test_missing_rate_leaves_amount_untouched() {
        let report = converter().convert_text("$5 each", "USD", "JPY").unwrap();
        assert_eq!(report.text, "$5 each");
        assert_eq!(report.converted, 0);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].span, TextSpan::new(1, 2));
        assert!(report.failures[0].message.contains("JPY"));
    }

    #[test]
    fn test_extraction_failures_are_carried_through() {
        let report = converter()
            .convert_text("USD 1,2.3_4 and USD 7", "USD", "EUR")
            .unwrap();
        assert_eq!(report.text, "USD 1,2.3_4 and EUR 3.5");
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].symbol, "USD");
    }

    #[test]
    fn test_unsupported_target_currency() {
        let err = converter().convert_text("$5", "USD", "XYZ").unwrap_err();
        assert!(matches!(err, crate::errors::Error::UnsupportedCurrency(_)));
    }

    #[test]
    fn test_match_case() {
        assert_eq!(match_case("Pound", "DOLLAR"), "POUND");
        assert_eq!(match_case("Pound", "dollar"), "pound");
        assert_eq!(match_case("Pound", "Dollar"), "Pound");
    }
}
