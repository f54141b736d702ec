use serde::{Deserialize, Serialize};

use super::amounts_model::{ExtractionFailure, ExtractionReport, PriceMatch, Side, TextSpan};
use super::locator::{OccurrenceLocator, TextView};
use super::number_format::NumberFormat;
use super::scanner::{scan_occurrence, BothSidesPolicy};
use super::surface_forms::surface_forms;
use crate::currencies::{CurrencyLookup, CurrencyRecord};
use crate::errors::Result;

/// Options for one extraction run.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExtractorConfig {
    pub number_format: NumberFormat,
    /// Match currency names regardless of case.
    pub fold_case: bool,
    pub both_sides: BothSidesPolicy,
}

/// Finds the amounts written in one currency.
///
/// Built once per currency; holds no state between texts, so one extractor
/// can be shared across threads.
#[derive(Debug, Clone)]
pub struct AmountExtractor {
    currency_code: String,
    locator: OccurrenceLocator,
    config: ExtractorConfig,
}

impl AmountExtractor {
    pub fn new(currency: &CurrencyRecord, config: ExtractorConfig) -> Result<Self> {
        let forms = surface_forms(currency);
        let locator = OccurrenceLocator::new(&forms, config.fold_case)?;
        log::debug!(
            "Surface forms for {}: {:?}",
            currency.code,
            forms.iter().map(|f| f.text.as_str()).collect::<Vec<_>>()
        );
        Ok(Self {
            currency_code: currency.code.clone(),
            locator,
            config,
        })
    }

    /// Looks `code` up in `currencies` and builds an extractor for it.
    pub fn for_code(
        code: &str,
        currencies: &dyn CurrencyLookup,
        config: ExtractorConfig,
    ) -> Result<Self> {
        let currency = currencies.get_currency(code)?;
        Self::new(&currency, config)
    }

    /// Extracts every amount in `text`, ordered by symbol position.
    ///
    /// An amount that cannot be interpreted is reported as a failure and
    /// does not stop the remaining occurrences from being processed.
    pub fn extract(&self, text: &str) -> ExtractionReport {
        let view = TextView::new(text);
        let format = &self.config.number_format;
        let mut report = ExtractionReport::default();
        let mut claimed: Vec<TextSpan> = Vec::new();

        for occurrence in self.locator.locate(&view) {
            let Some(raw) = scan_occurrence(
                view.chars(),
                &occurrence,
                &format.separators,
                self.config.both_sides,
                &claimed,
            ) else {
                log::debug!(
                    "No amount next to '{}' at {}",
                    occurrence.form.text,
                    occurrence.span.start
                );
                continue;
            };
            claimed.push(raw.span);

            match format.normalize(&raw.text) {
                Ok(amount) => report.matches.push(PriceMatch {
                    symbol: occurrence.form.text.clone(),
                    symbol_kind: occurrence.form.kind,
                    amount,
                    symbol_placed_before: raw.side == Side::Right,
                    symbol_span: occurrence.span,
                    amount_span: raw.span,
                }),
                Err(error) => {
                    log::warn!(
                        "Skipping amount '{}' next to '{}': {}",
                        raw.text,
                        occurrence.form.text,
                        error
                    );
                    report.failures.push(ExtractionFailure {
                        symbol: occurrence.form.text.clone(),
                        raw_text: raw.text,
                        amount_span: raw.span,
                        error,
                    });
                }
            }
        }

        log::debug!(
            "Extracted {} {} amount(s), {} failure(s)",
            report.matches.len(),
            self.currency_code,
            report.failures.len()
        );
        report
    }
}

/// Extracts all amounts in `text` written in `currency_code`, using the
/// default configuration.
pub fn extract_amounts(
    text: &str,
    currency_code: &str,
    currencies: &dyn CurrencyLookup,
) -> Result<ExtractionReport> {
    let extractor =
        AmountExtractor::for_code(currency_code, currencies, ExtractorConfig::default())?;
    Ok(extractor.extract(text))
}
