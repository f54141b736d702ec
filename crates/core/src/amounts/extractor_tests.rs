//! Tests for the extraction pipeline against the embedded currency catalog.

#[cfg(test)]
mod tests {
    use crate::amounts::{
        extract_amounts, AmountError, AmountExtractor, BothSidesPolicy, ExtractorConfig,
        SeparatorMark, SurfaceKind, TextSpan,
    };
    use crate::currencies::{CurrencyCatalog, CurrencyRecord};
    use crate::errors::Error;
    use rust_decimal_macros::dec;

    fn catalog() -> CurrencyCatalog {
        CurrencyCatalog::embedded().unwrap()
    }

    fn extractor(code: &str, config: ExtractorConfig) -> AmountExtractor {
        AmountExtractor::for_code(code, &catalog(), config).unwrap()
    }

    // =========================================================================
    // Placement
    // =========================================================================

    #[test]
    fn test_dollar_amount_before_unrelated_currency() {
        let report = extract_amounts("$1,000 and 50 EUR", "USD", &catalog()).unwrap();
        assert!(report.failures.is_empty());
        assert_eq!(report.matches.len(), 1);

        let m = &report.matches[0];
        assert_eq!(m.symbol, "$");
        assert_eq!(m.symbol_kind, SurfaceKind::Symbol);
        assert!(m.symbol_placed_before);
        assert_eq!(m.amount.value, dec!(1000));
        assert_eq!(m.amount.raw_text, "1,000");
        assert_eq!(m.amount.thousands_separators, vec![SeparatorMark::new(',', 1)]);
        assert!(m.amount.decimal_separator.is_none());
        assert_eq!(m.symbol_span, TextSpan::new(0, 1));
        assert_eq!(m.amount_span, TextSpan::new(1, 6));
    }

    #[test]
    fn test_every_form_is_found_in_order() {
        let report =
            extract_amounts("Pay 5 USD or USD 10, or 3 DOLLARS.", "USD", &catalog()).unwrap();
        let found: Vec<_> = report
            .matches
            .iter()
            .map(|m| (m.symbol_kind, m.amount.value, m.symbol_placed_before))
            .collect();
        assert_eq!(
            found,
            vec![
                (SurfaceKind::IsoCode, dec!(5), false),
                (SurfaceKind::IsoCode, dec!(10), true),
                (SurfaceKind::PluralName, dec!(3), false),
            ]
        );
    }

    #[test]
    fn test_full_name_with_demonym() {
        let report = extract_amounts("worth 12.50 US DOLLAR today", "USD", &catalog()).unwrap();
        assert_eq!(report.matches.len(), 1);
        assert_eq!(report.matches[0].symbol, "US DOLLAR");
        assert_eq!(report.matches[0].symbol_kind, SurfaceKind::FullName);
        assert_eq!(report.matches[0].amount.value, dec!(12.50));
    }

    #[test]
    fn test_no_currency_yields_empty_report() {
        let report = extract_amounts("Nothing to see, just 42 apples.", "USD", &catalog()).unwrap();
        assert!(report.is_empty());
    }

    #[test]
    fn test_symbol_without_digits_yields_nothing() {
        let report = extract_amounts("Prices in $ are shown below", "USD", &catalog()).unwrap();
        assert!(report.is_empty());
    }

    #[test]
    fn test_unknown_currency_is_an_error() {
        let err = extract_amounts("5 XYZ", "XYZ", &catalog()).unwrap_err();
        assert!(matches!(err, Error::UnsupportedCurrency(_)));
    }

    // =========================================================================
    // Spacing and overlap
    // =========================================================================

    #[test]
    fn test_native_symbol_forbids_space() {
        let cny = extractor("CNY", ExtractorConfig::default());

        assert!(cny.extract("¥ 50").matches.is_empty());

        let report = cny.extract("¥50");
        assert_eq!(report.matches.len(), 1);
        assert_eq!(report.matches[0].symbol_kind, SurfaceKind::NativeSymbol);
        assert_eq!(report.matches[0].amount.value, dec!(50));
    }

    #[test]
    fn test_native_euro_sign_must_touch_amount() {
        let record = CurrencyRecord {
            code: "EUR".to_string(),
            name: "Euro".to_string(),
            demonym: String::new(),
            major_single: "Euro".to_string(),
            major_plural: "Euros".to_string(),
            symbol: String::new(),
            symbol_native: "€".to_string(),
        };
        let eur = AmountExtractor::new(&record, ExtractorConfig::default()).unwrap();

        assert!(eur.extract("€ 50").is_empty());

        let report = eur.extract("€50");
        assert_eq!(report.matches.len(), 1);
        assert_eq!(report.matches[0].symbol_kind, SurfaceKind::NativeSymbol);
        assert_eq!(report.matches[0].amount.value, dec!(50));
    }

    #[test]
    fn test_single_char_symbol_accepts_space() {
        let report = extract_amounts("€ 50", "EUR", &catalog()).unwrap();
        assert_eq!(report.matches.len(), 1);
        assert_eq!(report.matches[0].amount_span, TextSpan::new(2, 4));
    }

    #[test]
    fn test_contained_native_symbol_is_not_matched_twice() {
        let report = extract_amounts("Only CA$5 today", "CAD", &catalog()).unwrap();
        assert_eq!(report.matches.len(), 1);
        assert_eq!(report.matches[0].symbol, "CA$");
    }

    #[test]
    fn test_amount_is_claimed_once() {
        let report = extract_amounts("$5 USD", "USD", &catalog()).unwrap();
        assert_eq!(report.matches.len(), 1);
        assert_eq!(report.matches[0].symbol, "$");
    }

    #[test]
    fn test_space_separated_price_list() {
        let report = extract_amounts("Tickets: $20 $30 $40", "USD", &catalog()).unwrap();
        assert!(report.failures.is_empty());
        let found: Vec<_> = report
            .matches
            .iter()
            .map(|m| (m.amount.value, m.symbol_placed_before, m.amount_span))
            .collect();
        assert_eq!(
            found,
            vec![
                (dec!(20), true, TextSpan::new(10, 12)),
                (dec!(30), true, TextSpan::new(14, 16)),
                (dec!(40), true, TextSpan::new(18, 20)),
            ]
        );
    }

    #[test]
    fn test_numbers_on_both_sides_prefer_left() {
        let report = extract_amounts("25 $ 35", "USD", &catalog()).unwrap();
        assert_eq!(report.matches.len(), 1);
        assert_eq!(report.matches[0].amount.value, dec!(25));
        assert!(!report.matches[0].symbol_placed_before);
    }

    #[test]
    fn test_prefer_adjacent_policy_picks_touching_amount() {
        let usd = extractor(
            "USD",
            ExtractorConfig {
                both_sides: BothSidesPolicy::PreferAdjacent,
                ..ExtractorConfig::default()
            },
        );
        let report = usd.extract("25 $35 bills");
        assert_eq!(report.matches.len(), 1);
        assert_eq!(report.matches[0].amount.value, dec!(35));
        assert!(report.matches[0].symbol_placed_before);
    }

    // =========================================================================
    // Case folding
    // =========================================================================

    #[test]
    fn test_names_need_case_folding() {
        let text = "It costs 20 dollars";
        assert!(extractor("USD", ExtractorConfig::default()).extract(text).is_empty());

        let folded = extractor(
            "USD",
            ExtractorConfig {
                fold_case: true,
                ..ExtractorConfig::default()
            },
        );
        let report = folded.extract(text);
        assert_eq!(report.matches.len(), 1);
        assert_eq!(report.matches[0].symbol_kind, SurfaceKind::PluralName);
        assert_eq!(report.matches[0].amount.value, dec!(20));
        assert_eq!(report.matches[0].symbol_span, TextSpan::new(12, 19));
    }

    // =========================================================================
    // Number styles
    // =========================================================================

    #[test]
    fn test_indian_grouping_through_pipeline() {
        let report = extract_amounts("₹12,34,567.89 or Rs 1,00,000", "INR", &catalog()).unwrap();
        assert_eq!(report.matches.len(), 2);

        let first = &report.matches[0].amount;
        assert_eq!(first.value, dec!(1234567.89));
        assert!(first.uses_indian_grouping);

        let second = &report.matches[1].amount;
        assert_eq!(second.value, dec!(100000));
        assert!(second.uses_indian_grouping);
    }

    #[test]
    fn test_space_grouped_euro_amount() {
        let report = extract_amounts("Total: 1 234 567,50 €", "EUR", &catalog()).unwrap();
        assert_eq!(report.matches.len(), 1);
        let amount = &report.matches[0].amount;
        assert_eq!(amount.value, dec!(1234567.50));
        assert_eq!(amount.decimal_separator, Some(SeparatorMark::new(',', 9)));
        assert_eq!(amount.thousands_separators.len(), 2);
    }

    #[test]
    fn test_failures_do_not_stop_other_amounts() {
        let report = extract_amounts("USD 1,2.3_4 and USD 7", "USD", &catalog()).unwrap();

        assert_eq!(report.failures.len(), 1);
        let failure = &report.failures[0];
        assert_eq!(failure.raw_text, "1,2.3_4");
        assert_eq!(
            failure.error,
            AmountError::AmbiguousSeparators("1,2.3_4".to_string())
        );

        assert_eq!(report.matches.len(), 1);
        assert_eq!(report.matches[0].amount.value, dec!(7));
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let usd = extractor("USD", ExtractorConfig::default());
        let text = "$3 then 4 USD then USD 5";
        assert_eq!(usd.extract(text), usd.extract(text));
        assert_eq!(usd.extract(text).matches.len(), 3);
    }
}
