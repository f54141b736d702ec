use std::collections::BTreeMap;

use super::currencies_model::CurrencyRecord;
use super::currencies_traits::CurrencyLookup;
use crate::errors::{Error, Result};

const EMBEDDED_CURRENCIES: &str = include_str!("../../data/currencies.json");

/// In-memory currency reference table.
#[derive(Debug, Clone, Default)]
pub struct CurrencyCatalog {
    records: BTreeMap<String, CurrencyRecord>,
}

impl CurrencyCatalog {
    /// Loads the catalog bundled with the crate.
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_CURRENCIES)
    }

    /// Parses a JSON object keyed by ISO code.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: BTreeMap<String, CurrencyRecord> = serde_json::from_str(json)?;
        let records = raw
            .into_iter()
            .map(|(code, mut record)| {
                let code = code.to_uppercase();
                record.code = code.clone();
                (code, record)
            })
            .collect::<BTreeMap<_, _>>();
        log::debug!("Loaded {} currency records", records.len());
        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl CurrencyLookup for CurrencyCatalog {
    fn get_currency(&self, code: &str) -> Result<CurrencyRecord> {
        self.records
            .get(code)
            .cloned()
            .ok_or_else(|| Error::UnsupportedCurrency(code.to_string()))
    }

    fn codes(&self) -> Vec<String> {
        self.records.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = CurrencyCatalog::embedded().unwrap();
        assert!(!catalog.is_empty());

        let usd = catalog.get_currency("USD").unwrap();
        assert_eq!(usd.code, "USD");
        assert_eq!(usd.symbol, "$");
        assert_eq!(usd.bare_plural_name(), "Dollars");
    }

    #[test]
    fn test_unknown_code_is_unsupported() {
        let catalog = CurrencyCatalog::embedded().unwrap();
        let err = catalog.get_currency("XYZ").unwrap_err();
        assert!(matches!(err, Error::UnsupportedCurrency(code) if code == "XYZ"));
        assert!(!catalog.is_valid_code("XYZ"));
    }

    #[test]
    fn test_codes_are_sorted_and_uppercase() {
        let catalog = CurrencyCatalog::from_json(
            r#"{
                "usd": {"name": "US Dollar", "demonym": "US", "majorSingle": "Dollar",
                        "majorPlural": "Dollars", "symbol": "$", "symbolNative": "$"},
                "EUR": {"name": "Euro", "majorSingle": "Euro",
                        "majorPlural": "Euros", "symbol": "€", "symbolNative": "€"}
            }"#,
        )
        .unwrap();
        assert_eq!(catalog.codes(), vec!["EUR".to_string(), "USD".to_string()]);
        assert_eq!(catalog.get_currency("EUR").unwrap().demonym, "");
    }

    #[test]
    fn test_malformed_json_is_reported() {
        let err = CurrencyCatalog::from_json("{not json").unwrap_err();
        assert!(matches!(err, Error::CurrencyData(_)));
    }
}
