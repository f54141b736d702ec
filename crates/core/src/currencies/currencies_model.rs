use serde::{Deserialize, Serialize};

/// Reference data for one currency, keyed by its ISO 4217 code.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyRecord {
    /// Filled from the catalog key when absent from the record itself.
    #[serde(default)]
    pub code: String,
    /// Full English name including the demonym, e.g. "US Dollar"
    pub name: String,
    /// Adjective naming the issuing country, e.g. "US"; may be empty
    #[serde(default)]
    pub demonym: String,
    pub major_single: String,
    pub major_plural: String,
    pub symbol: String,
    pub symbol_native: String,
}

impl CurrencyRecord {
    /// The name with the demonym removed, e.g. "US Dollar" -> "Dollar".
    pub fn bare_name(&self) -> String {
        if self.demonym.is_empty() {
            return self.name.trim().to_string();
        }
        self.name.replace(&self.demonym, "").trim().to_string()
    }

    /// The demonym-stripped name with the major unit pluralized.
    pub fn bare_plural_name(&self) -> String {
        let bare = self.bare_name();
        if self.major_single.is_empty() {
            return bare;
        }
        bare.replace(&self.major_single, &self.major_plural)
            .trim()
            .to_string()
    }
}
