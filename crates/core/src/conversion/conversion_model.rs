use serde::{Deserialize, Serialize};

use crate::amounts::TextSpan;

/// An amount that was left untouched by a conversion run.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConversionFailure {
    /// The surface form next to the amount, as written in the text.
    pub symbol: String,
    /// Character span of the amount in the input text.
    pub span: TextSpan,
    pub message: String,
}

/// The rewritten text together with what happened to each amount.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConversionReport {
    pub text: String,
    /// Number of amounts rewritten into the target currency.
    pub converted: usize,
    pub failures: Vec<ConversionFailure>,
}

impl ConversionReport {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}
