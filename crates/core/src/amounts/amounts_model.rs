use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::amounts_errors::AmountError;

/// Which spelling of a currency a surface form is.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SurfaceKind {
    IsoCode,
    Symbol,
    NativeSymbol,
    /// Full uppercased name including the demonym, e.g. "US DOLLAR"
    FullName,
    /// Demonym-stripped singular name, e.g. "DOLLAR"
    Name,
    /// Demonym-stripped plural name, e.g. "DOLLARS"
    PluralName,
}

impl SurfaceKind {
    pub fn is_name(self) -> bool {
        matches!(self, Self::FullName | Self::Name | Self::PluralName)
    }
}

/// Where a surface form may stand relative to its amount.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Placement {
    /// The form precedes the amount ("$5"); the amount is found to the right.
    Before,
    /// The form follows the amount ("5 DOLLARS"); the amount is found to the left.
    After,
    /// Either; the left side is tried first.
    Both,
}

/// Whether whitespace may separate a surface form from its amount.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Spacing {
    Forbidden,
    Required,
    Optional,
}

impl Spacing {
    pub fn allows_space(self) -> bool {
        !matches!(self, Self::Forbidden)
    }
}

/// One textual spelling of a currency together with its placement rules.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SurfaceForm {
    pub text: String,
    pub placement: Placement,
    pub spacing: Spacing,
    pub kind: SurfaceKind,
}

/// Half-open `[start, end)` range of character offsets.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextSpan {
    pub start: usize,
    pub end: usize,
}

impl TextSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn overlaps(&self, other: &TextSpan) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// A located match of a surface form in the input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    pub form: SurfaceForm,
    pub span: TextSpan,
    /// Index of the form in generation order, used for tie-breaking.
    pub precedence: usize,
}

/// Side of a surface form on which an amount was found.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Side {
    /// The amount precedes the symbol ("5 $").
    Left,
    /// The amount follows the symbol ("$5").
    Right,
}

/// Digits and separators recovered next to an occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAmount {
    pub text: String,
    pub span: TextSpan,
    pub side: Side,
    /// True when no whitespace separated the digits from the symbol.
    pub adjacent: bool,
}

/// A separator character and its character position within the raw amount.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SeparatorMark {
    pub ch: char,
    pub position: usize,
}

impl SeparatorMark {
    pub fn new(ch: char, position: usize) -> Self {
        Self { ch, position }
    }
}

/// Canonical value of a raw amount plus the lexical style it was written in.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedAmount {
    pub value: Decimal,
    pub decimal_separator: Option<SeparatorMark>,
    pub thousands_separators: Vec<SeparatorMark>,
    pub uses_indian_grouping: bool,
    /// Digits after the decimal separator in the original; 0 without one.
    pub fraction_digits: u32,
    pub raw_text: String,
}

impl NormalizedAmount {
    /// Character used to group digits, if the original grouped them.
    pub fn grouping_char(&self) -> Option<char> {
        self.thousands_separators.first().map(|mark| mark.ch)
    }
}

/// A currency amount found in the text.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PriceMatch {
    pub symbol: String,
    pub symbol_kind: SurfaceKind,
    pub amount: NormalizedAmount,
    /// True when the symbol precedes the amount ("$5").
    pub symbol_placed_before: bool,
    pub symbol_span: TextSpan,
    pub amount_span: TextSpan,
}

impl PriceMatch {
    /// Span covering the symbol, the amount and anything between them.
    pub fn full_span(&self) -> TextSpan {
        TextSpan::new(
            self.symbol_span.start.min(self.amount_span.start),
            self.symbol_span.end.max(self.amount_span.end),
        )
    }
}

/// An occurrence whose adjacent amount could not be interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionFailure {
    pub symbol: String,
    pub raw_text: String,
    pub amount_span: TextSpan,
    pub error: AmountError,
}

/// Output of one pipeline run: matched amounts and per-occurrence failures.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionReport {
    pub matches: Vec<PriceMatch>,
    pub failures: Vec<ExtractionFailure>,
}

impl ExtractionReport {
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty() && self.failures.is_empty()
    }
}
