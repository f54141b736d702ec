//! Interpretation of raw amount strings written in any grouping style.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::amounts_errors::AmountError;
use super::amounts_model::{NormalizedAmount, SeparatorMark};
use crate::constants::{
    DECIMAL_SEPARATORS, FALLBACK_FRACTION_DIGITS, PREFERRED_DECIMAL_SEPARATOR, SEPARATORS,
};

/// Separator tables and tie-break rules used to read and write amounts.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NumberFormat {
    /// Characters accepted between digits
    pub separators: Vec<char>,
    /// Characters that may mark the fractional part
    pub decimal_separators: Vec<char>,
    /// Decimal mark assumed for a lone separator followed by three digits
    pub preferred_decimal: Option<char>,
    /// Fraction digits kept when the original had no decimal part
    pub fallback_fraction_digits: u32,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            separators: SEPARATORS.to_vec(),
            decimal_separators: DECIMAL_SEPARATORS.to_vec(),
            preferred_decimal: Some(PREFERRED_DECIMAL_SEPARATOR),
            fallback_fraction_digits: FALLBACK_FRACTION_DIGITS,
        }
    }
}

impl NumberFormat {
    pub fn is_separator(&self, c: char) -> bool {
        self.separators.contains(&c)
    }

    /// Parses `raw` into a value plus the separator layout it was written with.
    pub fn normalize(&self, raw: &str) -> Result<NormalizedAmount, AmountError> {
        let chars: Vec<char> = raw.chars().collect();

        let mut unique: Vec<char> = Vec::new();
        for &c in &chars {
            if self.is_separator(c) {
                if !unique.contains(&c) {
                    unique.push(c);
                }
            } else if !c.is_ascii_digit() {
                return Err(AmountError::InvalidCharacter {
                    ch: c,
                    raw: raw.to_string(),
                });
            }
        }

        match unique.as_slice() {
            [] => Ok(NormalizedAmount {
                value: parse_decimal(raw, "")?,
                decimal_separator: None,
                thousands_separators: Vec::new(),
                uses_indian_grouping: false,
                fraction_digits: 0,
                raw_text: raw.to_string(),
            }),
            [separator] => self.normalize_single(raw, &chars, *separator),
            [thousands, decimal] => self.normalize_pair(raw, &chars, *thousands, *decimal),
            _ => Err(AmountError::AmbiguousSeparators(raw.to_string())),
        }
    }

    /// One distinct separator: grouping when repeated or when it sits where
    /// a thousands group would start, otherwise a decimal mark.
    fn normalize_single(
        &self,
        raw: &str,
        chars: &[char],
        separator: char,
    ) -> Result<NormalizedAmount, AmountError> {
        let positions = positions_of(chars, separator);
        let at_group_boundary = chars
            .len()
            .checked_sub(4)
            .is_some_and(|i| chars[i] == separator);
        let is_grouping = positions.len() > 1
            || (at_group_boundary && self.preferred_decimal != Some(separator));

        if is_grouping {
            let digits: String = chars.iter().filter(|c| **c != separator).collect();
            return Ok(NormalizedAmount {
                value: parse_decimal(&digits, "")?,
                decimal_separator: None,
                thousands_separators: positions
                    .into_iter()
                    .map(|p| SeparatorMark::new(separator, p))
                    .collect(),
                uses_indian_grouping: uses_indian_grouping(raw, separator),
                fraction_digits: 0,
                raw_text: raw.to_string(),
            });
        }

        if !self.decimal_separators.contains(&separator) {
            return Err(AmountError::InvalidDecimalSeparator {
                ch: separator,
                raw: raw.to_string(),
            });
        }

        let position = positions[positions.len() - 1];
        let whole: String = chars[..position].iter().collect();
        let fraction: String = chars[position + 1..].iter().collect();
        Ok(NormalizedAmount {
            value: parse_decimal(&whole, &fraction)?,
            decimal_separator: Some(SeparatorMark::new(separator, position)),
            thousands_separators: Vec::new(),
            uses_indian_grouping: false,
            fraction_digits: fraction.chars().count() as u32,
            raw_text: raw.to_string(),
        })
    }

    /// Two distinct separators: the later one is the decimal mark.
    fn normalize_pair(
        &self,
        raw: &str,
        chars: &[char],
        thousands: char,
        decimal: char,
    ) -> Result<NormalizedAmount, AmountError> {
        if !self.decimal_separators.contains(&decimal) {
            return Err(AmountError::InvalidDecimalSeparator {
                ch: decimal,
                raw: raw.to_string(),
            });
        }

        let decimal_positions = positions_of(chars, decimal);
        let thousands_positions = positions_of(chars, thousands);
        let position = match decimal_positions.as_slice() {
            [p] if thousands_positions.iter().all(|t| t < p) => *p,
            _ => return Err(AmountError::AmbiguousSeparators(raw.to_string())),
        };

        let whole: String = chars[..position]
            .iter()
            .filter(|c| **c != thousands)
            .collect();
        let fraction: String = chars[position + 1..].iter().collect();
        Ok(NormalizedAmount {
            value: parse_decimal(&whole, &fraction)?,
            decimal_separator: Some(SeparatorMark::new(decimal, position)),
            thousands_separators: thousands_positions
                .into_iter()
                .map(|p| SeparatorMark::new(thousands, p))
                .collect(),
            uses_indian_grouping: uses_indian_grouping(raw, thousands),
            fraction_digits: fraction.chars().count() as u32,
            raw_text: raw.to_string(),
        })
    }
}

fn positions_of(chars: &[char], target: char) -> Vec<usize> {
    chars
        .iter()
        .enumerate()
        .filter(|(_, c)| **c == target)
        .map(|(i, _)| i)
        .collect()
}

/// True when an interior group (neither first nor last) has two digits.
fn uses_indian_grouping(raw: &str, thousands: char) -> bool {
    let groups: Vec<&str> = raw.split(thousands).collect();
    groups.len() > 2
        && groups[1..groups.len() - 1]
            .iter()
            .any(|group| group.chars().count() == 2)
}

fn parse_decimal(whole: &str, fraction: &str) -> Result<Decimal, AmountError> {
    let whole = if whole.is_empty() && !fraction.is_empty() {
        "0"
    } else {
        whole
    };
    let text = if fraction.is_empty() {
        whole.to_string()
    } else {
        format!("{}.{}", whole, fraction)
    };
    Decimal::from_str(&text).map_err(|_| AmountError::InvalidNumber(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn normalize(raw: &str) -> Result<NormalizedAmount, AmountError> {
        NumberFormat::default().normalize(raw)
    }

    #[test]
    fn test_plain_digits() {
        let amount = normalize("10000").unwrap();
        assert_eq!(amount.value, dec!(10000));
        assert!(amount.decimal_separator.is_none());
        assert!(amount.thousands_separators.is_empty());
        assert_eq!(amount.fraction_digits, 0);
    }

    #[test]
    fn test_single_thousands_separator() {
        let amount = normalize("1,000").unwrap();
        assert_eq!(amount.value, dec!(1000));
        assert_eq!(amount.thousands_separators, vec![SeparatorMark::new(',', 1)]);
        assert!(amount.decimal_separator.is_none());
        assert!(!amount.uses_indian_grouping);
    }

    #[test]
    fn test_ten_thousand_with_comma() {
        let amount = normalize("10,000").unwrap();
        assert_eq!(amount.value, dec!(10000));
        assert_eq!(amount.thousands_separators.len(), 1);
        assert!(amount.decimal_separator.is_none());
    }

    #[test]
    fn test_lone_period_with_three_digits_is_decimal() {
        let amount = normalize("3.141").unwrap();
        assert_eq!(amount.value, dec!(3.141));
        assert_eq!(amount.decimal_separator, Some(SeparatorMark::new('.', 1)));
        assert_eq!(amount.fraction_digits, 3);
    }

    #[test]
    fn test_short_fraction_is_decimal() {
        let amount = normalize("12,5").unwrap();
        assert_eq!(amount.value, dec!(12.5));
        assert_eq!(amount.decimal_separator, Some(SeparatorMark::new(',', 2)));
        assert_eq!(amount.fraction_digits, 1);
    }

    #[test]
    fn test_repeated_separator_is_grouping() {
        let amount = normalize("1.234.567").unwrap();
        assert_eq!(amount.value, dec!(1234567));
        assert_eq!(
            amount.thousands_separators,
            vec![SeparatorMark::new('.', 1), SeparatorMark::new('.', 5)]
        );
    }

    #[test]
    fn test_space_and_apostrophe_grouping() {
        assert_eq!(normalize("1 000").unwrap().value, dec!(1000));
        assert_eq!(normalize("1'234'567").unwrap().value, dec!(1234567));
    }

    #[test]
    fn test_two_separators_english_style() {
        let amount = normalize("1,234,567.89").unwrap();
        assert_eq!(amount.value, dec!(1234567.89));
        assert_eq!(amount.decimal_separator, Some(SeparatorMark::new('.', 9)));
        assert_eq!(
            amount.thousands_separators,
            vec![SeparatorMark::new(',', 1), SeparatorMark::new(',', 5)]
        );
        assert_eq!(amount.fraction_digits, 2);
        assert!(!amount.uses_indian_grouping);
    }

    #[test]
    fn test_two_separators_continental_style() {
        let amount = normalize("234.000.000,20").unwrap();
        assert_eq!(amount.value, dec!(234000000.20));
        assert_eq!(amount.decimal_separator, Some(SeparatorMark::new(',', 11)));
    }

    #[test]
    fn test_indian_grouping_detected() {
        let amount = normalize("12,34,567.89").unwrap();
        assert_eq!(amount.value, dec!(1234567.89));
        assert!(amount.uses_indian_grouping);
    }

    #[test]
    fn test_indian_grouping_without_fraction() {
        let amount = normalize("1,00,000").unwrap();
        assert_eq!(amount.value, dec!(100000));
        assert!(amount.uses_indian_grouping);
    }

    #[test]
    fn test_three_separators_rejected() {
        assert_eq!(
            normalize("1,2.3_4"),
            Err(AmountError::AmbiguousSeparators("1,2.3_4".to_string()))
        );
    }

    #[test]
    fn test_invalid_character_rejected() {
        assert_eq!(
            normalize("12a"),
            Err(AmountError::InvalidCharacter {
                ch: 'a',
                raw: "12a".to_string()
            })
        );
    }

    #[test]
    fn test_underscore_cannot_be_decimal_mark() {
        assert!(matches!(
            normalize("1.000_5"),
            Err(AmountError::InvalidDecimalSeparator { ch: '_', .. })
        ));
        assert!(matches!(
            normalize("12_5"),
            Err(AmountError::InvalidDecimalSeparator { ch: '_', .. })
        ));
    }

    #[test]
    fn test_thousands_after_decimal_is_ambiguous() {
        assert!(matches!(
            normalize("1,234.5,6"),
            Err(AmountError::AmbiguousSeparators(_))
        ));
    }

    #[test]
    fn test_custom_preferred_decimal() {
        let format = NumberFormat {
            preferred_decimal: Some(','),
            ..NumberFormat::default()
        };
        let amount = format.normalize("1.000").unwrap();
        assert_eq!(amount.value, dec!(1000));
        assert!(amount.decimal_separator.is_none());

        let amount = format.normalize("1,000").unwrap();
        assert_eq!(amount.value, dec!(1.000));
        assert_eq!(amount.fraction_digits, 3);
    }

    #[test]
    fn test_empty_input_is_not_a_number() {
        assert!(matches!(normalize(""), Err(AmountError::InvalidNumber(_))));
    }
}
