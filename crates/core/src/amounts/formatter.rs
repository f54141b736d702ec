//! Rendering a value in the lexical style of a previously parsed amount.

use rust_decimal::{Decimal, RoundingStrategy};

use super::amounts_model::NormalizedAmount;
use super::number_format::NumberFormat;
use crate::constants::{INDIAN_GROUP_SIZE, PRIMARY_GROUP_SIZE};

/// Renders `value` with the grouping character, decimal mark, grouping
/// system and precision recorded in `style`.
///
/// The value is truncated toward zero, never rounded up. Without a decimal
/// mark in the original, up to `format.fallback_fraction_digits` digits are
/// kept and trailing zeros are dropped.
pub fn reformat(value: Decimal, style: &NormalizedAmount, format: &NumberFormat) -> String {
    let grouping = style.grouping_char();
    let has_decimal = style.decimal_separator.is_some();

    let precision = if has_decimal {
        style.fraction_digits
    } else {
        format.fallback_fraction_digits
    };
    let mut truncated = value.round_dp_with_strategy(precision, RoundingStrategy::ToZero);
    if !has_decimal {
        truncated = truncated.normalize();
    }

    let digits = truncated.abs().to_string();
    let (whole, fraction) = match digits.split_once('.') {
        Some((whole, fraction)) => (whole.to_string(), fraction.to_string()),
        None => (digits, String::new()),
    };
    let fraction = if has_decimal {
        format!("{:0<width$}", fraction, width = precision as usize)
    } else {
        fraction
    };

    let mut rendered = String::new();
    if truncated.is_sign_negative() && !truncated.is_zero() {
        rendered.push('-');
    }
    match grouping {
        Some(separator) => rendered.push_str(&group_digits(
            &whole,
            separator,
            style.uses_indian_grouping,
        )),
        None => rendered.push_str(&whole),
    }
    if !fraction.is_empty() {
        let mark = match style.decimal_separator {
            Some(mark) => mark.ch,
            None if grouping == Some('.') => ',',
            None => '.',
        };
        rendered.push(mark);
        rendered.push_str(&fraction);
    }
    rendered
}

/// Groups an unsigned digit string: three digits first, then threes, or
/// twos under the Indian system.
pub fn group_digits(digits: &str, separator: char, indian: bool) -> String {
    let reversed: Vec<char> = digits.chars().rev().collect();
    let mut groups: Vec<String> = Vec::new();
    let mut rest = reversed.as_slice();
    let mut size = PRIMARY_GROUP_SIZE;
    while !rest.is_empty() {
        let (group, tail) = rest.split_at(size.min(rest.len()));
        groups.push(group.iter().rev().collect());
        rest = tail;
        if indian {
            size = INDIAN_GROUP_SIZE;
        }
    }
    groups.reverse();
    groups.join(&separator.to_string())
}
