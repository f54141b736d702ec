//! Recovery of the digit run next to a located surface form.
//!
//! A scan starts at one edge of an occurrence and walks away from it one
//! character at a time:
//!
//! - digits are consumed;
//! - whitespace touching the symbol is stepped over unless spacing is
//!   forbidden, in which case the side has no amount;
//! - a separator is consumed only when a digit has already been consumed
//!   and the next character in the same direction is a digit;
//! - anything else, or the edge of the text, ends the scan.

use serde::{Deserialize, Serialize};

use super::amounts_model::{Occurrence, Placement, RawAmount, Side, Spacing, TextSpan};

/// How a symbol usable on both sides picks between two candidate amounts.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BothSidesPolicy {
    /// Take the left amount if there is one, else the right one.
    #[default]
    PreferLeft,
    /// When both sides hold an amount, take the one touching the symbol
    /// without whitespace; ties go left.
    PreferAdjacent,
}

/// Scans one side of the occurrence at `boundary`.
///
/// For [`Side::Left`] `boundary` is the occurrence start and the scan reads
/// `chars[boundary - 1]` first; for [`Side::Right`] it is the occurrence end
/// and the scan reads `chars[boundary]` first.
pub fn scan_side(
    chars: &[char],
    boundary: usize,
    side: Side,
    spacing: Spacing,
    separators: &[char],
) -> Option<RawAmount> {
    let at = |step: usize| -> Option<char> {
        match side {
            Side::Right => chars.get(boundary.checked_add(step)?).copied(),
            Side::Left => boundary
                .checked_sub(step + 1)
                .and_then(|i| chars.get(i).copied()),
        }
    };

    let mut steps = 0;
    let mut digits = 0;
    while let Some(c) = at(steps) {
        if c.is_ascii_digit() {
            digits += 1;
        } else if steps == 0 && c.is_whitespace() {
            if !spacing.allows_space() {
                return None;
            }
        } else if separators.contains(&c)
            && (digits > 0 || c.is_whitespace())
            && at(steps + 1).is_some_and(|next| next.is_ascii_digit())
        {
            // separator followed by a digit belongs to the number
        } else {
            break;
        }
        steps += 1;
    }

    if digits == 0 {
        return None;
    }

    let consumed = match side {
        Side::Right => TextSpan::new(boundary, boundary + steps),
        Side::Left => TextSpan::new(boundary - steps, boundary),
    };
    let span = trim_span(chars, consumed);
    let adjacent = match side {
        Side::Right => span.start == boundary,
        Side::Left => span.end == boundary,
    };

    Some(RawAmount {
        text: chars[span.start..span.end].iter().collect(),
        span,
        side,
        adjacent,
    })
}

fn trim_span(chars: &[char], span: TextSpan) -> TextSpan {
    let mut start = span.start;
    let mut end = span.end;
    while start < end && chars[start].is_whitespace() {
        start += 1;
    }
    while end > start && chars[end - 1].is_whitespace() {
        end -= 1;
    }
    TextSpan::new(start, end)
}

/// Recovers the amount belonging to `occurrence`, trying the sides its
/// placement allows.
///
/// Digits overlapping a `claimed` span already belong to another occurrence,
/// so that side counts as empty.
pub fn scan_occurrence(
    chars: &[char],
    occurrence: &Occurrence,
    separators: &[char],
    policy: BothSidesPolicy,
    claimed: &[TextSpan],
) -> Option<RawAmount> {
    let spacing = occurrence.form.spacing;
    let unclaimed = |raw: RawAmount| {
        if claimed.iter().any(|span| span.overlaps(&raw.span)) {
            log::debug!(
                "Amount '{}' at {} already belongs to an earlier symbol",
                raw.text,
                raw.span.start
            );
            None
        } else {
            Some(raw)
        }
    };
    let left = || {
        scan_side(chars, occurrence.span.start, Side::Left, spacing, separators)
            .and_then(&unclaimed)
    };
    let right = || {
        scan_side(chars, occurrence.span.end, Side::Right, spacing, separators)
            .and_then(&unclaimed)
    };

    match occurrence.form.placement {
        Placement::Before => right(),
        Placement::After => left(),
        Placement::Both => match policy {
            BothSidesPolicy::PreferLeft => left().or_else(right),
            BothSidesPolicy::PreferAdjacent => match (left(), right()) {
                (Some(l), Some(r)) if !l.adjacent && r.adjacent => Some(r),
                (Some(l), _) => Some(l),
                (None, r) => r,
            },
        },
    }
}
