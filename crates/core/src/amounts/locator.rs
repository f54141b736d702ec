//! Finding every occurrence of every surface form in a text.

use std::cmp::Reverse;

use regex::Regex;

use super::amounts_model::{Occurrence, SurfaceForm, TextSpan};
use crate::errors::Result;

/// Character-indexed view of an input text.
///
/// Keeps a per-character uppercased copy alongside the original so that
/// case-folded matches report the same character offsets.
#[derive(Debug, Clone)]
pub struct TextView<'a> {
    source: &'a str,
    chars: Vec<char>,
    source_offsets: Vec<usize>,
    folded: String,
    folded_offsets: Vec<usize>,
}

impl<'a> TextView<'a> {
    pub fn new(source: &'a str) -> Self {
        let chars: Vec<char> = source.chars().collect();
        let folded: String = chars.iter().map(|&c| fold_char(c)).collect();
        Self {
            source,
            source_offsets: byte_offsets(source),
            folded_offsets: byte_offsets(&folded),
            chars,
            folded,
        }
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The characters covered by `span`, as a string.
    pub fn slice(&self, span: TextSpan) -> String {
        self.chars[span.start..span.end].iter().collect()
    }

    fn haystack(&self, folded: bool) -> (&str, &[usize]) {
        if folded {
            (&self.folded, &self.folded_offsets)
        } else {
            (self.source, &self.source_offsets)
        }
    }
}

/// Uppercases `c` when that maps to exactly one character.
fn fold_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

fn byte_offsets(text: &str) -> Vec<usize> {
    text.char_indices().map(|(i, _)| i).collect()
}

fn char_index(offsets: &[usize], byte: usize) -> usize {
    offsets.binary_search(&byte).unwrap_or_else(|insert_at| insert_at)
}

/// Compiled literal patterns for a currency's surface forms.
#[derive(Debug, Clone)]
pub struct OccurrenceLocator {
    patterns: Vec<(SurfaceForm, Regex)>,
    fold_case: bool,
}

impl OccurrenceLocator {
    /// Compiles one literal pattern per form. Metacharacters such as `$`
    /// are escaped; placement and spacing are carried over untouched.
    pub fn new(forms: &[SurfaceForm], fold_case: bool) -> Result<Self> {
        let patterns = forms
            .iter()
            .map(|form| Ok((form.clone(), Regex::new(&regex::escape(&form.text))?)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            patterns,
            fold_case,
        })
    }

    /// All non-overlapping occurrences, ordered by start offset.
    ///
    /// Where occurrences of different forms overlap, the one starting first
    /// wins; at equal starts the longer match wins, then the earlier form.
    pub fn locate(&self, view: &TextView<'_>) -> Vec<Occurrence> {
        let mut found = Vec::new();
        for (precedence, (form, pattern)) in self.patterns.iter().enumerate() {
            let (haystack, offsets) = view.haystack(self.fold_case && form.kind.is_name());
            for m in pattern.find_iter(haystack) {
                found.push(Occurrence {
                    form: form.clone(),
                    span: TextSpan::new(
                        char_index(offsets, m.start()),
                        char_index(offsets, m.end()),
                    ),
                    precedence,
                });
            }
        }

        found.sort_by_key(|o| (o.span.start, Reverse(o.span.len()), o.precedence));

        let mut accepted: Vec<Occurrence> = Vec::with_capacity(found.len());
        for occurrence in found {
            if accepted
                .last()
                .is_some_and(|prev| prev.span.overlaps(&occurrence.span))
            {
                log::debug!(
                    "Dropping '{}' at {} overlapped by an earlier form",
                    occurrence.form.text,
                    occurrence.span.start
                );
                continue;
            }
            accepted.push(occurrence);
        }
        accepted
    }
}
