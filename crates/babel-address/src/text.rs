//! Canonicalization of arbitrary text into a fixed-length page.

use std::fmt;

use crate::alphabet::{SPACE_DIGIT, digit_to_symbol, is_symbol, symbol_to_digit};
use crate::limits::PAGE_LEN;

/// A page of exactly [`PAGE_LEN`] alphabet symbols.
///
/// Only produced by [`normalize`] or by decoding an address, so every
/// character is guaranteed to be one of the 29 page symbols.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedText(String);

impl NormalizedText {
    /// Builds a page from exactly `PAGE_LEN` digits, most significant first.
    pub(crate) fn from_digits(digits: &[u8]) -> Self {
        debug_assert_eq!(digits.len(), PAGE_LEN);
        Self(digits.iter().map(|&d| digit_to_symbol(d)).collect())
    }

    /// Returns the page as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the base-29 digits of the page, first character first.
    pub fn digits(&self) -> Vec<u8> {
        self.0
            .chars()
            .map(|c| symbol_to_digit(c).unwrap_or(SPACE_DIGIT))
            .collect()
    }

    /// Returns the page with trailing padding removed.
    pub fn trimmed(&self) -> &str {
        self.0.trim_end_matches(' ')
    }

    /// Consumes the page and returns the underlying string.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Number of symbols on the page (always [`PAGE_LEN`]).
    pub fn len(&self) -> usize {
        PAGE_LEN
    }

    /// Always false; a page is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NormalizedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<NormalizedText> for String {
    fn from(text: NormalizedText) -> Self {
        text.0
    }
}

/// Normalizes arbitrary text into a page.
///
/// 1. Lowercases (full Unicode mapping, so one char may become several)
/// 2. Replaces every non-alphabet character with space
/// 3. Pads with spaces or truncates to exactly `PAGE_LEN` characters
///
/// Never fails. Characters past position `PAGE_LEN` are discarded.
pub fn normalize(text: &str) -> NormalizedText {
    let mut page: String = text
        .to_lowercase()
        .chars()
        .map(|c| if is_symbol(c) { c } else { ' ' })
        .take(PAGE_LEN)
        .collect();

    // All chars are ASCII at this point, so byte length == char count.
    let missing = PAGE_LEN - page.len();
    page.extend(std::iter::repeat_n(' ', missing));

    NormalizedText(page)
}
