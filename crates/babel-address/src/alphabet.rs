//! The 29-symbol page alphabet and its digit mapping.
//!
//! ```text
//! a..z  -> 0..25
//! ' '   -> 26
//! ','   -> 27
//! '.'   -> 28
//! ```

use crate::limits::ALPHABET_LEN;

/// Page symbols in digit order.
pub const ALPHABET: &[u8; ALPHABET_LEN] = b"abcdefghijklmnopqrstuvwxyz ,.";

/// Digit of the space symbol, also the fallback for unsupported input.
pub const SPACE_DIGIT: u8 = 26;

/// Returns the base-29 digit of an alphabet symbol, or `None` for any other character.
#[inline]
pub fn symbol_to_digit(c: char) -> Option<u8> {
    match c {
        'a'..='z' => Some(c as u8 - b'a'),
        ' ' => Some(SPACE_DIGIT),
        ',' => Some(27),
        '.' => Some(28),
        _ => None,
    }
}

/// Returns the symbol for a base-29 digit.
///
/// Digits outside `0..29` map to space rather than failing.
#[inline]
pub fn digit_to_symbol(d: u8) -> char {
    ALPHABET
        .get(d as usize)
        .map(|&b| b as char)
        .unwrap_or(' ')
}

/// Returns true if `c` is one of the 29 page symbols.
#[inline]
pub fn is_symbol(c: char) -> bool {
    symbol_to_digit(c).is_some()
}
