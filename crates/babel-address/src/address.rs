//! Hexagon-address encoding/decoding.
//!
//! An address is one unsigned integer written in base 36:
//!
//! ```text
//! combined = location * 29^3200 + text_value
//! text_value = sum(digit(c_i) * 29^i)   // i = 0 at the LAST page character
//! ```
//!
//! The location occupies the base-29 digits above position 3200, the page
//! text the 3200 digits below it. Values reach roughly 15,570 bits.

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};
use tracing::{debug, trace};

use crate::coordinate::{Coordinate, pack_location};
use crate::error::AddressError;
use crate::limits::{ADDRESS_RADIX, ALPHABET_LEN, MAX_ADDRESS_LEN, PAGE_LEN};
use crate::text::{NormalizedText, normalize};

lazy_static! {
    /// `29^3200`: the separator between location digits and text digits.
    pub static ref PAGE_MODULUS: BigUint =
        BigUint::from(ALPHABET_LEN as u32).pow(PAGE_LEN as u32);
}

// =============================================================================
// BASE-36
// =============================================================================

/// Writes `value` in base 36, most significant digit first (`0-9a-z`).
///
/// Zero is `"0"`.
pub fn to_base36(value: &BigUint) -> String {
    value.to_str_radix(ADDRESS_RADIX)
}

/// Parses an unsigned base-36 integer.
///
/// Digits are case-insensitive. Unlike a generic radix parser, signs and
/// `_` separators are rejected.
pub fn from_base36(s: &str) -> Result<BigUint, AddressError> {
    if s.is_empty() {
        return Err(AddressError::EmptyAddress);
    }
    if s.len() > MAX_ADDRESS_LEN {
        return Err(AddressError::AddressTooLong {
            len: s.len(),
            max: MAX_ADDRESS_LEN,
        });
    }

    let mut digits = Vec::with_capacity(s.len());
    for (position, ch) in s.chars().enumerate() {
        let digit = ch
            .to_digit(ADDRESS_RADIX)
            .ok_or(AddressError::InvalidDigit { ch, position })?;
        digits.push(digit as u8);
    }

    // Every digit is below the radix and the slice is non-empty.
    BigUint::from_radix_be(&digits, ADDRESS_RADIX).ok_or(AddressError::EmptyAddress)
}

// =============================================================================
// ADDRESS
// =============================================================================

/// A base-36 hexagon address.
///
/// Holds the canonical lowercase string together with the integer it
/// denotes. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HexAddress {
    text: String,
    value: BigUint,
}

impl HexAddress {
    /// Wraps an integer as an address.
    pub fn from_value(value: BigUint) -> Self {
        Self {
            text: to_base36(&value),
            value,
        }
    }

    /// Parses and validates a base-36 address string.
    ///
    /// The stored string is canonical: lowercase, without leading zeros.
    pub fn parse(s: &str) -> Result<Self, AddressError> {
        Ok(Self::from_value(from_base36(s)?))
    }

    /// Returns the address string.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the integer value of the address.
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    /// Returns `floor(value / 29^3200)`, the location the address was built for.
    pub fn location(&self) -> BigUint {
        &self.value / &*PAGE_MODULUS
    }

    /// Returns the location as coordinate fields, if it fits the packing.
    pub fn coordinate(&self) -> Option<Coordinate> {
        Coordinate::unpack(self.location().to_u64()?)
    }

    /// Decodes the page, see [`decode`].
    pub fn decode(&self, coordinate: &Coordinate) -> Result<NormalizedText, AddressError> {
        let location = pack_location(coordinate)?;
        let split = split(&self.value);
        if split.location != BigUint::from(location) {
            debug!(
                expected = location,
                found = %split.location,
                "address location differs from supplied coordinate"
            );
        }
        Ok(split.page)
    }

    /// Decodes the page, rejecting a coordinate the address was not built for.
    pub fn decode_strict(&self, coordinate: &Coordinate) -> Result<NormalizedText, AddressError> {
        let location = pack_location(coordinate)?;
        let split = split(&self.value);
        if split.location != BigUint::from(location) {
            return Err(AddressError::LocationMismatch {
                expected: location,
                found: split.location.to_string(),
            });
        }
        Ok(split.page)
    }

    /// Consumes the address and returns the string.
    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for HexAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for HexAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for HexAddress {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

// =============================================================================
// ENCODING
// =============================================================================

/// Reads a page as a base-29 integer, first character most significant.
fn page_value(page: &NormalizedText) -> BigUint {
    let radix = ALPHABET_LEN as u32;
    page.digits()
        .into_iter()
        .fold(BigUint::zero(), |acc, d| acc * radix + u32::from(d))
}

/// Encodes text at a coordinate into a hexagon address.
///
/// The text is normalized first, so any input is accepted; only a
/// coordinate field wider than its slot fails.
pub fn encode(text: &str, coordinate: &Coordinate) -> Result<HexAddress, AddressError> {
    encode_page(&normalize(text), coordinate)
}

/// Encodes an already-normalized page into a hexagon address.
pub fn encode_page(
    page: &NormalizedText,
    coordinate: &Coordinate,
) -> Result<HexAddress, AddressError> {
    let location = pack_location(coordinate)?;
    let combined = BigUint::from(location) * &*PAGE_MODULUS + page_value(page);
    let address = HexAddress::from_value(combined);

    debug!(location, len = address.as_str().len(), "encoded page");
    Ok(address)
}

// =============================================================================
// DECODING
// =============================================================================

/// An address integer split at `29^3200`.
struct Split {
    location: BigUint,
    page: NormalizedText,
}

/// Splits an address integer into its location and page.
///
/// Expanding `combined - location * 29^3200` into 3200 floor-division digits
/// yields the digits of `combined mod 29^3200` regardless of the location,
/// so the page comes from the remainder directly.
fn split(combined: &BigUint) -> Split {
    let location = combined / &*PAGE_MODULUS;
    let text_value = combined - &location * &*PAGE_MODULUS;

    // Least significant first; zero yields a single 0 digit.
    let mut digits = text_value.to_radix_le(ALPHABET_LEN as u32);
    trace!(significant_digits = digits.len(), "expanded page value");
    digits.resize(PAGE_LEN, 0);
    digits.reverse();

    Split {
        location,
        page: NormalizedText::from_digits(&digits),
    }
}

/// Decodes an address back into its page.
///
/// No validity check is made against the coordinate: an address decoded
/// with a coordinate it was not built for still yields 3200 symbols. Use
/// [`decode_strict`] to reject that case.
pub fn decode(address: &str, coordinate: &Coordinate) -> Result<NormalizedText, AddressError> {
    HexAddress::parse(address)?.decode(coordinate)
}

/// Decodes an address, failing with [`AddressError::LocationMismatch`] if
/// it was built for a different coordinate.
pub fn decode_strict(
    address: &str,
    coordinate: &Coordinate,
) -> Result<NormalizedText, AddressError> {
    HexAddress::parse(address)?.decode_strict(coordinate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoordinateError;

    fn origin() -> Coordinate {
        Coordinate::new(0, 0, 0, 0)
    }

    #[test]
    fn test_base36_scenarios() {
        assert_eq!(to_base36(&BigUint::from(0u32)), "0");
        assert_eq!(to_base36(&BigUint::from(35u32)), "z");
        assert_eq!(to_base36(&BigUint::from(36u32)), "10");
        assert_eq!(from_base36("z").unwrap(), BigUint::from(35u32));
        assert_eq!(from_base36("10").unwrap(), BigUint::from(36u32));
        assert_eq!(from_base36("Z").unwrap(), BigUint::from(35u32));
        assert_eq!(from_base36("000").unwrap(), BigUint::zero());
    }

    #[test]
    fn test_base36_rejects_non_digits() {
        assert_eq!(from_base36(""), Err(AddressError::EmptyAddress));
        assert_eq!(
            from_base36("ab-c"),
            Err(AddressError::InvalidDigit { ch: '-', position: 2 })
        );
        assert!(matches!(from_base36("+1"), Err(AddressError::InvalidDigit { ch: '+', .. })));
        assert!(matches!(from_base36("1_0"), Err(AddressError::InvalidDigit { ch: '_', .. })));
        assert!(matches!(from_base36(" 1"), Err(AddressError::InvalidDigit { ch: ' ', .. })));
    }

    #[test]
    fn test_base36_too_long() {
        let s = "1".repeat(MAX_ADDRESS_LEN + 1);
        assert!(matches!(from_base36(&s), Err(AddressError::AddressTooLong { .. })));
    }

    #[test]
    fn test_hello_world_roundtrip() {
        let coord = Coordinate::new(1, 1, 1, 1);
        let address = encode("hello world", &coord).unwrap();
        let page = decode(address.as_str(), &coord).unwrap();

        assert_eq!(page, normalize("hello world"));
        assert_eq!(page.trimmed(), "hello world");
        assert_eq!(page.as_str().len(), PAGE_LEN);
    }

    #[test]
    fn test_last_character_is_least_significant() {
        let mut text = "a".repeat(PAGE_LEN - 1);
        text.push('b');
        assert_eq!(encode(&text, &origin()).unwrap().as_str(), "1");

        let mut text = String::from("b");
        text.push_str(&"a".repeat(PAGE_LEN - 1));
        let address = encode(&text, &origin()).unwrap();
        assert_eq!(
            address.value(),
            &BigUint::from(29u32).pow(PAGE_LEN as u32 - 1)
        );
    }

    #[test]
    fn test_all_space_page_value() {
        // 26 * (29^3199 + ... + 1) = 26 * (29^3200 - 1) / 28
        let address = encode("", &origin()).unwrap();
        let expected = (PAGE_MODULUS.clone() - 1u32) * 26u32 / 28u32;
        assert_eq!(address.value(), &expected);
    }

    #[test]
    fn test_zero_address() {
        let page = decode("0", &origin()).unwrap();
        assert_eq!(page.as_str(), "a".repeat(PAGE_LEN));
        assert_eq!(encode_page(&page, &origin()).unwrap().as_str(), "0");
    }

    #[test]
    fn test_location_above_page_digits() {
        let coord = Coordinate::new(4, 5, 32, 410);
        let address = encode("location", &coord).unwrap();
        assert_eq!(address.location(), BigUint::from(4103254u32));
        assert_eq!(address.coordinate(), Some(coord));
    }

    #[test]
    fn test_max_address_length() {
        let coord = Coordinate::new(9, 9, 99, 999);
        let address = encode(&".".repeat(PAGE_LEN), &coord).unwrap();
        assert_eq!(address.as_str().len(), 3012);
        assert!(address.as_str().len() <= MAX_ADDRESS_LEN);
    }

    #[test]
    fn test_leading_zeros_and_uppercase_accepted() {
        let coord = Coordinate::new(2, 3, 4, 5);
        let address = encode("padding", &coord).unwrap();
        let upper = format!("00{}", address.as_str().to_ascii_uppercase());
        assert_eq!(decode(&upper, &coord).unwrap(), normalize("padding"));
    }

    #[test]
    fn test_mismatched_coordinate_is_silent() {
        let address = encode("secret", &Coordinate::new(1, 1, 1, 1)).unwrap();
        let page = decode(address.as_str(), &Coordinate::new(2, 2, 2, 2)).unwrap();
        // Only the residue below 29^3200 is expanded, so the page is unchanged.
        assert_eq!(page, normalize("secret"));
    }

    #[test]
    fn test_over_long_text_roundtrip() {
        let coord = Coordinate::new(3, 1, 7, 42);
        let mut text = "Over long, page.".repeat(PAGE_LEN / 16);
        text.push_str("dropped tail");
        assert!(text.chars().count() > PAGE_LEN);

        let address = encode(&text, &coord).unwrap();
        let page = decode(address.as_str(), &coord).unwrap();
        assert_eq!(page, normalize(&text));
        assert_eq!(page.as_str(), "over long, page.".repeat(PAGE_LEN / 16));
    }

    #[test]
    fn test_strict_rejects_mismatched_coordinate() {
        let coord = Coordinate::new(1, 1, 1, 1);
        let address = encode("secret", &coord).unwrap();

        assert_eq!(
            decode_strict(address.as_str(), &coord).unwrap(),
            normalize("secret")
        );
        assert_eq!(
            decode_strict(address.as_str(), &Coordinate::new(2, 2, 2, 2)),
            Err(AddressError::LocationMismatch {
                expected: 20222,
                found: "10111".to_string(),
            })
        );
    }

    #[test]
    fn test_address_below_location_decodes_leniently() {
        let page = decode("1", &Coordinate::new(1, 1, 1, 1)).unwrap();
        assert_eq!(page.as_str().chars().count(), PAGE_LEN);
        assert!(decode_strict("1", &Coordinate::new(1, 1, 1, 1)).is_err());
    }

    #[test]
    fn test_coordinate_too_wide() {
        let err = encode("x", &Coordinate::new(0, 0, 0, 1000)).unwrap_err();
        assert_eq!(
            err,
            AddressError::Coordinate(CoordinateError::FieldTooWide {
                field: "page",
                value: 1000,
                width: 3,
            })
        );
        assert!(decode("abc", &Coordinate::new(10, 0, 0, 0)).is_err());
    }

    #[test]
    fn test_invalid_address_in_decode() {
        assert!(matches!(
            decode("hello!", &origin()),
            Err(AddressError::InvalidDigit { ch: '!', position: 5 })
        ));
    }

    #[test]
    fn test_hex_address_parse_display() {
        let address: HexAddress = "AbC".parse().unwrap();
        assert_eq!(address.to_string(), "abc");
        assert_eq!(address.value(), &BigUint::from(10u32 * 1296 + 11 * 36 + 12));
    }

    #[test]
    fn test_hex_address_parse_is_canonical() {
        let padded: HexAddress = "00z".parse().unwrap();
        let plain: HexAddress = "z".parse().unwrap();
        assert_eq!(padded.as_str(), "z");
        assert_eq!(padded, plain);
        assert_eq!("000".parse::<HexAddress>().unwrap().as_str(), "0");
    }
}
