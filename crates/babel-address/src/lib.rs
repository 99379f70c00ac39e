//! Babel addresses: reversible hexagon addresses for 3200-character pages.
//!
//! This crate maps a page of text plus a location coordinate to a single
//! base-36 "hexagon address" and back.
//!
//! # Overview
//!
//! - Text is normalized to exactly 3200 symbols over a 29-symbol alphabet
//!   (`a-z`, space, comma, period)
//! - The page is read as a base-29 integer, last character least significant
//! - The coordinate is packed into a 7-digit decimal location
//! - `address = location * 29^3200 + page`, written in base 36
//!
//! # Quick Start
//!
//! ```rust
//! use babel_address::{Coordinate, decode, encode, normalize};
//!
//! let coord = Coordinate::new(1, 1, 1, 1);
//! let address = encode("Hello world", &coord).unwrap();
//!
//! let page = decode(address.as_str(), &coord).unwrap();
//! assert_eq!(page, normalize("hello world"));
//! assert_eq!(page.trimmed(), "hello world");
//! ```
//!
//! # Modules
//!
//! - [`alphabet`]: Symbol/digit mapping
//! - [`text`]: Page normalization
//! - [`coordinate`]: Location packing
//! - [`address`]: Address encoding/decoding
//! - [`url`]: Library URL formatting and parsing
//! - [`seed`]: Mnemonic/syllable collaborator seams
//! - [`error`]: Error types
//! - [`limits`]: Format sizes and input limits
//!
//! # Coordinates
//!
//! The location is not self-describing, so the coordinate must travel with
//! the address (for example inside a [`LibraryUrl`]). [`decode`] does not
//! verify it; [`decode_strict`] rejects an address built for a different
//! location.

pub mod address;
pub mod alphabet;
pub mod coordinate;
pub mod error;
pub mod limits;
pub mod seed;
pub mod text;
pub mod url;

// Re-export commonly used types at crate root
pub use address::{
    HexAddress, PAGE_MODULUS, decode, decode_strict, encode, encode_page, from_base36, to_base36,
};
pub use alphabet::{ALPHABET, digit_to_symbol, symbol_to_digit};
pub use coordinate::{Coordinate, pack_location};
pub use error::{AddressError, CoordinateError, ErrorCode, SeedError, UrlError};
pub use seed::{MnemonicCodec, SyllableCodec, babel_to_seed, format_chunked, seed_to_babel, strip_formatting};
pub use text::{NormalizedText, normalize};
pub use url::{LibraryUrl, UrlOptions};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
