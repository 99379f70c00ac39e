//! Library URLs carrying an address and its coordinate.
//!
//! Canonical layout:
//!
//! ```text
//! <base>?<address>:<wall>:<shelf>:<volume:02>:<page:03>
//! ```
//!
//! Only this colon layout is understood. The dash layout
//! (`HEX-wW-sS-vVV:PAGE`) is a different format and fails to parse.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::address::HexAddress;
use crate::coordinate::Coordinate;
use crate::error::UrlError;

/// Default location of the book viewer.
pub const DEFAULT_BASE_URL: &str = "https://libraryofbabel.info/book.cgi";

/// Separator between query fields.
pub const FIELD_DELIMITER: char = ':';

/// Options for URL formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlOptions {
    /// Scheme, host and path placed before the `?`.
    pub base: String,
}

impl Default for UrlOptions {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl UrlOptions {
    /// Creates options with a custom base URL.
    ///
    /// A trailing `?` is dropped so it is not doubled when formatting.
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        if base.ends_with('?') {
            base.pop();
        }
        Self { base }
    }
}

/// An address together with the coordinate needed to decode it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryUrl {
    pub address: HexAddress,
    pub coordinate: Coordinate,
}

impl LibraryUrl {
    /// Creates a URL value.
    pub fn new(address: HexAddress, coordinate: Coordinate) -> Self {
        Self {
            address,
            coordinate,
        }
    }

    /// Formats the URL against the given options.
    pub fn to_url_string(&self, options: &UrlOptions) -> String {
        format_with_options(&self.address, &self.coordinate, options)
    }
}

impl fmt::Display for LibraryUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_url_string(&UrlOptions::default()))
    }
}

impl FromStr for LibraryUrl {
    type Err = UrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Formats a URL with the default base.
pub fn format(address: &HexAddress, coordinate: &Coordinate) -> String {
    format_with_options(address, coordinate, &UrlOptions::default())
}

/// Formats a URL with the given options.
pub fn format_with_options(
    address: &HexAddress,
    coordinate: &Coordinate,
    options: &UrlOptions,
) -> String {
    let d = FIELD_DELIMITER;
    format!(
        "{}?{}{d}{}{d}{}{d}{:02}{d}{:03}",
        options.base,
        address,
        coordinate.wall,
        coordinate.shelf,
        coordinate.volume,
        coordinate.page,
    )
}

fn parse_field(field: &'static str, value: &str) -> Result<u32, UrlError> {
    value.parse().map_err(|_| UrlError::InvalidField {
        field,
        value: value.to_string(),
    })
}

/// Parses a URL into its address and coordinate.
///
/// Everything before the first `?` is ignored, so any base is accepted.
pub fn parse(url: &str) -> Result<LibraryUrl, UrlError> {
    let (_, query) = url.split_once('?').ok_or(UrlError::MissingQuery)?;

    let fields: Vec<&str> = query.split(FIELD_DELIMITER).collect();
    let [address, wall, shelf, volume, page] = fields[..] else {
        return Err(UrlError::FieldCount {
            found: fields.len(),
        });
    };

    let coordinate = Coordinate {
        wall: parse_field("wall", wall)?,
        shelf: parse_field("shelf", shelf)?,
        volume: parse_field("volume", volume)?,
        page: parse_field("page", page)?,
    };
    let address = HexAddress::parse(address)?;

    debug!(%coordinate, len = address.as_str().len(), "parsed library URL");
    Ok(LibraryUrl {
        address,
        coordinate,
    })
}
