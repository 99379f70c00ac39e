//! Error types for address encoding/decoding, URL handling and seed collaborators.

use thiserror::Error;

/// Error classes, each with a stable short code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// B001: Malformed base-36 string or URL
    Format,
    /// B002: Coordinate field does not fit its decimal slot
    Coordinate,
    /// B003: Address does not belong to the supplied coordinate
    Mismatch,
    /// B004: Failure reported by a mnemonic or syllable collaborator
    Collaborator,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "B001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::Format => "B001",
            ErrorCode::Coordinate => "B002",
            ErrorCode::Mismatch => "B003",
            ErrorCode::Collaborator => "B004",
        }
    }
}

/// Error while packing a coordinate into a location integer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoordinateError {
    #[error("[B002] {field} value {value} does not fit in {width} decimal digit(s)")]
    FieldTooWide {
        field: &'static str,
        value: u32,
        width: u32,
    },
}

impl CoordinateError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        ErrorCode::Coordinate
    }
}

/// Error while encoding or decoding a hexagon address.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    // === B001: Format ===
    #[error("[B001] address is empty")]
    EmptyAddress,

    #[error("[B001] invalid base-36 digit {ch:?} at position {position}")]
    InvalidDigit { ch: char, position: usize },

    #[error("[B001] address length {len} exceeds maximum {max}")]
    AddressTooLong { len: usize, max: usize },

    // === B002: Coordinate ===
    #[error(transparent)]
    Coordinate(#[from] CoordinateError),

    // === B003: Mismatch ===
    #[error("[B003] address encodes location {found}, not the supplied location {expected}")]
    LocationMismatch { expected: u64, found: String },
}

impl AddressError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            AddressError::Coordinate(e) => e.code(),
            AddressError::LocationMismatch { .. } => ErrorCode::Mismatch,
            _ => ErrorCode::Format,
        }
    }
}

/// Error while parsing a library URL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlError {
    #[error("[B001] URL has no query string (missing '?')")]
    MissingQuery,

    #[error("[B001] URL query has {found} ':'-separated fields, expected 5")]
    FieldCount { found: usize },

    #[error("[B001] URL field {field} is not an integer: {value:?}")]
    InvalidField { field: &'static str, value: String },

    #[error(transparent)]
    Address(#[from] AddressError),
}

impl UrlError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            UrlError::Address(e) => e.code(),
            _ => ErrorCode::Format,
        }
    }
}

/// Error reported by a mnemonic or syllable collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeedError {
    #[error("[B004] invalid mnemonic: {0}")]
    InvalidMnemonic(String),

    #[error("[B004] unsupported entropy length: {len} bytes")]
    InvalidEntropyLength { len: usize },

    #[error("[B004] invalid syllable string: {0}")]
    InvalidSyllableString(String),
}

impl SeedError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        ErrorCode::Collaborator
    }
}
