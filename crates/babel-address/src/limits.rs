//! Fixed sizes and security limits for the hexagon-address format.

/// Number of symbols in the page alphabet (radix of the text digits).
pub const ALPHABET_LEN: usize = 29;

/// Number of symbols on one page.
pub const PAGE_LEN: usize = 3200;

/// Radix of the external address string.
pub const ADDRESS_RADIX: u32 = 36;

/// Decimal width of the page field in a packed location.
pub const PAGE_WIDTH: u32 = 3;

/// Decimal width of the volume field in a packed location.
pub const VOLUME_WIDTH: u32 = 2;

/// Decimal width of the shelf field in a packed location.
pub const SHELF_WIDTH: u32 = 1;

/// Decimal width of the wall field in a packed location.
pub const WALL_WIDTH: u32 = 1;

/// Largest packed location (`page=999, volume=99, shelf=9, wall=9`).
pub const MAX_LOCATION: u64 = 9_999_999;

/// Maximum accepted length of a base-36 address string.
///
/// The largest address `encode` can produce is 3012 characters long
/// (`(MAX_LOCATION + 1) * 29^3200 - 1` in base 36); anything much longer
/// cannot be a page and is rejected before any big-integer work.
pub const MAX_ADDRESS_LEN: usize = 4096;
