//! Location coordinates and their fixed-width decimal packing.
//!
//! A location packs four fields into one decimal integer:
//!
//! ```text
//! PPP VV S W   (page, volume, shelf, wall)
//! location = page * 10^4 + volume * 10^2 + shelf * 10 + wall
//! ```
//!
//! The packing is not self-describing: the coordinate always travels
//! alongside an address and must be supplied again to decode it.

use std::fmt;

use crate::error::CoordinateError;
use crate::limits::{MAX_LOCATION, PAGE_WIDTH, SHELF_WIDTH, VOLUME_WIDTH, WALL_WIDTH};

/// Position of a page inside a hexagon.
///
/// Only the decimal width of each field is enforced when packing; the
/// semantic ranges (4 walls, 5 shelves, 32 volumes, 410 pages) are not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coordinate {
    pub wall: u32,
    pub shelf: u32,
    pub volume: u32,
    pub page: u32,
}

impl Coordinate {
    /// Creates a coordinate.
    pub const fn new(wall: u32, shelf: u32, volume: u32, page: u32) -> Self {
        Self {
            wall,
            shelf,
            volume,
            page,
        }
    }

    /// Packs the coordinate into its location integer.
    pub fn pack(&self) -> Result<u64, CoordinateError> {
        pack_location(self)
    }

    /// Splits a location integer back into its fields.
    ///
    /// Returns `None` if `location` exceeds [`MAX_LOCATION`].
    pub fn unpack(location: u64) -> Option<Self> {
        if location > MAX_LOCATION {
            return None;
        }
        let location = location as u32;
        Some(Self {
            wall: location % 10,
            shelf: (location / 10) % 10,
            volume: (location / 100) % 100,
            page: location / 10_000,
        })
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "wall {} shelf {} volume {:02} page {:03}",
            self.wall, self.shelf, self.volume, self.page
        )
    }
}

/// Checks that `value` fits in `width` decimal digits.
fn check_width(field: &'static str, value: u32, width: u32) -> Result<u64, CoordinateError> {
    if u64::from(value) >= 10u64.pow(width) {
        return Err(CoordinateError::FieldTooWide {
            field,
            value,
            width,
        });
    }
    Ok(u64::from(value))
}

/// Packs `(page, volume, shelf, wall)` into one decimal integer.
///
/// Equivalent to concatenating the zero-padded fields and parsing the
/// 7-digit result.
pub fn pack_location(coordinate: &Coordinate) -> Result<u64, CoordinateError> {
    let page = check_width("page", coordinate.page, PAGE_WIDTH)?;
    let volume = check_width("volume", coordinate.volume, VOLUME_WIDTH)?;
    let shelf = check_width("shelf", coordinate.shelf, SHELF_WIDTH)?;
    let wall = check_width("wall", coordinate.wall, WALL_WIDTH)?;

    let volume_shift = 10u64.pow(SHELF_WIDTH + WALL_WIDTH);
    let page_shift = 10u64.pow(VOLUME_WIDTH + SHELF_WIDTH + WALL_WIDTH);
    Ok(page * page_shift + volume * volume_shift + shelf * 10u64.pow(WALL_WIDTH) + wall)
}
