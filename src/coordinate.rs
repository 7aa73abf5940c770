//! Board coordinates.

use core::fmt;

/// A 0-indexed `(row, col)` position.
///
/// Coordinates are plain values and carry no bounds information; a position
/// may lie outside any board (negative or too large). Checking bounds is the
/// job of [`Grid`](crate::Grid).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub row: i32,
    pub col: i32,
}

impl Coordinate {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Build a coordinate from 1-indexed user input.
    pub const fn from_one_based(row: i32, col: i32) -> Self {
        Self::new(row - 1, col - 1)
    }

    /// The same position expressed in 1-indexed user terms.
    pub const fn to_one_based(self) -> (i32, i32) {
        (self.row + 1, self.col + 1)
    }

    /// Coordinate shifted by `(d_row, d_col)`.
    pub const fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self::new(self.row + d_row, self.col + d_col)
    }

    /// The 3×3 block centred on this coordinate, itself included.
    pub fn neighborhood(self) -> impl Iterator<Item = Coordinate> {
        (-1..=1).flat_map(move |dr| (-1..=1).map(move |dc| self.offset(dr, dc)))
    }
}

impl fmt::Display for Coordinate {
    /// Formats in 1-indexed form, the way players see it.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, c) = self.to_one_based();
        write!(f, "{} {}", r, c)
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}
