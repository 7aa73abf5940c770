//! Vessel geometry and damage tracking.

use core::fmt;

use crate::coordinate::Coordinate;

/// Orientation of a vessel on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Extends to the right of the bow (column grows).
    Horizontal,
    /// Extends downward from the bow (row grows).
    Vertical,
}

impl Orientation {
    /// `(d_row, d_col)` step between consecutive cells.
    const fn step(self) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

/// A vessel occupying a straight, contiguous run of cells.
///
/// The occupied cells are always derived from `bow`, `length` and
/// `orientation`; only `lives` changes after construction.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Vessel {
    bow: Coordinate,
    length: usize,
    orientation: Orientation,
    lives: usize,
}

impl Vessel {
    /// Create an undamaged vessel. `length` must be at least 1.
    pub fn new(bow: Coordinate, length: usize, orientation: Orientation) -> Self {
        debug_assert!(length >= 1, "vessel length must be positive");
        Self {
            bow,
            length,
            orientation,
            lives: length,
        }
    }

    pub fn bow(&self) -> Coordinate {
        self.bow
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Segments not yet hit.
    pub fn lives(&self) -> usize {
        self.lives
    }

    pub fn is_sunk(&self) -> bool {
        self.lives == 0
    }

    /// Cells covered by the vessel, starting at the bow.
    pub fn occupied_cells(&self) -> impl Iterator<Item = Coordinate> {
        let (dr, dc) = self.orientation.step();
        let bow = self.bow;
        (0..self.length as i32).map(move |i| bow.offset(dr * i, dc * i))
    }

    /// Returns `true` if `coord` is one of the vessel's cells.
    pub fn is_hit_by(&self, coord: Coordinate) -> bool {
        self.occupied_cells().any(|c| c == coord)
    }

    /// Take one point of damage.
    ///
    /// Callers must have checked [`is_hit_by`](Self::is_hit_by) first and
    /// must never hit a vessel that is already sunk.
    pub(crate) fn register_hit(&mut self) {
        assert!(self.lives > 0, "register_hit on a sunk vessel");
        self.lives -= 1;
    }
}

impl fmt::Debug for Vessel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Vessel {{ bow: ({}, {}), length: {}, orientation: {:?}, lives: {} }}",
            self.bow.row, self.bow.col, self.length, self.orientation, self.lives
        )
    }
}
