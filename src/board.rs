//! Game board: cell states, vessel placement and shot resolution.

use alloc::collections::BTreeSet;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use log::{debug, info};

use crate::common::{BoardError, ShotOutcome};
use crate::coordinate::Coordinate;
use crate::ship::Vessel;

/// Visible state of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    Empty,
    Ship,
    /// Missed shot, or water revealed around a sunk vessel.
    Miss,
    Hit,
}

/// How [`Grid::adjacency_buffer`] treats the cells around a vessel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferMode {
    /// Setup time: keep other vessels out, leave the matrix untouched.
    Reserve,
    /// Play time: mark the water around a wreck and treat it as shot.
    Reveal,
}

/// A square board with its fleet.
///
/// Setup and play use separate coordinate sets: `reserved` holds vessel cells
/// plus their buffers while placing, `targeted` holds every cell already
/// fired at (or revealed) once play starts.
#[derive(Clone)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
    vessels: Vec<Vessel>,
    reserved: BTreeSet<Coordinate>,
    targeted: BTreeSet<Coordinate>,
    sunk: usize,
}

impl Grid {
    /// Create an empty `size`×`size` board.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
            vessels: Vec::new(),
            reserved: BTreeSet::new(),
            targeted: BTreeSet::new(),
            sunk: 0,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Vessels in placement order.
    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    /// Number of vessels sunk so far.
    pub fn sunk_count(&self) -> usize {
        self.sunk
    }

    /// Returns `true` once every placed vessel is sunk.
    pub fn all_sunk(&self) -> bool {
        !self.vessels.is_empty() && self.sunk == self.vessels.len()
    }

    /// Returns `true` if `coord` has been fired at or revealed.
    pub fn is_targeted(&self, coord: Coordinate) -> bool {
        self.targeted.contains(&coord)
    }

    /// Cells fired at or revealed so far.
    pub fn targeted(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.targeted.iter().copied()
    }

    /// Returns `true` if `coord` is outside `[0, size)` on either axis.
    pub fn out_of_bounds(&self, coord: Coordinate) -> bool {
        let n = self.size as i32;
        !(0..n).contains(&coord.row) || !(0..n).contains(&coord.col)
    }

    /// Cell state at `coord`, or `None` if it is off the board.
    pub fn cell(&self, coord: Coordinate) -> Option<Cell> {
        self.index(coord).map(|i| self.cells[i])
    }

    /// Matrix rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size.max(1))
    }

    fn index(&self, coord: Coordinate) -> Option<usize> {
        if self.out_of_bounds(coord) {
            None
        } else {
            Some(coord.row as usize * self.size + coord.col as usize)
        }
    }

    fn set_cell(&mut self, coord: Coordinate, cell: Cell) {
        if let Some(i) = self.index(coord) {
            self.cells[i] = cell;
        }
    }

    /// Add the in-bounds 3×3 neighborhood of each of `vessel`'s cells to the
    /// set that `mode` selects, skipping cells already in it. In
    /// [`BufferMode::Reveal`] those cells are also marked as [`Cell::Miss`].
    pub fn adjacency_buffer(&mut self, vessel: &Vessel, mode: BufferMode) {
        for cell in vessel.occupied_cells() {
            for near in cell.neighborhood() {
                if self.out_of_bounds(near) {
                    continue;
                }
                let fresh = match mode {
                    BufferMode::Reserve => self.reserved.insert(near),
                    BufferMode::Reveal => self.targeted.insert(near),
                };
                if fresh && mode == BufferMode::Reveal {
                    self.set_cell(near, Cell::Miss);
                }
            }
        }
    }

    /// Place `vessel` on the board.
    ///
    /// Every cell must be on the board and outside the footprint and buffer
    /// of the vessels already placed; otherwise nothing changes and
    /// [`BoardError::PlacementRejected`] is returned.
    pub fn add_vessel(&mut self, vessel: Vessel) -> Result<(), BoardError> {
        if vessel
            .occupied_cells()
            .any(|c| self.out_of_bounds(c) || self.reserved.contains(&c))
        {
            return Err(BoardError::PlacementRejected);
        }
        for c in vessel.occupied_cells() {
            self.set_cell(c, Cell::Ship);
            self.reserved.insert(c);
        }
        // buffer must come after the footprint is reserved
        self.adjacency_buffer(&vessel, BufferMode::Reserve);
        self.vessels.push(vessel);
        debug!("placed {:?}", vessel);
        Ok(())
    }

    /// Forget all targeting history. Called once when setup is complete.
    pub fn reset_targeting(&mut self) {
        self.targeted.clear();
    }

    /// Fire at `coord`.
    ///
    /// Off-board or repeated targets are rejected without touching the board.
    pub fn shot(&mut self, coord: Coordinate) -> Result<ShotOutcome, BoardError> {
        if self.out_of_bounds(coord) {
            return Err(BoardError::OutOfBounds(coord));
        }
        if !self.targeted.insert(coord) {
            return Err(BoardError::AlreadyTargeted(coord));
        }

        // footprints never overlap, so at most one vessel matches
        let Some(idx) = self.vessels.iter().position(|v| v.is_hit_by(coord)) else {
            self.set_cell(coord, Cell::Miss);
            debug!("shot at ({}) missed", coord);
            return Ok(ShotOutcome::Miss);
        };

        self.vessels[idx].register_hit();
        self.set_cell(coord, Cell::Hit);
        let vessel = self.vessels[idx];
        if vessel.is_sunk() {
            self.sunk += 1;
            self.adjacency_buffer(&vessel, BufferMode::Reveal);
            info!(
                "vessel of length {} sunk ({}/{})",
                vessel.length(),
                self.sunk,
                self.vessels.len()
            );
            Ok(ShotOutcome::Sunk {
                length: vessel.length(),
            })
        } else {
            debug!("shot at ({}) hit, {} lives left", coord, vessel.lives());
            Ok(ShotOutcome::Hit)
        }
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Grid {{ size: {}, sunk: {}/{}, targeted: {} }}",
            self.size,
            self.sunk,
            self.vessels.len(),
            self.targeted.len()
        )?;
        for v in &self.vessels {
            writeln!(f, "  {:?}", v)?;
        }
        Ok(())
    }
}
