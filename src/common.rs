//! Common types for Sea Battle: shot outcomes and domain errors.

use core::fmt;

use crate::coordinate::Coordinate;

/// Result of a shot that the grid accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// Shot landed in open water.
    Miss,
    /// Shot damaged a vessel that is still afloat.
    Hit,
    /// Shot took the last life of a vessel of the given length.
    Sunk { length: usize },
}

impl ShotOutcome {
    /// Only a non-sinking hit grants the shooter another shot.
    pub fn repeats_turn(self) -> bool {
        matches!(self, ShotOutcome::Hit)
    }
}

impl fmt::Display for ShotOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotOutcome::Miss => write!(f, "Miss"),
            ShotOutcome::Hit => write!(f, "Ship hit!"),
            ShotOutcome::Sunk { length } => write!(f, "Ship of length {} destroyed!", length),
        }
    }
}

/// Errors returned by Grid operations. All of them are recoverable by the
/// caller; none leaves the grid partially modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Target lies outside the board.
    OutOfBounds(Coordinate),
    /// Target was shot before.
    AlreadyTargeted(Coordinate),
    /// Vessel leaves the board or touches another vessel or its buffer.
    PlacementRejected,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds(c) => write!(f, "You are aiming off the board ({})", c),
            BoardError::AlreadyTargeted(c) => write!(f, "You already fired at this cell ({})", c),
            BoardError::PlacementRejected => write!(f, "Vessel cannot be placed there"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

/// Errors returned by fleet generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FleetError {
    /// The shared attempt budget ran out before the whole fleet was placed.
    Exhausted { placed: usize, attempts: usize },
    /// Every regeneration round exhausted its budget.
    Regenerations { rounds: usize },
}

impl fmt::Display for FleetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FleetError::Exhausted { placed, attempts } => write!(
                f,
                "Fleet generation exhausted after {} attempts with {} vessels placed",
                attempts, placed
            ),
            FleetError::Regenerations { rounds } => {
                write!(f, "No complete fleet after {} regeneration rounds", rounds)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FleetError {}
