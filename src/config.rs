//! Board size, fleet manifest and generation budgets.

use alloc::vec::Vec;
use core::fmt;

pub const BOARD_SIZE: usize = 6;
pub const NUM_SHIPS: usize = 7;
/// Vessel lengths placed on every board, longest first.
pub const FLEET: [usize; NUM_SHIPS] = [3, 2, 2, 1, 1, 1, 1];

/// Placement attempts shared by the whole fleet in one generation pass.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 2000;
/// Upper bound on fresh-grid restarts after a pass runs out of attempts.
pub const MAX_REGENERATIONS: usize = 1000;

/// Total number of vessel cells in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 3 + 2 + 2 + 1 + 1 + 1 + 1;

/// Adjustable game parameters. `Default` gives the standard 6×6 game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub size: usize,
    pub fleet: Vec<usize>,
    pub max_attempts: usize,
    pub max_regenerations: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: BOARD_SIZE,
            fleet: FLEET.to_vec(),
            max_attempts: MAX_PLACEMENT_ATTEMPTS,
            max_regenerations: MAX_REGENERATIONS,
        }
    }
}

impl GameConfig {
    /// Standard fleet on a board of the given size.
    pub fn with_size(size: usize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Number of vessels each side must lose to be defeated.
    pub fn fleet_size(&self) -> usize {
        self.fleet.len()
    }

    /// Check the preconditions fleet generation relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 || self.size > i32::MAX as usize / 2 {
            return Err(ConfigError::InvalidSize(self.size));
        }
        if self.fleet.is_empty() {
            return Err(ConfigError::EmptyFleet);
        }
        if self.fleet.contains(&0) {
            return Err(ConfigError::ZeroLengthVessel);
        }
        if let Some(&longest) = self.fleet.iter().max() {
            if longest > self.size {
                return Err(ConfigError::VesselTooLong {
                    length: longest,
                    size: self.size,
                });
            }
        }
        if self.max_attempts == 0 || self.max_regenerations == 0 {
            return Err(ConfigError::ZeroBudget);
        }
        Ok(())
    }
}

/// Invalid [`GameConfig`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    InvalidSize(usize),
    EmptyFleet,
    ZeroLengthVessel,
    VesselTooLong { length: usize, size: usize },
    ZeroBudget,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidSize(size) => write!(f, "Invalid board size {}", size),
            ConfigError::EmptyFleet => write!(f, "Fleet manifest is empty"),
            ConfigError::ZeroLengthVessel => write!(f, "Vessel lengths must be at least 1"),
            ConfigError::VesselTooLong { length, size } => write!(
                f,
                "Vessel of length {} does not fit on a {}x{} board",
                length, size, size
            ),
            ConfigError::ZeroBudget => write!(f, "Generation budgets must be at least 1"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
