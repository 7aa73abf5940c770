//! Random fleet placement by rejection sampling.

use alloc::vec::Vec;

use log::{debug, warn};
use rand::Rng;

use crate::board::Grid;
use crate::common::FleetError;
use crate::config::GameConfig;
use crate::coordinate::Coordinate;
use crate::ship::{Orientation, Vessel};

/// Builds fully populated grids from a fleet manifest.
#[derive(Debug, Clone)]
pub struct FleetGenerator {
    size: usize,
    fleet: Vec<usize>,
    max_attempts: usize,
    max_regenerations: usize,
}

impl FleetGenerator {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            size: config.size,
            fleet: config.fleet.clone(),
            max_attempts: config.max_attempts,
            max_regenerations: config.max_regenerations,
        }
    }

    /// One generation pass on a fresh grid.
    ///
    /// Bows are drawn from `0..=size`, so some attempts start off the board
    /// and are simply rejected. The attempt budget is shared by the whole
    /// fleet. On success the grid's targeting history is reset and it is
    /// ready for play.
    pub fn try_generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Grid, FleetError> {
        let mut grid = Grid::new(self.size);
        let mut attempts = 0;
        for (placed, &length) in self.fleet.iter().enumerate() {
            loop {
                attempts += 1;
                if attempts > self.max_attempts {
                    return Err(FleetError::Exhausted {
                        placed,
                        attempts: self.max_attempts,
                    });
                }
                let bow = Coordinate::new(
                    rng.random_range(0..=self.size as i32),
                    rng.random_range(0..=self.size as i32),
                );
                let orientation = if rng.random() {
                    Orientation::Horizontal
                } else {
                    Orientation::Vertical
                };
                if grid.add_vessel(Vessel::new(bow, length, orientation)).is_ok() {
                    break;
                }
            }
        }
        grid.reset_targeting();
        debug!("fleet of {} placed in {} attempts", self.fleet.len(), attempts);
        Ok(grid)
    }

    /// Run generation passes until one places the whole fleet.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Grid, FleetError> {
        for round in 1..=self.max_regenerations {
            match self.try_generate(rng) {
                Ok(grid) => return Ok(grid),
                Err(e) => warn!("generation round {} failed: {}", round, e),
            }
        }
        Err(FleetError::Regenerations {
            rounds: self.max_regenerations,
        })
    }
}
