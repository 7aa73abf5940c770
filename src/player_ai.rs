use log::{debug, info};
use rand::rngs::SmallRng;
use rand::Rng;

use crate::{common::ShotOutcome, coordinate::Coordinate, player::Player, BoardError};

/// Computer player that fires at uniformly random cells.
///
/// It keeps no memory of earlier shots; repeats are rejected by the board and
/// retried by [`take_turn`](crate::take_turn).
pub struct AiPlayer {
    name: &'static str,
}

impl AiPlayer {
    pub fn new() -> Self {
        Self { name: "Computer" }
    }

    pub fn named(name: &'static str) -> Self {
        Self { name }
    }
}

impl Default for AiPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for AiPlayer {
    fn propose_target(&mut self, rng: &mut SmallRng, size: usize) -> anyhow::Result<Coordinate> {
        let n = size as i32;
        let target = Coordinate::new(rng.random_range(0..n), rng.random_range(0..n));
        info!("{} move: {}", self.name, target);
        Ok(target)
    }

    fn name(&self) -> &str {
        self.name
    }

    fn on_rejected(&mut self, target: Coordinate, error: &BoardError) {
        debug!("{} retries after {} at {}", self.name, error, target);
    }

    fn on_outcome(&mut self, target: Coordinate, outcome: ShotOutcome) {
        debug!("{} fired at {} -> {:?}", self.name, target, outcome);
    }
}
