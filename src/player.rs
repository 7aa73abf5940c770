use log::warn;
use rand::rngs::SmallRng;

use crate::{
    board::Grid,
    common::{BoardError, ShotOutcome},
    coordinate::Coordinate,
};

/// Interface implemented by the interactive and automated players.
pub trait Player {
    /// Choose the next target on an opponent board of `size`×`size` cells.
    fn propose_target(&mut self, rng: &mut SmallRng, size: usize) -> anyhow::Result<Coordinate>;

    /// Display name used in logs and match output.
    fn name(&self) -> &str;

    /// Inform the player that the opponent board refused `target`.
    fn on_rejected(&mut self, _target: Coordinate, _error: &BoardError) {}

    /// Inform the player of the outcome of an accepted shot.
    fn on_outcome(&mut self, _target: Coordinate, _outcome: ShotOutcome) {}
}

/// Let `player` fire at `opponent` until a shot is accepted.
///
/// Off-board and repeated targets are reported back to the player and the
/// turn is retried; only failures to produce a target end the turn early.
pub fn take_turn(
    player: &mut dyn Player,
    rng: &mut SmallRng,
    opponent: &mut Grid,
) -> anyhow::Result<(Coordinate, ShotOutcome)> {
    loop {
        let target = player.propose_target(rng, opponent.size())?;
        match opponent.shot(target) {
            Ok(outcome) => {
                player.on_outcome(target, outcome);
                return Ok((target, outcome));
            }
            Err(e) => {
                warn!("{} rejected: {}", player.name(), e);
                player.on_rejected(target, &e);
            }
        }
    }
}
