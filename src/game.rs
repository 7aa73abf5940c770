//! Turn alternation and win detection.

use alloc::boxed::Box;

use log::info;
use rand::rngs::SmallRng;

use crate::{
    board::Grid,
    common::ShotOutcome,
    coordinate::Coordinate,
    player::{take_turn, Player},
};

/// The two sides of a match. The user always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    User,
    Opponent,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::User => Side::Opponent,
            Side::Opponent => Side::User,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::User => 0,
            Side::Opponent => 1,
        }
    }
}

/// A player together with the board it owns.
pub struct Contestant {
    player: Box<dyn Player>,
    grid: Grid,
}

impl Contestant {
    pub fn new(player: Box<dyn Player>, grid: Grid) -> Self {
        Self { player, grid }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn name(&self) -> &str {
        self.player.name()
    }
}

/// What happened during one accepted shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub side: Side,
    pub target: Coordinate,
    pub outcome: ShotOutcome,
    pub winner: Option<Side>,
}

/// Current status of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStatus {
    InProgress,
    Won(Side),
}

/// Drives two contestants until one fleet is destroyed.
///
/// `turn_index` only ever grows; whose turn it is follows from its parity.
/// A non-sinking hit leaves it unchanged so the same side shoots again.
pub struct Match {
    contestants: [Contestant; 2],
    turn_index: u64,
    rng: SmallRng,
    status: MatchStatus,
}

impl Match {
    /// Pair two contestants. Both boards must carry the same non-empty fleet;
    /// a side loses once every vessel on its board is sunk.
    pub fn new(user: Contestant, opponent: Contestant, rng: SmallRng) -> anyhow::Result<Self> {
        let (ours, theirs) = (user.grid.vessels().len(), opponent.grid.vessels().len());
        anyhow::ensure!(ours > 0, "user board has no vessels");
        anyhow::ensure!(
            ours == theirs,
            "fleet sizes differ: user has {} vessels, opponent has {}",
            ours,
            theirs
        );
        Ok(Self {
            contestants: [user, opponent],
            turn_index: 0,
            rng,
            status: MatchStatus::InProgress,
        })
    }

    /// Vessels each side must lose to be defeated.
    pub fn fleet_size(&self) -> usize {
        self.grid(Side::User).vessels().len()
    }

    pub fn turn_index(&self) -> u64 {
        self.turn_index
    }

    pub fn active_side(&self) -> Side {
        if self.turn_index % 2 == 0 {
            Side::User
        } else {
            Side::Opponent
        }
    }

    pub fn status(&self) -> MatchStatus {
        self.status
    }

    pub fn contestant(&self, side: Side) -> &Contestant {
        &self.contestants[side.index()]
    }

    /// Board owned by `side`.
    pub fn grid(&self, side: Side) -> &Grid {
        &self.contestants[side.index()].grid
    }

    /// Winner once either board has lost its whole fleet.
    fn winner(&self) -> Option<Side> {
        if self.grid(Side::Opponent).all_sunk() {
            Some(Side::User)
        } else if self.grid(Side::User).all_sunk() {
            Some(Side::Opponent)
        } else {
            None
        }
    }

    /// Play one accepted shot for the active side.
    ///
    /// Calling this after the match has been decided is an error.
    pub fn play_turn(&mut self) -> anyhow::Result<TurnReport> {
        if let MatchStatus::Won(side) = self.status {
            anyhow::bail!("match already won by {:?}", side);
        }
        let side = self.active_side();
        let [user, opponent] = &mut self.contestants;
        let (attacker, defender) = match side {
            Side::User => (user, opponent),
            Side::Opponent => (opponent, user),
        };
        let (target, outcome) = take_turn(attacker.player.as_mut(), &mut self.rng, &mut defender.grid)?;

        if !outcome.repeats_turn() {
            self.turn_index += 1;
        }
        let winner = self.winner();
        if let Some(w) = winner {
            info!("{:?} wins after {} turns", w, self.turn_index);
            self.status = MatchStatus::Won(w);
        }
        Ok(TurnReport {
            side,
            target,
            outcome,
            winner,
        })
    }

    /// Play until one side wins, calling `observe` after every shot.
    pub fn run_with<F>(&mut self, mut observe: F) -> anyhow::Result<Side>
    where
        F: FnMut(&Match, &TurnReport),
    {
        loop {
            let report = self.play_turn()?;
            observe(self, &report);
            if let Some(w) = report.winner {
                return Ok(w);
            }
        }
    }

    /// Play until one side wins.
    pub fn run(&mut self) -> anyhow::Result<Side> {
        self.run_with(|_, _| {})
    }
}
