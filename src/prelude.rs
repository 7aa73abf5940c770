//! Commonly used types and utilities for ease of import.

pub use crate::{
    take_turn, AiPlayer, BoardError, Contestant, Coordinate, FleetGenerator, GameConfig, Grid,
    Match, Orientation, Player, ShotOutcome, Side, Vessel,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, ui::render_grid, CliPlayer};
