//! Commonly used types and utilities for ease of import.

pub use crate::{
    BoardError, Coordinate, ExternalMoveSource, Game, GameState, Grid, MoveSource, Orientation,
    RandomMoveSource, ShotOutcome, Side, Vessel, FLEET,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, StdinPrompt};
