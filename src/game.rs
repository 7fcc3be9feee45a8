use alloc::boxed::Box;
use core::fmt;

use log::{debug, info};
use rand::Rng;

use crate::{
    board::Grid,
    common::{BoardError, Coordinate, ShotOutcome},
    config::FLEET,
    player::MoveSource,
};

/// One of the two participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Side {
    Human,
    Computer,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::Human => 0,
            Side::Computer => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Human => write!(f, "human"),
            Side::Computer => write!(f, "computer"),
        }
    }
}

/// Turn controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for a shot from this side.
    AwaitingMove(Side),
    /// Every vessel of the loser is destroyed.
    GameOver(Side),
}

/// Errors from driving a [`Game`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A move was requested after the game ended.
    GameOver(Side),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::GameOver(winner) => write!(f, "Game is already over, {} won", winner),
        }
    }
}

impl core::error::Error for GameError {}

/// What happened during one resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub side: Side,
    pub target: Coordinate,
    pub outcome: ShotOutcome,
    /// Targets refused before this one was accepted.
    pub rejected: usize,
    pub next: GameState,
}

/// Final numbers of a finished or running game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct GameSummary {
    pub winner: Option<Side>,
    pub rounds: usize,
    pub human_shots: usize,
    pub computer_shots: usize,
    pub human_vessels_destroyed: usize,
    pub computer_vessels_destroyed: usize,
}

/// A single game: both grids, both move sources and the turn state.
///
/// Index 0 of every pair belongs to the human side, index 1 to the computer.
pub struct Game {
    grids: [Grid; 2],
    sources: [Box<dyn MoveSource>; 2],
    state: GameState,
    round: usize,
    shots: [usize; 2],
}

impl Game {
    /// Start a game on prepared grids. The computer grid is concealed.
    pub fn new(
        human_grid: Grid,
        mut computer_grid: Grid,
        human: Box<dyn MoveSource>,
        computer: Box<dyn MoveSource>,
    ) -> Self {
        computer_grid.set_concealed(true);
        Self {
            grids: [human_grid, computer_grid],
            sources: [human, computer],
            state: GameState::AwaitingMove(Side::Human),
            round: 1,
            shots: [0; 2],
        }
    }

    /// Start a game with both fleets placed at random.
    pub fn with_random_boards<R: Rng>(
        rng: &mut R,
        human: Box<dyn MoveSource>,
        computer: Box<dyn MoveSource>,
    ) -> Result<Self, BoardError> {
        let human_grid = Grid::generate(rng, &FLEET)?;
        let computer_grid = Grid::generate(rng, &FLEET)?;
        Ok(Self::new(human_grid, computer_grid, human, computer))
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn winner(&self) -> Option<Side> {
        match self.state {
            GameState::GameOver(side) => Some(side),
            GameState::AwaitingMove(_) => None,
        }
    }

    /// Grid owned by `side`.
    pub fn grid(&self, side: Side) -> &Grid {
        &self.grids[side.index()]
    }

    /// Current round, starting at 1. A new round begins with every human
    /// shot, extra shots after a hit included.
    pub fn round(&self) -> usize {
        self.round
    }

    /// Whether a person picks the targets for `side`.
    pub fn is_interactive(&self, side: Side) -> bool {
        self.sources[side.index()].is_interactive()
    }

    /// Accepted shots fired by `side`.
    pub fn shots(&self, side: Side) -> usize {
        self.shots[side.index()]
    }

    /// Resolve one shot by the side whose turn it is.
    ///
    /// Rejected targets are reported to the source and asked for again
    /// without changing any state.
    pub fn play_turn(&mut self) -> anyhow::Result<TurnReport> {
        let side = match self.state {
            GameState::AwaitingMove(side) => side,
            GameState::GameOver(winner) => return Err(GameError::GameOver(winner).into()),
        };
        let opponent = side.opponent();
        let size = self.grids[opponent.index()].size();

        let mut rejected = 0;
        let (target, outcome) = loop {
            let target = self.sources[side.index()].next_target(size)?;
            match self.grids[opponent.index()].shoot(target) {
                Ok(outcome) => break (target, outcome),
                Err(e) if e.is_retryable_shot() => {
                    rejected += 1;
                    self.sources[side.index()].handle_rejected(target, &e);
                }
                Err(e) => return Err(e.into()),
            }
        };
        self.shots[side.index()] += 1;
        self.sources[side.index()].handle_outcome(target, outcome);
        debug!("{} shot at {}: {:?}", side, target, outcome);

        self.state = if self.grids[opponent.index()].all_vessels_destroyed() {
            info!("{} wins after {} rounds", side, self.round);
            GameState::GameOver(side)
        } else if outcome.grants_extra_shot() {
            GameState::AwaitingMove(side)
        } else {
            GameState::AwaitingMove(opponent)
        };
        if self.state == GameState::AwaitingMove(Side::Human) {
            self.round += 1;
        }

        Ok(TurnReport {
            side,
            target,
            outcome,
            rejected,
            next: self.state,
        })
    }

    /// Play until one side has destroyed the other's fleet.
    pub fn run(&mut self) -> anyhow::Result<Side> {
        loop {
            if let Some(winner) = self.winner() {
                return Ok(winner);
            }
            self.play_turn()?;
        }
    }

    pub fn summary(&self) -> GameSummary {
        GameSummary {
            winner: self.winner(),
            rounds: self.round,
            human_shots: self.shots(Side::Human),
            computer_shots: self.shots(Side::Computer),
            human_vessels_destroyed: self.grid(Side::Human).destroyed_count(),
            computer_vessels_destroyed: self.grid(Side::Computer).destroyed_count(),
        }
    }
}
