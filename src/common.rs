//! Common types: grid coordinates, shot outcomes and board errors.

use core::fmt;

/// A position on the grid. `x` is the column and `y` the row, both 0-indexed.
///
/// Coordinates are signed so that input from outside the board (including
/// negative values) can be represented and rejected by the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Both axes within `[0, size)`.
    pub fn in_bounds(&self, size: usize) -> bool {
        let size = size as i64;
        (0..size).contains(&(self.x as i64)) && (0..size).contains(&(self.y as i64))
    }

    /// Offset by `(dx, dy)`, saturating at the `i32` range.
    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Outcome of a shot that was accepted by the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// Shot hit a vessel that is still afloat.
    Hit,
    /// Shot hit nothing.
    Miss,
    /// Shot took the last remaining hit of a vessel.
    Sunk,
}

impl ShotOutcome {
    /// Hits and sinks let the shooter fire again.
    pub fn grants_extra_shot(&self) -> bool {
        matches!(self, ShotOutcome::Hit | ShotOutcome::Sunk)
    }
}

/// Errors returned by Grid operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Vessel leaves the board or touches a blocked cell.
    InvalidPlacement,
    /// Shot coordinate lies outside the board.
    OutOfBounds,
    /// Coordinate was already shot at.
    AlreadyTargeted,
    /// Random placement used up its attempt budget.
    GenerationExhausted,
}

impl BoardError {
    /// Rejections the shooting side recovers from by choosing another target.
    pub fn is_retryable_shot(&self) -> bool {
        matches!(self, BoardError::OutOfBounds | BoardError::AlreadyTargeted)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidPlacement => write!(f, "Vessel cannot be placed there"),
            BoardError::OutOfBounds => write!(f, "You cannot shoot outside the board"),
            BoardError::AlreadyTargeted => write!(f, "You already shot at that cell"),
            BoardError::GenerationExhausted => {
                write!(f, "Ran out of attempts while placing the fleet")
            }
        }
    }
}

impl core::error::Error for BoardError {}
