//! Vessels and their occupied cells.

use crate::common::{BoardError, Coordinate};

/// Orientation of a vessel on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Extends towards increasing `x`.
    Horizontal,
    /// Extends towards increasing `y`.
    Vertical,
}

/// A vessel anchored at `origin` and extending `length` cells.
///
/// The shape is fixed at construction. Only the remaining hit counter
/// changes, and only the owning [`crate::Grid`] changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vessel {
    origin: Coordinate,
    length: usize,
    orientation: Orientation,
    pub(crate) remaining_hits: usize,
}

impl Vessel {
    /// Build an undamaged vessel. Fails with `InvalidPlacement` for length 0.
    pub fn new(
        origin: Coordinate,
        length: usize,
        orientation: Orientation,
    ) -> Result<Self, BoardError> {
        if length == 0 {
            return Err(BoardError::InvalidPlacement);
        }
        Ok(Vessel {
            origin,
            length,
            orientation,
            remaining_hits: length,
        })
    }

    /// Cells covered by the vessel, starting at the origin. Not bounds-checked.
    pub fn occupied_cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (0..self.length as i32).map(move |i| match self.orientation {
            Orientation::Horizontal => self.origin.offset(i, 0),
            Orientation::Vertical => self.origin.offset(0, i),
        })
    }

    pub fn is_hit_by(&self, coord: Coordinate) -> bool {
        self.occupied_cells().any(|c| c == coord)
    }

    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Hits still needed to destroy the vessel.
    pub fn remaining_hits(&self) -> usize {
        self.remaining_hits
    }

    pub fn is_destroyed(&self) -> bool {
        self.remaining_hits == 0
    }
}
