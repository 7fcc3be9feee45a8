//! Grid state: cell matrix, placed vessels and blocked coordinates.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use log::{debug, trace};
use rand::Rng;

use crate::bitboard::BitBoard;
use crate::common::{BoardError, Coordinate, ShotOutcome};
use crate::config::{BOARD_SIZE, MAX_BOARD_RESTARTS, PLACEMENT_ATTEMPTS};
use crate::ship::{Orientation, Vessel};

/// Coordinate set sized for the board.
pub type BB = BitBoard<u64, BOARD_SIZE>;

const _: () = assert!(BOARD_SIZE * BOARD_SIZE <= u64::BITS as usize);

/// Visible state of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Empty,
    Ship,
    Hit,
    Miss,
}

impl CellState {
    fn symbol(self, concealed: bool) -> char {
        match self {
            CellState::Empty => '~',
            CellState::Ship if concealed => '~',
            CellState::Ship => '■',
            CellState::Hit => 'X',
            CellState::Miss => '.',
        }
    }
}

/// One side's board.
///
/// Blocked coordinates are split in two sets. `reserved` holds vessel cells
/// and their placement buffers and only constrains placement. `targeted`
/// holds every shot and every buffer cell revealed around a destroyed
/// vessel; it constrains both placement and shooting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: [[CellState; BOARD_SIZE]; BOARD_SIZE],
    vessels: Vec<Vessel>,
    reserved: BB,
    targeted: BB,
    destroyed_count: usize,
    concealed: bool,
}

impl Grid {
    /// Create an empty, visible grid.
    pub fn new() -> Self {
        Grid {
            cells: [[CellState::Empty; BOARD_SIZE]; BOARD_SIZE],
            vessels: Vec::new(),
            reserved: BB::new(),
            targeted: BB::new(),
            destroyed_count: 0,
            concealed: false,
        }
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    pub fn destroyed_count(&self) -> usize {
        self.destroyed_count
    }

    pub fn is_concealed(&self) -> bool {
        self.concealed
    }

    /// Hide vessel cells when rendering.
    pub fn set_concealed(&mut self, concealed: bool) {
        self.concealed = concealed;
    }

    /// Visible state at `coord`, or `None` off the board.
    pub fn cell(&self, coord: Coordinate) -> Option<CellState> {
        if !coord.in_bounds(BOARD_SIZE) {
            return None;
        }
        Some(self.cells[coord.y as usize][coord.x as usize])
    }

    /// All coordinates unavailable for placement.
    pub fn blocked(&self) -> BB {
        self.reserved | self.targeted
    }

    pub fn is_blocked(&self, coord: Coordinate) -> bool {
        self.reserved.contains(coord) || self.targeted.contains(coord)
    }

    /// Coordinates that can no longer be shot at.
    pub fn targeted(&self) -> BB {
        self.targeted
    }

    pub fn is_targeted(&self, coord: Coordinate) -> bool {
        self.targeted.contains(coord)
    }

    /// Sum of remaining hits over the whole fleet.
    pub fn remaining_hits(&self) -> usize {
        self.vessels.iter().map(Vessel::remaining_hits).sum()
    }

    pub fn all_vessels_destroyed(&self) -> bool {
        self.destroyed_count == self.vessels.len()
    }

    fn set_cell(&mut self, coord: Coordinate, state: CellState) {
        self.cells[coord.y as usize][coord.x as usize] = state;
    }

    /// Place `vessel`, reserving its cells and the buffer around them.
    pub fn place_vessel(&mut self, vessel: Vessel) -> Result<(), BoardError> {
        if vessel
            .occupied_cells()
            .any(|c| !c.in_bounds(BOARD_SIZE) || self.is_blocked(c))
        {
            return Err(BoardError::InvalidPlacement);
        }
        for c in vessel.occupied_cells() {
            self.set_cell(c, CellState::Ship);
            self.reserved.insert(c);
        }
        self.vessels.push(vessel);
        self.compute_buffer(&vessel, false);
        trace!(
            "placed vessel of length {} at {} ({:?})",
            vessel.length(),
            vessel.origin(),
            vessel.orientation()
        );
        Ok(())
    }

    /// Block the 3×3 neighborhood of every cell of `vessel`.
    ///
    /// Without `reveal` the cells are reserved against placement. With
    /// `reveal` (a destroyed vessel) every cell not yet targeted becomes
    /// targeted and is shown as a miss.
    pub fn compute_buffer(&mut self, vessel: &Vessel, reveal: bool) {
        for cell in vessel.occupied_cells() {
            for dy in -1..=1 {
                for dx in -1..=1 {
                    let near = cell.offset(dx, dy);
                    if !near.in_bounds(BOARD_SIZE) {
                        continue;
                    }
                    if reveal {
                        if self.targeted.insert(near) {
                            self.set_cell(near, CellState::Miss);
                        }
                    } else if !self.is_blocked(near) {
                        self.reserved.insert(near);
                    }
                }
            }
        }
    }

    /// Resolve a shot at `target`. Rejected shots leave the grid untouched.
    pub fn shoot(&mut self, target: Coordinate) -> Result<ShotOutcome, BoardError> {
        if !target.in_bounds(BOARD_SIZE) {
            return Err(BoardError::OutOfBounds);
        }
        if self.targeted.contains(target) {
            return Err(BoardError::AlreadyTargeted);
        }
        self.targeted.insert(target);

        let Some(idx) = self.vessels.iter().position(|v| v.is_hit_by(target)) else {
            self.set_cell(target, CellState::Miss);
            trace!("shot at {} missed", target);
            return Ok(ShotOutcome::Miss);
        };

        self.set_cell(target, CellState::Hit);
        let vessel = &mut self.vessels[idx];
        vessel.remaining_hits = vessel.remaining_hits.saturating_sub(1);
        if !vessel.is_destroyed() {
            trace!("shot at {} hit, {} left", target, vessel.remaining_hits);
            return Ok(ShotOutcome::Hit);
        }

        let sunk = *vessel;
        self.destroyed_count += 1;
        self.compute_buffer(&sunk, true);
        debug!(
            "vessel at {} destroyed ({}/{})",
            sunk.origin(),
            self.destroyed_count,
            self.vessels.len()
        );
        Ok(ShotOutcome::Sunk)
    }

    /// One pass of random placement for `fleet`, in order.
    ///
    /// Gives up with `GenerationExhausted` once `PLACEMENT_ATTEMPTS` vessel
    /// placements have been tried in total.
    pub fn random<R: Rng>(rng: &mut R, fleet: &[usize]) -> Result<Self, BoardError> {
        check_fleet(fleet)?;
        let mut grid = Grid::new();
        let mut attempts = 0;
        for &length in fleet {
            loop {
                attempts += 1;
                if attempts > PLACEMENT_ATTEMPTS {
                    return Err(BoardError::GenerationExhausted);
                }
                let origin = Coordinate::new(
                    rng.random_range(0..BOARD_SIZE as i32),
                    rng.random_range(0..BOARD_SIZE as i32),
                );
                let orientation = if rng.random() {
                    Orientation::Horizontal
                } else {
                    Orientation::Vertical
                };
                match grid.place_vessel(Vessel::new(origin, length, orientation)?) {
                    Ok(()) => break,
                    Err(BoardError::InvalidPlacement) => continue,
                    Err(e) => return Err(e),
                }
            }
        }
        Ok(grid)
    }

    /// Random placement that starts over on a fresh grid whenever a pass
    /// runs out of attempts.
    pub fn generate<R: Rng>(rng: &mut R, fleet: &[usize]) -> Result<Self, BoardError> {
        for restart in 1..=MAX_BOARD_RESTARTS {
            match Self::random(rng, fleet) {
                Ok(grid) => return Ok(grid),
                Err(BoardError::GenerationExhausted) => {
                    debug!("fleet placement stuck, restarting board ({})", restart);
                }
                Err(e) => return Err(e),
            }
        }
        Err(BoardError::GenerationExhausted)
    }

    /// Text rendering of the grid, honoring concealment.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

fn check_fleet(fleet: &[usize]) -> Result<(), BoardError> {
    if fleet.iter().any(|&len| len == 0 || len > BOARD_SIZE) {
        return Err(BoardError::InvalidPlacement);
    }
    Ok(())
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "-".repeat(4 * (BOARD_SIZE + 1) - 1);
        writeln!(f, "{}", rule)?;
        write!(f, "_ |")?;
        for x in 0..BOARD_SIZE {
            write!(f, " {} |", x + 1)?;
        }
        writeln!(f)?;
        for (y, row) in self.cells.iter().enumerate() {
            write!(f, "{} |", y + 1)?;
            for cell in row {
                write!(f, " {} |", cell.symbol(self.concealed))?;
            }
            writeln!(f)?;
        }
        write!(f, "{}", rule)
    }
}
