/// Side length of the square board.
pub const BOARD_SIZE: usize = 6;

/// Number of vessels in the standard fleet.
pub const NUM_SHIPS: usize = 7;

/// Vessel lengths placed on every board, longest first.
pub const FLEET: [usize; NUM_SHIPS] = [3, 2, 2, 1, 1, 1, 1];

/// Total number of vessel cells in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 3 + 2 + 2 + 1 + 1 + 1 + 1;

/// Placement attempts allowed for a single board before giving up on it.
pub const PLACEMENT_ATTEMPTS: usize = 2000;

/// Fresh boards tried by [`crate::Grid::generate`] before reporting failure.
pub const MAX_BOARD_RESTARTS: usize = 1000;
