use crate::common::{BoardError, Coordinate, ShotOutcome};
use log::{debug, trace};
use rand::Rng;

/// Supplies the next target for one side.
///
/// Targets are not required to be valid. The turn controller hands every
/// rejection back through [`MoveSource::handle_rejected`] and asks again.
pub trait MoveSource {
    /// Choose the next coordinate to shoot at on a `size`×`size` grid.
    fn next_target(&mut self, size: usize) -> anyhow::Result<Coordinate>;

    /// Inform the source that `target` was refused by the opponent grid.
    fn handle_rejected(&mut self, _target: Coordinate, _error: &BoardError) {}

    /// Inform the source of the outcome of an accepted shot.
    fn handle_outcome(&mut self, _target: Coordinate, _outcome: ShotOutcome) {}

    /// `true` when a person chooses the targets.
    fn is_interactive(&self) -> bool {
        false
    }
}

/// Uniformly random targets. Repeats are left for the grid to reject.
pub struct RandomMoveSource<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomMoveSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> MoveSource for RandomMoveSource<R> {
    fn next_target(&mut self, size: usize) -> anyhow::Result<Coordinate> {
        if size == 0 {
            anyhow::bail!("cannot pick a target on an empty grid");
        }
        let size = size as i32;
        let target = Coordinate::new(
            self.rng.random_range(0..size),
            self.rng.random_range(0..size),
        );
        trace!("random target {}", target);
        Ok(target)
    }

    fn handle_rejected(&mut self, target: Coordinate, error: &BoardError) {
        trace!("random target {} rejected: {}", target, error);
    }
}

/// Boundary to whatever asks a person for coordinates.
pub trait CoordinatePrompt {
    /// Return a 1-indexed `(x, y)` pair, looping internally until the input
    /// holds two integers. Errors only when no more input can be obtained.
    fn prompt_pair(&mut self) -> anyhow::Result<(i32, i32)>;

    /// Show a message to the person at the prompt.
    fn announce(&mut self, _message: &str) {}
}

/// Targets chosen by a person through a [`CoordinatePrompt`].
pub struct ExternalMoveSource<P: CoordinatePrompt> {
    prompt: P,
}

impl<P: CoordinatePrompt> ExternalMoveSource<P> {
    pub fn new(prompt: P) -> Self {
        Self { prompt }
    }

    pub fn prompt(&self) -> &P {
        &self.prompt
    }
}

impl<P: CoordinatePrompt> MoveSource for ExternalMoveSource<P> {
    fn next_target(&mut self, _size: usize) -> anyhow::Result<Coordinate> {
        let (x, y) = self.prompt.prompt_pair()?;
        Ok(Coordinate::new(x.saturating_sub(1), y.saturating_sub(1)))
    }

    fn handle_rejected(&mut self, target: Coordinate, error: &BoardError) {
        debug!("player target {} rejected: {}", target, error);
        self.prompt.announce(&alloc::format!("{}!", error));
    }

    fn is_interactive(&self) -> bool {
        true
    }
}
