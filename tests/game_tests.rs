use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{
    BoardError, Coordinate, Game, GameError, GameState, Grid, MoveSource, Orientation,
    RandomMoveSource, ShotOutcome, Side, Vessel,
};

/// Plays a fixed list of targets and records what it is told.
#[derive(Clone, Default)]
struct Scripted {
    targets: Rc<RefCell<VecDeque<Coordinate>>>,
    rejected: Rc<RefCell<Vec<(Coordinate, BoardError)>>>,
    outcomes: Rc<RefCell<Vec<(Coordinate, ShotOutcome)>>>,
}

impl Scripted {
    fn new(targets: &[(i32, i32)]) -> Self {
        let s = Self::default();
        s.targets
            .borrow_mut()
            .extend(targets.iter().map(|&(x, y)| Coordinate::new(x, y)));
        s
    }
}

impl MoveSource for Scripted {
    fn next_target(&mut self, _size: usize) -> anyhow::Result<Coordinate> {
        self.targets
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("script exhausted"))
    }

    fn handle_rejected(&mut self, target: Coordinate, error: &BoardError) {
        self.rejected.borrow_mut().push((target, error.clone()));
    }

    fn handle_outcome(&mut self, target: Coordinate, outcome: ShotOutcome) {
        self.outcomes.borrow_mut().push((target, outcome));
    }
}

fn grid_with(vessels: &[(i32, i32, usize, Orientation)]) -> Grid {
    let mut grid = Grid::new();
    for &(x, y, len, o) in vessels {
        grid.place_vessel(Vessel::new(Coordinate::new(x, y), len, o).unwrap())
            .unwrap();
    }
    grid
}

fn scripted_game(human: &Scripted, computer: &Scripted) -> Game {
    Game::new(
        grid_with(&[(5, 5, 1, Orientation::Horizontal)]),
        grid_with(&[(0, 0, 2, Orientation::Horizontal)]),
        Box::new(human.clone()),
        Box::new(computer.clone()),
    )
}

#[test]
fn test_initial_state() {
    let game = scripted_game(&Scripted::default(), &Scripted::default());
    assert_eq!(game.state(), GameState::AwaitingMove(Side::Human));
    assert_eq!(game.winner(), None);
    assert_eq!(game.round(), 1);
    assert!(game.grid(Side::Computer).is_concealed());
    assert!(!game.grid(Side::Human).is_concealed());
}

#[test]
fn test_hit_keeps_turn_until_win() {
    let human = Scripted::new(&[(0, 0), (1, 0)]);
    let mut game = scripted_game(&human, &Scripted::default());

    let first = game.play_turn().unwrap();
    assert_eq!(first.side, Side::Human);
    assert_eq!(first.outcome, ShotOutcome::Hit);
    assert_eq!(first.next, GameState::AwaitingMove(Side::Human));

    let second = game.play_turn().unwrap();
    assert_eq!(second.outcome, ShotOutcome::Sunk);
    assert_eq!(second.next, GameState::GameOver(Side::Human));
    assert_eq!(game.winner(), Some(Side::Human));
    assert!(game.grid(Side::Computer).all_vessels_destroyed());
    assert!(!game.grid(Side::Human).all_vessels_destroyed());
    assert_eq!(human.outcomes.borrow().len(), 2);
}

#[test]
fn test_sunk_grants_extra_shot() {
    let human = Scripted::new(&[(0, 0), (1, 0), (2, 2)]);
    let mut game = Game::new(
        grid_with(&[(5, 5, 1, Orientation::Horizontal)]),
        grid_with(&[
            (0, 0, 2, Orientation::Horizontal),
            (4, 4, 1, Orientation::Horizontal),
        ]),
        Box::new(human.clone()),
        Box::new(Scripted::default()),
    );
    game.play_turn().unwrap();
    let sunk = game.play_turn().unwrap();
    assert_eq!(sunk.outcome, ShotOutcome::Sunk);
    assert_eq!(sunk.next, GameState::AwaitingMove(Side::Human));

    let miss = game.play_turn().unwrap();
    assert_eq!(miss.outcome, ShotOutcome::Miss);
    assert_eq!(miss.next, GameState::AwaitingMove(Side::Computer));
}

#[test]
fn test_miss_passes_turn_and_rejections_retry() {
    let human = Scripted::new(&[(3, 3)]);
    let computer = Scripted::new(&[(9, 9), (-1, 2), (5, 5)]);
    let mut game = scripted_game(&human, &computer);

    let miss = game.play_turn().unwrap();
    assert_eq!(miss.outcome, ShotOutcome::Miss);
    assert_eq!(game.state(), GameState::AwaitingMove(Side::Computer));

    let before = game.grid(Side::Human).clone();
    let win = game.play_turn().unwrap();
    assert_eq!(win.side, Side::Computer);
    assert_eq!(win.rejected, 2);
    assert_eq!(win.target, Coordinate::new(5, 5));
    assert_eq!(win.outcome, ShotOutcome::Sunk);
    assert_eq!(game.winner(), Some(Side::Computer));
    assert_ne!(game.grid(Side::Human), &before);

    let rejected = computer.rejected.borrow();
    assert_eq!(
        *rejected,
        vec![
            (Coordinate::new(9, 9), BoardError::OutOfBounds),
            (Coordinate::new(-1, 2), BoardError::OutOfBounds),
        ]
    );
    assert_eq!(game.shots(Side::Computer), 1);
}

#[test]
fn test_repeat_target_does_not_consume_turn() {
    let human = Scripted::new(&[(3, 3), (3, 3), (0, 0)]);
    let computer = Scripted::new(&[(0, 0)]);
    let mut game = scripted_game(&human, &computer);

    game.play_turn().unwrap();
    let computer_miss = game.play_turn().unwrap();
    assert_eq!(computer_miss.outcome, ShotOutcome::Miss);
    assert_eq!(game.round(), 2);

    let report = game.play_turn().unwrap();
    assert_eq!(report.side, Side::Human);
    assert_eq!(report.rejected, 1);
    assert_eq!(report.outcome, ShotOutcome::Hit);
    assert_eq!(
        human.rejected.borrow()[0],
        (Coordinate::new(3, 3), BoardError::AlreadyTargeted)
    );
    assert_eq!(game.shots(Side::Human), 2);
}

#[test]
fn test_every_human_shot_starts_a_round() {
    let human = Scripted::new(&[(0, 0), (3, 3)]);
    let computer = Scripted::new(&[(0, 5)]);
    let mut game = scripted_game(&human, &computer);

    assert_eq!(game.play_turn().unwrap().outcome, ShotOutcome::Hit);
    assert_eq!(game.round(), 2);

    assert_eq!(game.play_turn().unwrap().outcome, ShotOutcome::Miss);
    assert_eq!(game.round(), 2);

    assert_eq!(game.play_turn().unwrap().side, Side::Computer);
    assert_eq!(game.round(), 3);
    assert_eq!(game.summary().rounds, 3);
}

#[test]
fn test_play_after_game_over_is_error() {
    let human = Scripted::new(&[(0, 0), (1, 0), (2, 2)]);
    let mut game = scripted_game(&human, &Scripted::default());
    assert_eq!(game.run().unwrap(), Side::Human);

    let err = game.play_turn().unwrap_err();
    assert_eq!(
        err.downcast_ref::<GameError>(),
        Some(&GameError::GameOver(Side::Human))
    );
    assert_eq!(human.targets.borrow().len(), 1);
}

#[test]
fn test_exhausted_source_ends_run_with_error() {
    let human = Scripted::new(&[(3, 3)]);
    let mut game = scripted_game(&human, &Scripted::default());
    assert!(game.run().is_err());
    assert_eq!(game.state(), GameState::AwaitingMove(Side::Computer));
}

#[test]
fn test_random_game_has_single_winner() {
    for seed in 0..20u64 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let human = Box::new(RandomMoveSource::new(SmallRng::seed_from_u64(seed + 100)));
        let computer = Box::new(RandomMoveSource::new(SmallRng::seed_from_u64(seed + 200)));
        let mut game = Game::with_random_boards(&mut rng, human, computer).unwrap();
        assert!(game.grid(Side::Computer).is_concealed());

        let winner = game.run().unwrap();
        assert!(game.grid(winner.opponent()).all_vessels_destroyed());
        assert!(!game.grid(winner).all_vessels_destroyed());

        let summary = game.summary();
        assert_eq!(summary.winner, Some(winner));
        assert!(summary.human_shots <= 36 && summary.computer_shots <= 36);
        let loser_destroyed = match winner {
            Side::Human => summary.computer_vessels_destroyed,
            Side::Computer => summary.human_vessels_destroyed,
        };
        assert_eq!(loser_destroyed, 7);
    }
}
