use rand::{rngs::SmallRng, SeedableRng};
use seabattle::prelude::*;
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;
    init_logging();

    let mut board_rng = SmallRng::seed_from_u64(seed1 ^ seed2.rotate_left(32));
    let p1 = Box::new(RandomMoveSource::new(SmallRng::seed_from_u64(seed1)));
    let p2 = Box::new(RandomMoveSource::new(SmallRng::seed_from_u64(seed2)));

    let mut game = Game::with_random_boards(&mut board_rng, p1, p2)?;
    let winner = game.run()?;

    let result = json!({
        "winner": winner,
        "summary": game.summary(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
