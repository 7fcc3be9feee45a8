#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use seabattle::{
    init_logging, ExternalMoveSource, Game, GameState, MoveSource, RandomMoveSource,
    ShotOutcome, Side, StdinPrompt, TurnReport,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer from this terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible boards (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Watch two random players fight it out.
    Watch {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let seed = match cli.command {
        Commands::Play { seed } | Commands::Watch { seed } => seed,
    };
    let human: Box<dyn MoveSource> = match cli.command {
        Commands::Play { .. } => Box::new(ExternalMoveSource::new(StdinPrompt::stdio())),
        Commands::Watch { .. } => Box::new(RandomMoveSource::new(make_rng(seed, 2))),
    };
    if let Some(s) = seed {
        println!("Using fixed seed: {} (boards will be reproducible)", s);
    }

    println!("---------------------------");
    println!("        Sea  Battle        ");
    println!("  input: column then row   ");

    let mut rng = make_rng(seed, 0);
    let computer = Box::new(RandomMoveSource::new(make_rng(seed, 1)));
    let mut game = Game::with_random_boards(&mut rng, human, computer)?;
    play(&mut game)
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>, stream: u64) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s.wrapping_add(stream)),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
fn play(game: &mut Game) -> anyhow::Result<()> {
    let mut announced_round = 0;
    while let GameState::AwaitingMove(side) = game.state() {
        if game.round() != announced_round {
            announced_round = game.round();
            println!("------------ {} ------------", announced_round);
            println!("ROUND {}", announced_round);
        }
        print_boards(game);
        match side {
            Side::Human if game.is_interactive(Side::Human) => println!("Your move!"),
            Side::Human => println!("Player's move!"),
            Side::Computer => println!("Computer's move!"),
        }
        let report = game.play_turn()?;
        print_report(&report);
    }

    println!("---------------------------");
    print_boards(game);
    match game.winner() {
        Some(Side::Human) if game.is_interactive(Side::Human) => println!("You win!"),
        Some(Side::Human) => println!("Player wins!"),
        Some(Side::Computer) => println!("The computer wins!"),
        None => {}
    }
    Ok(())
}

#[cfg(feature = "std")]
fn print_boards(game: &Game) {
    println!("Your board:");
    println!("{}", game.grid(Side::Human).render());
    println!("Computer board:");
    println!("{}", game.grid(Side::Computer).render());
}

#[cfg(feature = "std")]
fn print_report(report: &TurnReport) {
    if report.side == Side::Computer {
        println!(
            "Computer shoots at {} {}",
            report.target.x + 1,
            report.target.y + 1
        );
    }
    match report.outcome {
        ShotOutcome::Miss => println!("Miss!"),
        ShotOutcome::Hit => println!("Vessel hit! Shoot again."),
        ShotOutcome::Sunk => println!("Vessel destroyed!"),
    }
}
