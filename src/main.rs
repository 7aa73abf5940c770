#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use sea_battle::{
    init_logging, ui, AiPlayer, CliPlayer, Contestant, FleetGenerator, GameConfig, Match, Side,
    TurnReport,
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
    command: Option<Commands>,
    #[arg(long, global = true, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, global = true, default_value_t = sea_battle::BOARD_SIZE)]
    size: usize,
    #[arg(long, global = true, value_delimiter = ',', help = "Vessel lengths, e.g. --fleet 3,2,2,1,1,1,1")]
    fleet: Option<Vec<usize>>,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer (default).
    Play,
    /// Watch the computer play against itself.
    Auto,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut config = GameConfig::with_size(cli.size);
    if let Some(fleet) = cli.fleet {
        config.fleet = fleet;
    }
    config.validate()?;

    if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let mut rng = if let Some(s) = cli.seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let generator = FleetGenerator::new(&config);
    let user_grid = generator.generate(&mut rng)?;
    let opponent_grid = generator.generate(&mut rng)?;
    let match_rng = SmallRng::from_rng(&mut rng);

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            println!("{}", ui::greeting());
            let user = Contestant::new(Box::new(CliPlayer::stdio()), user_grid);
            let opponent = Contestant::new(Box::new(AiPlayer::new()), opponent_grid);
            let mut game = Match::new(user, opponent, match_rng)?;
            play(&mut game, true)
        }
        Commands::Auto => {
            let user = Contestant::new(Box::new(AiPlayer::named("Computer 1")), user_grid);
            let opponent = Contestant::new(Box::new(AiPlayer::named("Computer 2")), opponent_grid);
            let mut game = Match::new(user, opponent, match_rng)?;
            play(&mut game, false)
        }
    }
}

#[cfg(feature = "std")]
fn print_boards(game: &Match, hide_opponent: bool) {
    println!("{}\n", "-".repeat(20));
    println!("{} board:\n", game.contestant(Side::User).name());
    println!("{}", ui::render_grid(game.grid(Side::User), false));
    println!("{}", "-".repeat(20));
    println!("{} board:\n", game.contestant(Side::Opponent).name());
    println!("{}", ui::render_grid(game.grid(Side::Opponent), hide_opponent));
    println!("{}", "-".repeat(20));
}

#[cfg(feature = "std")]
fn play(game: &mut Match, hide_opponent: bool) -> anyhow::Result<()> {
    loop {
        print_boards(game, hide_opponent);
        let side = game.active_side();
        println!("{} moves!", game.contestant(side).name());
        let TurnReport {
            target,
            outcome,
            winner,
            ..
        } = game.play_turn()?;
        println!("{} fired at {}: {}", game.contestant(side).name(), target, outcome);

        if let Some(w) = winner {
            print_boards(game, false);
            match (w, hide_opponent) {
                (Side::User, true) => println!("You won!"),
                (Side::Opponent, true) => println!("The computer won!"),
                _ => println!("{} won!", game.contestant(w).name()),
            }
            return Ok(());
        }
    }
}
