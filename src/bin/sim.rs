use rand::{rngs::SmallRng, SeedableRng};
use sea_battle::prelude::*;
use serde_json::json;

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    let mut rng1 = SmallRng::seed_from_u64(seed1);
    let mut rng2 = SmallRng::seed_from_u64(seed2);

    let config = GameConfig::default();
    let generator = FleetGenerator::new(&config);
    let g1 = generator.generate(&mut rng1)?;
    let g2 = generator.generate(&mut rng2)?;

    let p1 = Contestant::new(Box::new(AiPlayer::named("player1")), g1);
    let p2 = Contestant::new(Box::new(AiPlayer::named("player2")), g2);
    let mut game = Match::new(p1, p2, SmallRng::seed_from_u64(seed1 ^ seed2))?;

    let mut shots = 0usize;
    let winner = game.run_with(|_, _| shots += 1)?;

    let result = json!({
        "player1": {"ships_lost": game.grid(Side::User).sunk_count()},
        "player2": {"ships_lost": game.grid(Side::Opponent).sunk_count()},
        "turns": game.turn_index(),
        "shots": shots,
        "winner": game.contestant(winner).name(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
