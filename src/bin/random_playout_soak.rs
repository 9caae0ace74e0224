//! Random self-play soak runner for the rules engine.
//!
//! Run with:
//! `cargo run --release --bin random_playout_soak -- --games 200 --seed 7 --max-plies 400`

use duel_chess::move_generation::game_termination::TerminationStatus;
use duel_chess::utils::random_playout::{play_random_game, PlayoutConfig};

fn parse_arg<T: std::str::FromStr>(flag: &str, default: T) -> T {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            if let Ok(v) = args[i + 1].parse::<T>() {
                return v;
            }
        }
    }
    default
}

fn main() -> Result<(), String> {
    let defaults = PlayoutConfig::default();
    let games: u64 = parse_arg("--games", 100);
    let base_seed: u64 = parse_arg("--seed", defaults.seed);
    let max_plies: u16 = parse_arg("--max-plies", defaults.max_plies);
    let verbose = std::env::args().any(|a| a == "--verbose" || a == "-v");

    println!(
        "info string soak games={} base_seed={} max_plies={}",
        games, base_seed, max_plies
    );

    let mut checkmates = 0u64;
    let mut stalemates = 0u64;
    let mut material_draws = 0u64;
    let mut fifty_move_draws = 0u64;
    let mut unfinished = 0u64;
    let mut total_plies = 0u64;

    for game in 0..games {
        let result = play_random_game(&PlayoutConfig {
            max_plies,
            seed: base_seed.wrapping_add(game),
        })?;

        match result.termination {
            TerminationStatus::Checkmate(_) => checkmates += 1,
            TerminationStatus::Stalemate => stalemates += 1,
            TerminationStatus::InsufficientMaterial => material_draws += 1,
            TerminationStatus::FiftyMoveDraw => fifty_move_draws += 1,
            TerminationStatus::Ongoing => unfinished += 1,
        }
        total_plies += u64::from(result.plies);

        if verbose {
            println!("info string {}", result.report());
        }
    }

    let avg_plies = if games == 0 {
        0.0
    } else {
        total_plies as f64 / games as f64
    };
    println!(
        "info string done checkmates={} stalemates={} insufficient_material={} fifty_move={} unfinished={} avg_plies={:.1}",
        checkmates, stalemates, material_draws, fifty_move_draws, unfinished, avg_plies
    );
    Ok(())
}
