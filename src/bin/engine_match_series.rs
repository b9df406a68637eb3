//! Standalone engine-vs-engine series runner.
//!
//! Run with:
//! `cargo run --release --bin engine_match_series -- --variant rite --games 20`
//! `RUST_LOG=hollow_chess=debug cargo run --bin engine_match_series`

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use hollow_chess::engines::engine_greedy::GreedyEngine;
use hollow_chess::engines::engine_random::RandomEngine;
use hollow_chess::engines::engine_trait::Engine;
use hollow_chess::game_state::variant::{Variant, VariantConfig};
use hollow_chess::utils::engine_match_harness::{
    play_engine_match_series, MatchConfig, MatchSeriesConfig,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum EngineKind {
    Random,
    Greedy,
}

impl EngineKind {
    fn build(self, seed: u64) -> Box<dyn Engine> {
        match self {
            EngineKind::Random => Box::new(RandomEngine::with_seed(seed)),
            EngineKind::Greedy => Box::new(GreedyEngine::with_seed(seed)),
        }
    }
}

#[derive(Parser, Debug)]
#[command(about = "Play a seeded series of engine matches in one variant")]
struct Args {
    #[arg(long, default_value = "chess")]
    variant: Variant,

    /// JSON `VariantConfig`; a `variant` field overrides `--variant`.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, default_value_t = 10)]
    games: u16,

    #[arg(long, default_value_t = 1234)]
    seed: u64,

    #[arg(long, default_value_t = 200)]
    max_plies: u16,

    #[arg(long, value_enum, default_value_t = EngineKind::Greedy)]
    player1: EngineKind,

    #[arg(long, value_enum, default_value_t = EngineKind::Random)]
    player2: EngineKind,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let variant = match &args.config {
        Some(path) => VariantConfig::from_json_or(&std::fs::read_to_string(path)?, args.variant)?,
        None => VariantConfig::new(args.variant),
    };

    let player1 = args.player1;
    let player2 = args.player2;
    // Offset so identical engine kinds do not mirror each other's choices.
    let stats = play_engine_match_series(
        move |seed| player1.build(seed),
        move |seed| player2.build(seed.wrapping_mul(31).wrapping_add(7)),
        MatchSeriesConfig {
            games: args.games,
            base_seed: args.seed,
            per_game: MatchConfig {
                variant,
                max_plies: args.max_plies,
            },
        },
    )?;

    println!("{}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);
    Ok(())
}
