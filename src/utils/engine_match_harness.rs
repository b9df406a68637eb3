//! Head-to-head engine match harness.
//!
//! Runs two `Engine` implementations against each other through the
//! `TurnController`, so every engine move goes through the same validation
//! and variant effects as a human command.

use std::time::Instant;

use chrono::{DateTime, Utc};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, info};

use crate::engines::engine_trait::Engine;
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::game_state::variant::VariantConfig;
use crate::turn::command::TurnError;
use crate::turn::turn_controller::{OpponentReply, TurnController};
use crate::turn::victory::{VictoryOutcome, Winner};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    Player1,
    Player2,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeriesOutcome {
    PlayerWin {
        player: PlayerId,
        color: Color,
        reason: String,
    },
    Draw {
        reason: String,
    },
    DrawMaxPlies,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub variant: VariantConfig,
    pub max_plies: u16,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            variant: VariantConfig::default(),
            max_plies: 300,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    /// `None` when the ply limit ran out first.
    pub outcome: Option<VictoryOutcome>,
    pub final_state: GameState,
    pub played_moves: Vec<String>,
    pub white_move_count: u32,
    pub black_move_count: u32,
    pub white_total_time_ns: u128,
    pub black_total_time_ns: u128,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 9,
            base_seed: 0,
            per_game: MatchConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub draws: u16,
    pub outcomes: Vec<SeriesOutcome>,
    pub player1_moves: u32,
    pub player2_moves: u32,
    pub player1_total_time_ns: u128,
    pub player2_total_time_ns: u128,
    pub player1_avg_move_time_ms: f64,
    pub player2_avg_move_time_ms: f64,
    pub overall_avg_move_time_ms: f64,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        format!(
            "games={} player1_wins={} player2_wins={} draws={} p1_avg_ms={:.3} p2_avg_ms={:.3} overall_avg_ms={:.3}",
            self.games,
            self.player1_wins,
            self.player2_wins,
            self.draws,
            self.player1_avg_move_time_ms,
            self.player2_avg_move_time_ms,
            self.overall_avg_move_time_ms
        )
    }
}

/// Play a single engine-vs-engine match from the variant's start position.
///
/// `engine_white` is White, `engine_black` is Black.
pub fn play_engine_match(
    engine_white: Box<dyn Engine>,
    engine_black: Box<dyn Engine>,
    config: MatchConfig,
) -> Result<MatchResult, TurnError> {
    let controller = TurnController::new(config.variant);
    play_engine_match_with_controller(controller, engine_white, engine_black, config.max_plies)
}

/// Same as [`play_engine_match`] from a caller-provided position.
pub fn play_engine_match_from_state(
    engine_white: Box<dyn Engine>,
    engine_black: Box<dyn Engine>,
    start_state: GameState,
    max_plies: u16,
) -> Result<MatchResult, TurnError> {
    let controller = TurnController::from_state(start_state)?;
    play_engine_match_with_controller(controller, engine_white, engine_black, max_plies)
}

fn play_engine_match_with_controller(
    mut controller: TurnController,
    mut engine_white: Box<dyn Engine>,
    mut engine_black: Box<dyn Engine>,
    max_plies: u16,
) -> Result<MatchResult, TurnError> {
    engine_white.new_game();
    engine_black.new_game();

    let started_at = Utc::now();
    let mut played_moves = Vec::<String>::new();
    let mut white_move_count = 0u32;
    let mut black_move_count = 0u32;
    let mut white_total_time_ns = 0u128;
    let mut black_total_time_ns = 0u128;

    for _ in 0..max_plies {
        if controller.outcome().is_some() {
            break;
        }

        let mover = controller.state().side_to_move;
        let started = Instant::now();
        let reply = match mover {
            Color::Light => controller.request_opponent_move(engine_white.as_mut())?,
            Color::Dark => controller.request_opponent_move(engine_black.as_mut())?,
        };
        let elapsed_ns = started.elapsed().as_nanos();

        match mover {
            Color::Light => {
                white_move_count = white_move_count.saturating_add(1);
                white_total_time_ns = white_total_time_ns.saturating_add(elapsed_ns);
            }
            Color::Dark => {
                black_move_count = black_move_count.saturating_add(1);
                black_total_time_ns = black_total_time_ns.saturating_add(elapsed_ns);
            }
        }

        match reply {
            OpponentReply::Moved(report) => {
                debug!(side = %mover, mv = %report.mv, "engine move");
                played_moves.push(report.mv.notation());
            }
            OpponentReply::Resigned(_) => break,
        }
    }

    Ok(MatchResult {
        outcome: controller.outcome().cloned(),
        final_state: controller.state().clone(),
        played_moves,
        white_move_count,
        black_move_count,
        white_total_time_ns,
        black_total_time_ns,
        started_at,
        finished_at: Utc::now(),
    })
}

/// Play a series of matches and aggregate win/loss/draw statistics.
///
/// Player colors are randomized each game (deterministic from `base_seed`).
/// Each factory receives the per-game seed.
pub fn play_engine_match_series<F1, F2>(
    player1_factory: F1,
    player2_factory: F2,
    config: MatchSeriesConfig,
) -> Result<MatchSeriesStats, TurnError>
where
    F1: Fn(u64) -> Box<dyn Engine>,
    F2: Fn(u64) -> Box<dyn Engine>,
{
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };
    let mut color_rng = StdRng::seed_from_u64(config.base_seed ^ 0xA5A5_5A5A_0123_4567);

    for i in 0..config.games {
        let player1_is_white = color_rng.random_bool(0.5);
        let seed = config.base_seed.wrapping_add(u64::from(i));
        info!(
            game = i + 1,
            games = config.games,
            seed,
            variant = %config.per_game.variant.variant,
            player1_is_white,
            "starting game"
        );

        let result = if player1_is_white {
            play_engine_match(player1_factory(seed), player2_factory(seed), config.per_game.clone())?
        } else {
            play_engine_match(player2_factory(seed), player1_factory(seed), config.per_game.clone())?
        };

        let (p1_moves, p2_moves, p1_ns, p2_ns) = if player1_is_white {
            (
                result.white_move_count,
                result.black_move_count,
                result.white_total_time_ns,
                result.black_total_time_ns,
            )
        } else {
            (
                result.black_move_count,
                result.white_move_count,
                result.black_total_time_ns,
                result.white_total_time_ns,
            )
        };
        stats.player1_moves = stats.player1_moves.saturating_add(p1_moves);
        stats.player2_moves = stats.player2_moves.saturating_add(p2_moves);
        stats.player1_total_time_ns = stats.player1_total_time_ns.saturating_add(p1_ns);
        stats.player2_total_time_ns = stats.player2_total_time_ns.saturating_add(p2_ns);

        let mapped = match result.outcome {
            None => {
                stats.draws += 1;
                SeriesOutcome::DrawMaxPlies
            }
            Some(VictoryOutcome {
                winner: Winner::Draw,
                reason,
            }) => {
                stats.draws += 1;
                SeriesOutcome::Draw { reason }
            }
            Some(VictoryOutcome { winner, reason }) => {
                let color = if winner == Winner::White { Color::Light } else { Color::Dark };
                let player = if (color == Color::Light) == player1_is_white {
                    stats.player1_wins += 1;
                    PlayerId::Player1
                } else {
                    stats.player2_wins += 1;
                    PlayerId::Player2
                };
                SeriesOutcome::PlayerWin { player, color, reason }
            }
        };

        info!(
            game = i + 1,
            result = ?mapped,
            p1_wins = stats.player1_wins,
            p2_wins = stats.player2_wins,
            draws = stats.draws,
            "finished game"
        );
        stats.outcomes.push(mapped);
    }

    stats.player1_avg_move_time_ms = avg_ns_per_move_ms(stats.player1_total_time_ns, stats.player1_moves);
    stats.player2_avg_move_time_ms = avg_ns_per_move_ms(stats.player2_total_time_ns, stats.player2_moves);

    let total_ns = stats
        .player1_total_time_ns
        .saturating_add(stats.player2_total_time_ns);
    let total_moves = stats.player1_moves.saturating_add(stats.player2_moves);
    stats.overall_avg_move_time_ms = avg_ns_per_move_ms(total_ns, total_moves);

    Ok(stats)
}

#[inline]
fn avg_ns_per_move_ms(total_ns: u128, moves: u32) -> f64 {
    if moves == 0 {
        0.0
    } else {
        (total_ns as f64) / (moves as f64) / 1_000_000.0
    }
}
