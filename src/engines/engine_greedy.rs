//! Takes the most valuable capture by essence, breaking ties at random.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineError, EngineOutput};
use crate::game_state::chess_types::Piece;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_descriptions::{Move, MoveKind};

pub struct GreedyEngine {
    move_generator: LegalMoveGenerator,
    rng: StdRng,
}

impl GreedyEngine {
    pub fn new() -> Self {
        Self {
            move_generator: LegalMoveGenerator,
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            move_generator: LegalMoveGenerator,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Royal captures outrank everything; siege strikes count as a small gain.
    fn move_value(mv: &Move) -> i32 {
        let capture = mv.captured.map_or(0, |piece: Piece| {
            if piece.is_royal() {
                1_000
            } else {
                piece.kind.essence() * 10
            }
        });
        let bonus = match mv.kind {
            MoveKind::SiegeStrike => 5,
            _ => 0,
        };
        capture + bonus
    }
}

impl Default for GreedyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for GreedyEngine {
    fn name(&self) -> &str {
        "Hollow Greedy"
    }

    fn choose_move(&mut self, game_state: &GameState) -> Result<EngineOutput, EngineError> {
        let legal_moves = self.move_generator.generate_legal_moves(game_state)?;

        let mut best_value = i32::MIN;
        let mut best_moves = Vec::new();
        for mv in &legal_moves {
            let value = Self::move_value(mv);
            if value > best_value {
                best_value = value;
                best_moves.clear();
                best_moves.push(*mv);
            } else if value == best_value {
                best_moves.push(*mv);
            }
        }

        let picked = best_moves
            .as_slice()
            .choose(&mut self.rng)
            .ok_or(EngineError::NoLegalMoves)?;

        let mut out = EngineOutput::play(*picked);
        out.info_lines.push(format!(
            "greedy_engine legal_moves {} capture_score {}",
            legal_moves.len(),
            best_value
        ));
        Ok(out)
    }
}
