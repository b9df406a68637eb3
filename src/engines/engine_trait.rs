//! Opponent move-decision interface.
//!
//! The turn controller hands an engine the turn-started state and expects one
//! move for the side to move, or a resignation. Whatever comes back is
//! re-validated before it touches the game.

use thiserror::Error;

use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::MoveGenerationError;
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineDecision {
    Move(Move),
    Resign,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineOutput {
    pub decision: EngineDecision,
    pub info_lines: Vec<String>,
}

impl EngineOutput {
    pub fn play(mv: Move) -> Self {
        Self {
            decision: EngineDecision::Move(mv),
            info_lines: Vec::new(),
        }
    }

    pub fn resign() -> Self {
        Self {
            decision: EngineDecision::Resign,
            info_lines: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("no legal moves available")]
    NoLegalMoves,
    #[error(transparent)]
    MoveGeneration(#[from] MoveGenerationError),
    #[error("{0}")]
    Other(String),
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn choose_move(&mut self, game_state: &GameState) -> Result<EngineOutput, EngineError>;
}
