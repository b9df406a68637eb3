//! Plays a fixed list of commands, then resigns.
//!
//! A scripted step that matches no legal move is still sent, as a plain quiet
//! move, so the caller sees exactly what the script asked for.

use std::collections::VecDeque;

use crate::engines::engine_trait::{Engine, EngineError, EngineOutput};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_descriptions::{Move, MoveKind};
use crate::turn::command::Command;

pub struct ScriptedEngine {
    move_generator: LegalMoveGenerator,
    script: VecDeque<Command>,
}

impl ScriptedEngine {
    pub fn new(script: impl IntoIterator<Item = Command>) -> Self {
        Self {
            move_generator: LegalMoveGenerator,
            script: script.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl Engine for ScriptedEngine {
    fn name(&self) -> &str {
        "Hollow Scripted"
    }

    fn choose_move(&mut self, game_state: &GameState) -> Result<EngineOutput, EngineError> {
        let Some(step) = self.script.pop_front() else {
            return Ok(EngineOutput::resign());
        };

        let from_plane = step.from_plane.or(game_state.active_plane());
        let legal = self
            .move_generator
            .generate_moves_from(game_state, from_plane, step.from)?;
        if let Some(mv) = legal.into_iter().find(|mv| step.matches(mv)) {
            return Ok(EngineOutput::play(mv));
        }

        let piece = game_state
            .boards
            .board(from_plane)
            .and_then(|board| board.piece_at(step.from))
            .ok_or_else(|| EngineError::Other(format!("scripted square {} is empty", step.from)))?;
        let mut raw = Move::quiet(step.from, step.to, piece).on_plane(from_plane);
        if step.is_plane_shift() {
            raw.kind = MoveKind::PlaneShift;
            raw.target_plane = step.to_plane;
        }
        Ok(EngineOutput::play(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::ScriptedEngine;
    use crate::engines::engine_trait::{Engine, EngineDecision};
    use crate::game_state::game_state::GameState;
    use crate::game_state::variant::{Variant, VariantConfig};
    use crate::turn::command::Command;

    #[test]
    fn plays_script_then_resigns() {
        let game = GameState::new_game(VariantConfig::new(Variant::Chess));
        let script = [Command::parse("E2", "E4").expect("squares should parse")];
        let mut engine = ScriptedEngine::new(script);

        let first = engine.choose_move(&game).expect("script step should resolve");
        match first.decision {
            EngineDecision::Move(mv) => assert_eq!(mv.notation(), "E2-E4"),
            EngineDecision::Resign => panic!("first step should be a move"),
        }
        assert_eq!(engine.remaining(), 0);

        let second = engine.choose_move(&game).expect("exhausted script should resign");
        assert_eq!(second.decision, EngineDecision::Resign);
    }
}
