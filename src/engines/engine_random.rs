//! Uniform random legal move. Seedable for reproducible matches.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineError, EngineOutput};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;

pub struct RandomEngine {
    move_generator: LegalMoveGenerator,
    rng: StdRng,
}

impl RandomEngine {
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
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Hollow Random"
    }

    fn choose_move(&mut self, game_state: &GameState) -> Result<EngineOutput, EngineError> {
        let legal_moves = self.move_generator.generate_legal_moves(game_state)?;
        let picked = legal_moves
            .as_slice()
            .choose(&mut self.rng)
            .ok_or(EngineError::NoLegalMoves)?;

        let mut out = EngineOutput::play(*picked);
        out.info_lines
            .push(format!("random_engine legal_moves {}", legal_moves.len()));
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::RandomEngine;
    use crate::engines::engine_trait::{Engine, EngineDecision};
    use crate::game_state::game_state::GameState;
    use crate::game_state::variant::{Variant, VariantConfig};
    use crate::move_generation::legal_move_generator::LegalMoveGenerator;
    use crate::move_generation::move_generator::MoveGenerator;

    #[test]
    fn picks_a_legal_move_in_every_variant() {
        for variant in Variant::ALL {
            let game = GameState::new_game(VariantConfig::new(variant));
            let legal = LegalMoveGenerator
                .generate_legal_moves(&game)
                .expect("move generation should succeed");

            let mut engine = RandomEngine::with_seed(7);
            let out = engine.choose_move(&game).expect("engine should move");
            match out.decision {
                EngineDecision::Move(mv) => assert!(legal.contains(&mv), "{variant}: {mv}"),
                EngineDecision::Resign => panic!("random engine should not resign"),
            }
        }
    }

    #[test]
    fn same_seed_same_choice() {
        let game = GameState::new_game(VariantConfig::new(Variant::Chess));
        let a = RandomEngine::with_seed(42).choose_move(&game).expect("engine should move");
        let b = RandomEngine::with_seed(42).choose_move(&game).expect("engine should move");
        assert_eq!(a.decision, b.decision);
    }
}
