//! Terminal-state evaluation after a half-move.
//!
//! Precedence: checkmate, then the variant's instant conditions, then
//! stalemate. Rite resolves its last stand by essence and a frozen
//! Helmbreaker invader loses.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::game_state::variant::Variant;
use crate::move_generation::legal_move_checks::is_royal_in_check;
use crate::move_generation::move_generator::{MoveGenResult, MoveGenerator};
use crate::variant_rules::lambda::has_triune_dominance;
use crate::variant_rules::turn_effects::turn_started;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    White,
    Black,
    Draw,
}

impl From<Color> for Winner {
    fn from(color: Color) -> Self {
        match color {
            Color::Light => Winner::White,
            Color::Dark => Winner::Black,
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Winner::White => "White",
            Winner::Black => "Black",
            Winner::Draw => "Draw",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VictoryOutcome {
    pub winner: Winner,
    pub reason: String,
}

impl VictoryOutcome {
    pub fn win(color: Color, reason: impl Into<String>) -> Self {
        Self {
            winner: color.into(),
            reason: reason.into(),
        }
    }

    pub fn draw(reason: impl Into<String>) -> Self {
        Self {
            winner: Winner::Draw,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for VictoryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.winner, self.reason)
    }
}

/// Judge the position after a half-move. The side that just moved is the
/// opposite of `game_state.side_to_move`.
pub fn evaluate_victory<G: MoveGenerator + ?Sized>(
    game_state: &GameState,
    generator: &G,
) -> MoveGenResult<Option<VictoryOutcome>> {
    let defender = game_state.side_to_move;
    let mover = defender.opposite();

    let view = turn_started(game_state);
    let has_moves = !generator.generate_legal_moves(&view)?.is_empty();
    let in_check = is_royal_in_check(&view, defender);

    let outcome = if in_check && !has_moves {
        Some(VictoryOutcome::win(mover, "checkmate"))
    } else if let Some(outcome) = instant_outcome(game_state, mover) {
        Some(outcome)
    } else if !has_moves {
        Some(stalemate_outcome(game_state, defender))
    } else {
        None
    };

    if let Some(outcome) = &outcome {
        info!(variant = %game_state.variant(), ply = game_state.ply, %outcome, "game over");
    }
    Ok(outcome)
}

fn instant_outcome(game_state: &GameState, mover: Color) -> Option<VictoryOutcome> {
    match game_state.variant() {
        Variant::Rite => rite_instant(game_state),
        Variant::Lambda => has_triune_dominance(game_state, mover)
            .then(|| VictoryOutcome::win(mover, "triune dominance")),
        Variant::Helmbreaker => {
            if game_state.boards.royal_location(Color::Dark).is_none() {
                Some(VictoryOutcome::win(Color::Light, "fortress king captured"))
            } else if game_state.turns_remaining == Some(0) {
                Some(VictoryOutcome::win(Color::Dark, "turn limit reached"))
            } else {
                None
            }
        }
        Variant::Leviathan => {
            let defender = mover.opposite();
            (!game_state.boards.has_pieces_of(defender))
                .then(|| VictoryOutcome::win(mover, "elimination"))
        }
        Variant::Chess => None,
    }
}

fn rite_instant(game_state: &GameState) -> Option<VictoryOutcome> {
    let kingless = Color::ALL.map(|color| game_state.boards.royal_location(color).is_none());
    match kingless {
        [true, true] => return Some(VictoryOutcome::draw("both kings destroyed")),
        [true, false] => return Some(VictoryOutcome::win(Color::Dark, "king destroyed")),
        [false, true] => return Some(VictoryOutcome::win(Color::Light, "king destroyed")),
        [false, false] => {}
    }

    let drained = Color::ALL.map(|color| game_state.essence_of(color) <= 0);
    match drained {
        [true, true] => Some(VictoryOutcome::draw("essence exhausted")),
        [true, false] => Some(VictoryOutcome::win(Color::Dark, "essence exhausted")),
        [false, true] => Some(VictoryOutcome::win(Color::Light, "essence exhausted")),
        [false, false] => None,
    }
}

/// `stuck` is the side to move, which has no legal move.
fn stalemate_outcome(game_state: &GameState, stuck: Color) -> VictoryOutcome {
    match game_state.variant() {
        Variant::Rite => {}
        // A frozen invader can no longer reach the Fortress King.
        Variant::Helmbreaker if stuck == Color::Light => {
            return VictoryOutcome::win(Color::Dark, "invader immobilized")
        }
        _ => return VictoryOutcome::draw("stalemate"),
    }

    let white = game_state.essence_of(Color::Light);
    let black = game_state.essence_of(Color::Dark);
    match white.cmp(&black) {
        std::cmp::Ordering::Greater => VictoryOutcome::win(Color::Light, "last stand"),
        std::cmp::Ordering::Less => VictoryOutcome::win(Color::Dark, "last stand"),
        std::cmp::Ordering::Equal => VictoryOutcome::draw("last stand"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::PlaneId;
    use crate::game_state::variant::VariantConfig;
    use crate::move_generation::legal_move_generator::LegalMoveGenerator;

    fn judge(variant: Variant, layout: &str, side: Color) -> Option<VictoryOutcome> {
        let state = GameState::from_layout(VariantConfig::new(variant), layout, side)
            .expect("layout should parse");
        evaluate_victory(&state, &LegalMoveGenerator).expect("evaluation should succeed")
    }

    #[test]
    fn back_rank_mate_is_checkmate() {
        let outcome = judge(Variant::Chess, "R5k1/5ppp/8/8/8/8/8/6K1", Color::Dark);
        assert_eq!(outcome, Some(VictoryOutcome::win(Color::Light, "checkmate")));
    }

    #[test]
    fn cornered_king_without_check_is_stalemate() {
        let outcome = judge(Variant::Chess, "k7/2Q5/1K6/8/8/8/8/8", Color::Dark);
        assert_eq!(outcome, Some(VictoryOutcome::draw("stalemate")));
    }

    #[test]
    fn rite_last_stand_goes_to_higher_essence() {
        let mut state = GameState::from_layout(
            VariantConfig::new(Variant::Rite),
            "k7/2Q5/1K6/8/8/8/8/8",
            Color::Dark,
        )
        .expect("layout should parse");
        state.essence = [9, 3];
        let outcome = evaluate_victory(&state, &LegalMoveGenerator).expect("evaluation should succeed");
        assert_eq!(outcome, Some(VictoryOutcome::win(Color::Light, "last stand")));
    }

    #[test]
    fn rite_drained_essence_loses() {
        let mut state = GameState::from_layout(
            VariantConfig::new(Variant::Rite),
            "4k3/8/8/8/8/8/8/4K3",
            Color::Dark,
        )
        .expect("layout should parse");
        state.essence = [4, 0];
        let outcome = evaluate_victory(&state, &LegalMoveGenerator).expect("evaluation should succeed");
        assert_eq!(outcome, Some(VictoryOutcome::win(Color::Light, "essence exhausted")));
    }

    #[test]
    fn helmbreaker_instant_conditions() {
        let captured = judge(Variant::Helmbreaker, "2g5/8/8/8/8/8/PPP5/3S4", Color::Dark);
        assert_eq!(captured, Some(VictoryOutcome::win(Color::Light, "fortress king captured")));

        let mut state = GameState::new_game(VariantConfig::new(Variant::Helmbreaker));
        state.turns_remaining = Some(0);
        let outcome = evaluate_victory(&state, &LegalMoveGenerator).expect("evaluation should succeed");
        assert_eq!(outcome, Some(VictoryOutcome::win(Color::Dark, "turn limit reached")));
    }

    #[test]
    fn helmbreaker_frozen_invader_loses() {
        let outcome = judge(Variant::Helmbreaker, "P2f4/8/8/8/8/8/8/8", Color::Light);
        assert_eq!(outcome, Some(VictoryOutcome::win(Color::Dark, "invader immobilized")));
    }

    #[test]
    fn helmbreaker_stalemated_defender_is_a_draw() {
        let outcome = judge(Variant::Helmbreaker, "f7/8/1Q6/8/8/8/8/8", Color::Dark);
        assert_eq!(outcome, Some(VictoryOutcome::draw("stalemate")));
    }

    #[test]
    fn leviathan_elimination() {
        let outcome = judge(Variant::Leviathan, "8/8/8/8/8/8/3M4/8", Color::Dark);
        assert_eq!(outcome, Some(VictoryOutcome::win(Color::Light, "elimination")));
    }

    #[test]
    fn lambda_triune_dominance_wins_for_mover() {
        let centre = "4k3/8/8/3NN3/3NN3/8/8/4K3";
        let state = GameState::from_plane_layouts(
            VariantConfig::new(Variant::Lambda),
            "8/8/8/3NN3/3NN3/8/8/8",
            centre,
            "8/8/8/3NN3/3NN3/8/8/8",
            PlaneId::Body,
            Color::Dark,
        )
        .expect("plane layouts should parse");
        let outcome = evaluate_victory(&state, &LegalMoveGenerator).expect("evaluation should succeed");
        assert_eq!(outcome, Some(VictoryOutcome::win(Color::Light, "triune dominance")));
    }

    #[test]
    fn opening_position_is_not_terminal() {
        for variant in Variant::ALL {
            let mut state = GameState::new_game(VariantConfig::new(variant));
            state.side_to_move = Color::Dark;
            let outcome = evaluate_victory(&state, &LegalMoveGenerator).expect("evaluation should succeed");
            assert_eq!(outcome, None, "{variant}");
        }
    }
}
