//! Helmbreaker: fortification damage and the defender's turn limit.

use tracing::info;

use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::AppliedMove;
use crate::moves::move_descriptions::MoveKind;
use crate::variant_rules::turn_effects::RuleEvent;

pub fn damage_fortification(game_state: &mut GameState, applied: &AppliedMove) -> Option<RuleEvent> {
    if applied.mv.kind != MoveKind::SiegeStrike {
        return None;
    }

    let square = applied.mv.to;
    let health = game_state.fortifications.get_mut(&square)?;
    *health = health.saturating_sub(1);
    let health = *health;

    info!(square = %square, health, "fortification damaged");
    Some(RuleEvent::FortificationDamaged { square, health })
}

/// A round ends when the defender (black) has moved.
pub fn tick_turn_limit(game_state: &mut GameState, applied: &AppliedMove) -> Option<RuleEvent> {
    if applied.mv.piece.color != Color::Dark {
        return None;
    }

    let remaining = game_state.turns_remaining.as_mut()?;
    *remaining = remaining.saturating_sub(1);
    Some(RuleEvent::TurnLimitTick {
        remaining: *remaining,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Piece, PieceKind, Square};
    use crate::game_state::variant::{Variant, VariantConfig};
    use crate::moves::move_descriptions::Move;

    fn applied(mv: Move) -> AppliedMove {
        AppliedMove { mv, captured: None }
    }

    #[test]
    fn strike_floors_at_zero() {
        let mut state = GameState::new_game(VariantConfig::new(Variant::Helmbreaker));
        let siege = Piece::new(Color::Light, PieceKind::SiegeEngine);
        let c8 = Square::at(2, 7);
        let strike = applied(Move::siege_strike(Square::at(2, 6), c8, siege));

        for expected in [2, 1, 0, 0] {
            damage_fortification(&mut state, &strike);
            assert_eq!(state.fortification_health(c8), expected);
        }
        assert!(!state.is_fortified(c8));
    }

    #[test]
    fn only_defender_moves_end_a_round() {
        let mut state = GameState::new_game(VariantConfig::new(Variant::Helmbreaker));
        let white = applied(Move::quiet(
            Square::at(0, 1),
            Square::at(0, 2),
            Piece::new(Color::Light, PieceKind::Pawn),
        ));
        let black = applied(Move::quiet(
            Square::at(2, 6),
            Square::at(2, 5),
            Piece::new(Color::Dark, PieceKind::RoyalGuard),
        ));

        assert_eq!(tick_turn_limit(&mut state, &white), None);
        assert_eq!(state.turns_remaining, Some(40));
        assert_eq!(
            tick_turn_limit(&mut state, &black),
            Some(RuleEvent::TurnLimitTick { remaining: 39 })
        );
    }
}
