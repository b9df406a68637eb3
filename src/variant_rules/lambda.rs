//! Lambda Protocol: the resource economy, plane activation and the Triune
//! Dominance check.

use tracing::{debug, info};

use crate::game_state::chess_rules::CENTRAL_SQUARES;
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::AppliedMove;
use crate::moves::move_descriptions::MoveKind;
use crate::variant_rules::turn_effects::RuleEvent;

/// Credit the side to move its per-turn income, up to the cap.
pub fn grant_income(game_state: &mut GameState) -> Option<RuleEvent> {
    let color = game_state.side_to_move;
    let cap = game_state.config.resource_cap;
    let slot = &mut game_state.resources[color.index()];
    let total = slot.saturating_add(game_state.config.resource_income).min(cap.max(*slot));
    if total == *slot {
        return None;
    }

    *slot = total;
    debug!(color = %color, total, "resource income");
    Some(RuleEvent::ResourceGained { color, total })
}

/// Charge the mover for a plane shift and hand the opponent the plane the
/// piece landed on.
pub fn settle_plane_shift(game_state: &mut GameState, applied: &AppliedMove) -> Vec<RuleEvent> {
    if applied.mv.kind != MoveKind::PlaneShift {
        return Vec::new();
    }
    let Some(target) = applied.mv.target_plane else {
        return Vec::new();
    };

    let color = applied.mv.piece.color;
    let slot = &mut game_state.resources[color.index()];
    *slot = slot.saturating_sub(1);
    let remaining = *slot;

    if let Some(set) = game_state.boards.plane_set_mut() {
        set.set_active_plane(target);
    }
    info!(color = %color, plane = %target, remaining, "plane activated");

    vec![
        RuleEvent::ResourceSpent { color, remaining },
        RuleEvent::PlaneActivated { plane: target },
    ]
}

/// `color` holds all four central squares on every plane.
pub fn has_triune_dominance(game_state: &GameState, color: Color) -> bool {
    let Some(set) = game_state.boards.plane_set() else {
        return false;
    };

    set.planes().all(|(_, board)| {
        CENTRAL_SQUARES
            .iter()
            .all(|square| board.is_occupied_by(*square, color))
    })
}
