//! Per-variant bookkeeping around a committed move.
//!
//! `begin_turn` runs before the mover's moves are generated; the post-move
//! effects run right after the boards change and before victory is judged.

use serde::{Deserialize, Serialize};

use crate::game_state::chess_types::{Color, Piece, PlaneId, Square};
use crate::game_state::game_state::GameState;
use crate::game_state::variant::Variant;
use crate::move_generation::legal_move_apply::AppliedMove;
use crate::variant_rules::{helmbreaker, lambda, rite};

/// Something a variant rule did to the state, reported back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum RuleEvent {
    EssenceLost {
        color: Color,
        amount: i32,
        remaining: i32,
    },
    RingCollapsed {
        ring: u8,
        removed: Vec<(Square, Piece)>,
        active_squares: u32,
    },
    ResourceGained {
        color: Color,
        total: u8,
    },
    ResourceSpent {
        color: Color,
        remaining: u8,
    },
    PlaneActivated {
        plane: PlaneId,
    },
    FortificationDamaged {
        square: Square,
        health: u8,
    },
    TurnLimitTick {
        remaining: u16,
    },
}

/// Start-of-turn effects for the side to move.
pub fn begin_turn(game_state: &mut GameState) -> Option<RuleEvent> {
    match game_state.variant() {
        Variant::Lambda => lambda::grant_income(game_state),
        _ => None,
    }
}

/// Copy of `game_state` with the side to move's start-of-turn effects
/// applied. Move generation for a turn always runs on this view.
pub fn turn_started(game_state: &GameState) -> GameState {
    let mut view = game_state.clone();
    begin_turn(&mut view);
    view
}

pub fn apply_post_move_effects(game_state: &mut GameState, applied: &AppliedMove) -> Vec<RuleEvent> {
    let mut events = Vec::new();

    match game_state.variant() {
        Variant::Rite => {
            events.extend(rite::record_capture(game_state, applied));
            events.extend(rite::collapse_if_due(game_state));
        }
        Variant::Lambda => events.extend(lambda::settle_plane_shift(game_state, applied)),
        Variant::Helmbreaker => {
            events.extend(helmbreaker::damage_fortification(game_state, applied));
            events.extend(helmbreaker::tick_turn_limit(game_state, applied));
        }
        Variant::Chess | Variant::Leviathan => {}
    }

    events
}
