//! Rite of Reduction: essence accounting and entropy collapse.

use tracing::info;

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::AppliedMove;
use crate::variant_rules::turn_effects::RuleEvent;

/// Starting essence per side: the value of every non-royal piece.
pub fn initial_essence(board: &Board) -> [i32; 2] {
    let mut essence = [0; 2];
    for (_, piece) in board.pieces().filter(|(_, piece)| !piece.is_royal()) {
        essence[piece.color.index()] += piece.kind.essence();
    }
    essence
}

fn deduct(game_state: &mut GameState, piece: Piece) -> RuleEvent {
    let slot = &mut game_state.essence[piece.color.index()];
    *slot -= piece.kind.essence();
    RuleEvent::EssenceLost {
        color: piece.color,
        amount: piece.kind.essence(),
        remaining: *slot,
    }
}

pub fn record_capture(game_state: &mut GameState, applied: &AppliedMove) -> Option<RuleEvent> {
    applied.captured.map(|piece| deduct(game_state, piece))
}

/// Collapse the outermost active ring when the ply count hits the interval.
///
/// Pieces on the ring are destroyed and their owners lose their essence,
/// royal pieces included.
pub fn collapse_if_due(game_state: &mut GameState) -> Vec<RuleEvent> {
    let interval = game_state.config.collapse_interval;
    let ply = game_state.ply;
    if interval == 0 || ply == 0 || ply % interval != 0 {
        return Vec::new();
    }

    let ring = game_state.collapsed_rings;
    if ring >= game_state.config.max_collapsed_rings || ring >= 4 {
        return Vec::new();
    }

    let mask = ring_mask(ring);
    let board = game_state.boards.active_mut();
    let removed: Vec<(Square, Piece)> = squares_in(mask)
        .filter_map(|square| board.remove(square).map(|piece| (square, piece)))
        .collect();

    game_state.active_squares &= !mask;
    game_state.collapsed_rings += 1;

    let mut events: Vec<RuleEvent> = removed
        .iter()
        .map(|(_, piece)| deduct(game_state, *piece))
        .collect();

    info!(
        ring,
        ply,
        removed = removed.len(),
        active = game_state.active_squares.count_ones(),
        "entropy collapse"
    );

    events.insert(
        0,
        RuleEvent::RingCollapsed {
            ring,
            removed,
            active_squares: game_state.active_squares.count_ones(),
        },
    );
    events
}
