//! Leviathan forward movement with forced momentum.
//!
//! With both forward squares empty only the two-square momentum move is
//! offered; otherwise a single step when the next square is empty. Captures
//! go diagonally forward onto enemy pieces only.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::MoveContext;
use crate::moves::move_descriptions::Move;
use crate::moves::pawn_moves::{forward_square, pawn_attacks};

pub fn generate_marker_moves(ctx: &MoveContext<'_>, from: Square, piece: Piece, out: &mut Vec<Move>) {
    let color = piece.color;
    let occupancy = ctx.board.occupancy();
    let is_open = |sq: &Square| sq.mask() & occupancy == 0;

    let one_step = forward_square(color, from, 1).filter(is_open);
    let two_step = forward_square(color, from, 2).filter(is_open);

    match (one_step, two_step) {
        (Some(_), Some(landing)) => {
            if landing.mask() & ctx.entry_mask != 0 {
                out.push(Move::momentum(from, landing, piece).on_plane(ctx.plane));
            }
        }
        (Some(step), None) => {
            if step.mask() & ctx.entry_mask != 0 {
                out.push(Move::quiet(from, step, piece).on_plane(ctx.plane));
            }
        }
        (None, _) => {}
    }

    let captures = pawn_attacks(color, from) & ctx.enemy_occupancy() & ctx.entry_mask;
    for to in squares_in(captures) {
        if let Some(captured) = ctx.board.piece_at(to) {
            out.push(Move::capture(from, to, piece, captured).on_plane(ctx.plane));
        }
    }
}
