//! Standard pawn moves: single push, double push from the start rank and
//! diagonal captures. No promotion and no en passant.

use crate::game_state::chess_rules::pawn_start_rank;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::MoveContext;
use crate::moves::move_descriptions::Move;
use crate::moves::pawn_moves::{forward_square, pawn_attacks};

pub fn generate_pawn_moves(ctx: &MoveContext<'_>, from: Square, piece: Piece, out: &mut Vec<Move>) {
    let color = piece.color;
    let occupancy = ctx.board.occupancy();

    if let Some(one_step) = forward_square(color, from, 1) {
        if one_step.mask() & occupancy == 0 {
            if one_step.mask() & ctx.entry_mask != 0 {
                out.push(Move::quiet(from, one_step, piece).on_plane(ctx.plane));
            }

            if from.rank() == pawn_start_rank(color) {
                let two_step = forward_square(color, from, 2)
                    .filter(|sq| sq.mask() & (occupancy | !ctx.entry_mask) == 0);
                if let Some(two_step) = two_step {
                    out.push(Move::quiet(from, two_step, piece).on_plane(ctx.plane));
                }
            }
        }
    }

    let captures = pawn_attacks(color, from) & ctx.enemy_occupancy() & ctx.entry_mask;
    for to in squares_in(captures) {
        if let Some(captured) = ctx.board.piece_at(to) {
            out.push(Move::capture(from, to, piece, captured).on_plane(ctx.plane));
        }
    }
}
