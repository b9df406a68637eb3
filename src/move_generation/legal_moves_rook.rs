//! Rook move generation. Helmbreaker's royal guards move the same way.

use crate::game_state::chess_types::{Piece, Square};
use crate::move_generation::legal_move_shared::MoveContext;
use crate::moves::move_descriptions::Move;
use crate::moves::rook_moves::rook_attacks;

pub fn generate_rook_moves(ctx: &MoveContext<'_>, from: Square, piece: Piece, out: &mut Vec<Move>) {
    let attacks = rook_attacks(from, ctx.board.occupancy());
    ctx.push_targets(from, piece, attacks, out);
}
