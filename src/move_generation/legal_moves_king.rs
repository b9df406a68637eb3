//! King and fortress king steps. No castling.

use crate::game_state::chess_types::{Piece, Square};
use crate::move_generation::legal_move_shared::MoveContext;
use crate::moves::king_moves::king_attacks;
use crate::moves::move_descriptions::Move;

pub fn generate_king_moves(ctx: &MoveContext<'_>, from: Square, piece: Piece, out: &mut Vec<Move>) {
    ctx.push_targets(from, piece, king_attacks(from), out);
}
