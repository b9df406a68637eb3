use crate::game_state::chess_types::{Piece, Square};
use crate::move_generation::legal_move_shared::MoveContext;
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::move_descriptions::Move;

pub fn generate_bishop_moves(ctx: &MoveContext<'_>, from: Square, piece: Piece, out: &mut Vec<Move>) {
    let attacks = bishop_attacks(from, ctx.board.occupancy());
    ctx.push_targets(from, piece, attacks, out);
}
