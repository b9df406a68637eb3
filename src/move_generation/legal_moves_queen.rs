use crate::game_state::chess_types::{Piece, Square};
use crate::move_generation::legal_move_shared::MoveContext;
use crate::moves::move_descriptions::Move;
use crate::moves::queen_moves::queen_attacks;

pub fn generate_queen_moves(ctx: &MoveContext<'_>, from: Square, piece: Piece, out: &mut Vec<Move>) {
    let attacks = queen_attacks(from, ctx.board.occupancy());
    ctx.push_targets(from, piece, attacks, out);
}
