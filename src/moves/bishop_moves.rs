use crate::game_state::chess_types::{Square, SquareMask};
use crate::moves::rook_moves::slide;

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

#[inline]
pub fn bishop_attacks(square: Square, occupancy: SquareMask) -> SquareMask {
    slide(square, &BISHOP_DIRECTIONS, occupancy)
}
