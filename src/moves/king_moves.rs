//! Single-step geometry for the king and the fortress king.

use crate::game_state::chess_types::{Square, SquareMask};
use crate::moves::knight_moves::generate_step_table;

pub const KING_ATTACKS: [SquareMask; 64] = generate_step_table(&[
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
]);

#[inline]
pub const fn king_attacks(square: Square) -> SquareMask {
    KING_ATTACKS[square.index()]
}
