//! Forward-moving piece geometry: pawns, Leviathan markers and siege engines
//! all step along their color's forward direction.

use crate::game_state::chess_types::{Color, Square, SquareMask};
use crate::moves::knight_moves::generate_step_table;

pub const LIGHT_PAWN_ATTACKS: [SquareMask; 64] = generate_step_table(&[(-1, 1), (1, 1)]);
pub const DARK_PAWN_ATTACKS: [SquareMask; 64] = generate_step_table(&[(-1, -1), (1, -1)]);

/// Diagonal-forward squares of a pawn-like piece.
#[inline]
pub const fn pawn_attacks(color: Color, square: Square) -> SquareMask {
    match color {
        Color::Light => LIGHT_PAWN_ATTACKS[square.index()],
        Color::Dark => DARK_PAWN_ATTACKS[square.index()],
    }
}

/// The square `steps` ranks ahead of `square` for `color`.
#[inline]
pub fn forward_square(color: Color, square: Square, steps: i8) -> Option<Square> {
    square.offset(0, color.forward() * steps)
}

/// Forward plus both forward diagonals.
pub fn forward_fan(color: Color, square: Square) -> SquareMask {
    let ahead = forward_square(color, square, 1).map_or(0, Square::mask);
    ahead | pawn_attacks(color, square)
}
