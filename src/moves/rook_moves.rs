//! Orthogonal sliding geometry, shared with the bishop and queen through
//! [`slide`].

use crate::game_state::chess_types::{Square, SquareMask, EMPTY_MASK};

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Squares a rook on `square` reaches. Each ray includes its first occupied
/// square, whoever owns it.
#[inline]
pub fn rook_attacks(square: Square, occupancy: SquareMask) -> SquareMask {
    slide(square, &ROOK_DIRECTIONS, occupancy)
}

pub fn slide(square: Square, directions: &[(i8, i8)], occupancy: SquareMask) -> SquareMask {
    directions
        .iter()
        .fold(EMPTY_MASK, |acc, &(file_step, rank_step)| {
            acc | trace_ray(square, file_step, rank_step, occupancy)
        })
}

fn trace_ray(square: Square, file_step: i8, rank_step: i8, occupancy: SquareMask) -> SquareMask {
    let mut attacks = EMPTY_MASK;
    let mut cursor = square;

    while let Some(next) = cursor.offset(file_step, rank_step) {
        attacks |= next.mask();
        if occupancy & next.mask() != 0 {
            break;
        }
        cursor = next;
    }

    attacks
}
