use crate::game_state::chess_types::{Square, SquareMask};

pub const KNIGHT_ATTACKS: [SquareMask; 64] = generate_step_table(&[
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
]);

#[inline]
pub const fn knight_attacks(square: Square) -> SquareMask {
    KNIGHT_ATTACKS[square.index()]
}

/// Per-square table of single-step targets for a fixed offset list.
pub(crate) const fn generate_step_table(offsets: &[(i32, i32)]) -> [SquareMask; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as i32;
        let rank = (sq / 8) as i32;
        let mut targets = 0u64;
        let mut i = 0usize;

        while i < offsets.len() {
            let (df, dr) = offsets[i];
            let (f, r) = (file + df, rank + dr);
            if f >= 0 && f < 8 && r >= 0 && r < 8 {
                targets |= 1u64 << ((r * 8 + f) as usize);
            }
            i += 1;
        }

        table[sq] = targets;
        sq += 1;
    }

    table
}
