use crate::game_state::chess_types::{Square, SquareMask};
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::rook_moves::rook_attacks;

#[inline]
pub fn queen_attacks(square: Square, occupancy: SquareMask) -> SquareMask {
    bishop_attacks(square, occupancy) | rook_attacks(square, occupancy)
}

#[cfg(test)]
mod tests {
    use super::queen_attacks;
    use crate::game_state::chess_types::{Square, EMPTY_MASK};

    #[test]
    fn open_queen_from_d4_sees_twenty_seven_squares() {
        assert_eq!(queen_attacks(Square::at(3, 3), EMPTY_MASK).count_ones(), 27);
    }

    #[test]
    fn queen_rays_stop_at_blockers() {
        let d4 = Square::at(3, 3);
        let d6 = Square::at(3, 5);
        let g4 = Square::at(6, 3);
        let attacks = queen_attacks(d4, d6.mask() | g4.mask());

        assert_ne!(attacks & d6.mask(), 0);
        assert_ne!(attacks & g4.mask(), 0);
        assert_eq!(attacks & Square::at(3, 6).mask(), 0);
        assert_eq!(attacks & Square::at(7, 3).mask(), 0);
    }
}
