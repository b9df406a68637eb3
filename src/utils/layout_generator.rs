//! `Board` to placement-string generator.
//!
//! Produces the board field consumed by `layout_parser`.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;

pub fn generate_layout(board: &Board) -> String {
    let mut out = String::new();

    for rank in (0..8u8).rev() {
        let mut empty_run = 0u8;

        for file in 0..8u8 {
            match board.piece_at(Square::at(file, rank)) {
                Some(piece) => {
                    if empty_run > 0 {
                        out.push(char::from(b'0' + empty_run));
                        empty_run = 0;
                    }
                    out.push(piece.layout_char());
                }
                None => empty_run += 1,
            }
        }

        if empty_run > 0 {
            out.push(char::from(b'0' + empty_run));
        }
        if rank > 0 {
            out.push('/');
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::generate_layout;
    use crate::game_state::board::Board;
    use crate::game_state::chess_rules::{EMPTY_LAYOUT, HELMBREAKER_LAYOUT};
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
    use crate::utils::layout_parser::parse_layout;

    #[test]
    fn empty_board_is_eight_gaps() {
        assert_eq!(generate_layout(&Board::empty()), EMPTY_LAYOUT);
    }

    #[test]
    fn mixed_rank_compresses_gaps() {
        let mut board = Board::empty();
        board.place(Square::at(3, 0), Piece::new(Color::Light, PieceKind::SiegeEngine));
        board.place(Square::at(7, 0), Piece::new(Color::Light, PieceKind::Marker));
        board.place(Square::at(0, 7), Piece::new(Color::Dark, PieceKind::RoyalGuard));
        assert_eq!(generate_layout(&board), "g7/8/8/8/8/8/8/3S3M");
    }

    #[test]
    fn helmbreaker_layout_survives_parse_and_generate() {
        let board = parse_layout(HELMBREAKER_LAYOUT).expect("helmbreaker layout should parse");
        assert_eq!(generate_layout(&board), HELMBREAKER_LAYOUT);
    }
}
