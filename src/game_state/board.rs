//! Square-to-piece container.
//!
//! `Board` does no rule validation. It stores at most one piece per square and
//! answers occupancy queries as masks for the generators.

use crate::game_state::chess_types::{Color, Piece, Square, SquareMask, EMPTY_MASK};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub const fn empty() -> Self {
        Self {
            squares: [None; 64],
        }
    }

    /// Put `piece` on `square`, returning whatever stood there before.
    #[inline]
    pub fn place(&mut self, square: Square, piece: Piece) -> Option<Piece> {
        self.squares[square.index()].replace(piece)
    }

    #[inline]
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.index()].take()
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.index()]
    }

    #[inline]
    pub fn is_occupied_by(&self, square: Square, color: Color) -> bool {
        matches!(self.piece_at(square), Some(piece) if piece.color == color)
    }

    #[inline]
    pub fn is_vacant(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    pub fn occupancy(&self) -> SquareMask {
        self.pieces()
            .fold(EMPTY_MASK, |acc, (square, _)| acc | square.mask())
    }

    pub fn occupancy_of(&self, color: Color) -> SquareMask {
        self.pieces_of(color)
            .fold(EMPTY_MASK, |acc, (square, _)| acc | square.mask())
    }

    /// Occupied squares in ascending order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|square| self.piece_at(square).map(|piece| (square, piece)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    pub fn royal_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.is_royal())
            .map(|(square, _)| square)
    }

    pub fn len(&self) -> usize {
        self.pieces().count()
    }

    pub fn is_empty(&self) -> bool {
        self.squares.iter().all(Option::is_none)
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

    #[test]
    fn place_replaces_and_remove_clears() {
        let mut board = Board::empty();
        let e4 = Square::at(4, 3);
        let white_pawn = Piece::new(Color::Light, PieceKind::Pawn);
        let black_knight = Piece::new(Color::Dark, PieceKind::Knight);

        assert_eq!(board.place(e4, black_knight), None);
        assert_eq!(board.place(e4, white_pawn), Some(black_knight));
        assert!(board.is_occupied_by(e4, Color::Light));
        assert!(!board.is_occupied_by(e4, Color::Dark));
        assert_eq!(board.remove(e4), Some(white_pawn));
        assert!(board.is_empty());
    }

    #[test]
    fn occupancy_masks_track_colors() {
        let mut board = Board::empty();
        board.place(Square::at(0, 0), Piece::new(Color::Light, PieceKind::Rook));
        board.place(Square::at(7, 7), Piece::new(Color::Dark, PieceKind::King));

        assert_eq!(board.occupancy(), 1 | (1u64 << 63));
        assert_eq!(board.occupancy_of(Color::Light), 1);
        assert_eq!(board.royal_square(Color::Dark), Some(Square::at(7, 7)));
        assert_eq!(board.royal_square(Color::Light), None);
        assert_eq!(board.len(), 2);
    }
}
