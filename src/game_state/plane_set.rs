//! Lambda Protocol's three parallel boards.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, PlaneId, Square};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaneSet {
    planes: [Board; 3],
    active: PlaneId,
}

impl PlaneSet {
    pub fn new(mind: Board, body: Board, spirit: Board, active: PlaneId) -> Self {
        Self {
            planes: [mind, body, spirit],
            active,
        }
    }

    #[inline]
    pub fn active_plane(&self) -> PlaneId {
        self.active
    }

    #[inline]
    pub fn set_active_plane(&mut self, plane: PlaneId) {
        self.active = plane;
    }

    #[inline]
    pub fn plane(&self, plane: PlaneId) -> &Board {
        &self.planes[plane.index()]
    }

    #[inline]
    pub fn plane_mut(&mut self, plane: PlaneId) -> &mut Board {
        &mut self.planes[plane.index()]
    }

    pub fn active_board(&self) -> &Board {
        self.plane(self.active)
    }

    pub fn active_board_mut(&mut self) -> &mut Board {
        self.plane_mut(self.active)
    }

    /// Move the piece on `square` from one plane to the same square on another.
    ///
    /// Returns the moved piece, or `None` (leaving both planes untouched) when
    /// the source square is empty or the destination square is occupied.
    pub fn shift_piece(&mut self, square: Square, from: PlaneId, to: PlaneId) -> Option<Piece> {
        if !self.plane(to).is_vacant(square) {
            return None;
        }
        let piece = self.plane_mut(from).remove(square)?;
        self.plane_mut(to).place(square, piece);
        Some(piece)
    }

    pub fn planes(&self) -> impl Iterator<Item = (PlaneId, &Board)> + '_ {
        PlaneId::ALL.into_iter().map(move |plane| (plane, self.plane(plane)))
    }
}
