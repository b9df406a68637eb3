//! State shared by the per-piece generators while producing moves for one
//! board.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::game_state::variant::Variant;
use crate::move_generation::move_generator::{MoveGenResult, MoveGenerationError};
use crate::moves::move_descriptions::Move;

pub struct MoveContext<'a> {
    pub state: &'a GameState,
    pub board: &'a Board,
    pub plane: Option<PlaneId>,
    pub mover: Color,
    /// Squares the mover's ordinary pieces may enter.
    pub entry_mask: SquareMask,
}

impl<'a> MoveContext<'a> {
    pub fn new(state: &'a GameState, plane: Option<PlaneId>) -> MoveGenResult<Self> {
        let board = state.boards.board(plane).ok_or_else(|| {
            MoveGenerationError::InvalidState(format!(
                "{} game has no plane {}",
                state.variant(),
                plane.map_or("?", PlaneId::name)
            ))
        })?;
        let plane = plane.or(state.active_plane());

        Ok(Self {
            state,
            board,
            plane,
            mover: state.side_to_move,
            entry_mask: entry_mask(state, state.side_to_move),
        })
    }

    #[inline]
    pub fn own_occupancy(&self) -> SquareMask {
        self.board.occupancy_of(self.mover)
    }

    #[inline]
    pub fn enemy_occupancy(&self) -> SquareMask {
        self.board.occupancy_of(self.mover.opposite())
    }

    /// Emit a quiet move or capture for every target the mover may enter.
    pub fn push_targets(&self, from: Square, piece: Piece, targets: SquareMask, out: &mut Vec<Move>) {
        let targets = targets & !self.own_occupancy() & self.entry_mask;
        for to in squares_in(targets) {
            let mv = match self.board.piece_at(to) {
                Some(captured) => Move::capture(from, to, piece, captured),
                None => Move::quiet(from, to, piece),
            };
            out.push(mv.on_plane(self.plane));
        }
    }
}

/// Squares `color` may move ordinary pieces onto.
///
/// Collapsed squares in Rite of Reduction are closed to everyone; standing
/// fortifications in Helmbreaker are closed to the invader.
pub fn entry_mask(state: &GameState, color: Color) -> SquareMask {
    match (state.variant(), color) {
        (Variant::Rite, _) => state.active_squares,
        (Variant::Helmbreaker, Color::Light) => !state.fortified_mask(),
        _ => FULL_MASK,
    }
}
