use thiserror::Error;

use crate::game_state::chess_types::{PlaneId, Square};
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::Move;

pub type MoveGenResult<T> = Result<T, MoveGenerationError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveGenerationError {
    #[error("invalid game state: {0}")]
    InvalidState(String),
}

pub trait MoveGenerator: Send + Sync {
    /// Moves for the mover's piece on `plane`/`from`. `None` addresses the
    /// active board.
    fn generate_moves_from(
        &self,
        game_state: &GameState,
        plane: Option<PlaneId>,
        from: Square,
    ) -> MoveGenResult<Vec<Move>>;

    /// Moves for every piece the side to move owns, on every plane.
    fn generate_legal_moves(&self, game_state: &GameState) -> MoveGenResult<Vec<Move>> {
        let mover = game_state.side_to_move;
        let mut moves = Vec::with_capacity(64);

        for (plane, board) in game_state.boards.boards() {
            for (from, _) in board.pieces_of(mover) {
                moves.extend(self.generate_moves_from(game_state, plane, from)?);
            }
        }

        Ok(moves)
    }
}
