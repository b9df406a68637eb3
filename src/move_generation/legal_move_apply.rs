//! Board mutation for a single move.

use crate::game_state::chess_types::{PlaneId, Piece};
use crate::game_state::game_state::{BoardSet, GameState};
use crate::move_generation::move_generator::{MoveGenResult, MoveGenerationError};
use crate::moves::move_descriptions::{Move, MoveKind};

/// What a committed move did to the boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    pub mv: Move,
    pub captured: Option<Piece>,
}

/// Move the piece on the boards only; returns the captured piece, if any.
pub fn apply_to_boards(boards: &mut BoardSet, mv: &Move) -> MoveGenResult<Option<Piece>> {
    if mv.kind == MoveKind::PlaneShift {
        let (Some(source), Some(target)) = (mv.plane, mv.target_plane) else {
            return Err(invalid(format!("plane shift {mv} is missing its planes")));
        };
        let set = boards
            .plane_set_mut()
            .ok_or_else(|| invalid(format!("plane shift {mv} on a single board")))?;
        set.shift_piece(mv.from, source, target)
            .ok_or_else(|| invalid(format!("plane shift {mv} is blocked")))?;
        return Ok(None);
    }

    let board = boards
        .board_mut(mv.plane)
        .ok_or_else(|| invalid(format!("no board for {mv} on plane {}", plane_name(mv.plane))))?;

    match board.piece_at(mv.from) {
        Some(piece) if piece == mv.piece => {}
        found => {
            return Err(invalid(format!(
                "expected {} on {}, found {}",
                mv.piece,
                mv.from,
                found.map_or_else(|| "nothing".to_owned(), |p| p.to_string())
            )))
        }
    }

    board.remove(mv.from);
    Ok(board.place(mv.to, mv.piece))
}

/// Commit `mv`: boards, history, ply counter and side to move. Variant
/// bookkeeping runs afterwards in `variant_rules`.
pub fn apply_move(game_state: &mut GameState, mv: &Move) -> MoveGenResult<AppliedMove> {
    if mv.piece.color != game_state.side_to_move {
        return Err(invalid(format!(
            "{mv} does not belong to {}",
            game_state.side_to_move.name()
        )));
    }

    let captured = apply_to_boards(&mut game_state.boards, mv)?;

    game_state.history.push(mv.notation());
    game_state.ply = game_state.ply.saturating_add(1);
    game_state.side_to_move = game_state.side_to_move.opposite();

    Ok(AppliedMove { mv: *mv, captured })
}

fn plane_name(plane: Option<PlaneId>) -> &'static str {
    plane.map_or("active", PlaneId::name)
}

fn invalid(msg: String) -> MoveGenerationError {
    MoveGenerationError::InvalidState(msg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Color, PieceKind, Square};
    use crate::game_state::variant::{Variant, VariantConfig};

    #[test]
    fn capture_replaces_target_and_advances_turn() {
        let mut state = GameState::from_layout(
            VariantConfig::new(Variant::Chess),
            "4k3/8/8/3p4/4P3/8/8/4K3",
            Color::Light,
        )
        .expect("layout should parse");
        let pawn = Piece::new(Color::Light, PieceKind::Pawn);
        let black_pawn = Piece::new(Color::Dark, PieceKind::Pawn);
        let mv = Move::capture(Square::at(4, 3), Square::at(3, 4), pawn, black_pawn);

        let applied = apply_move(&mut state, &mv).expect("capture should apply");

        assert_eq!(applied.captured, Some(black_pawn));
        assert_eq!(state.board().piece_at(Square::at(3, 4)), Some(pawn));
        assert!(state.board().is_vacant(Square::at(4, 3)));
        assert_eq!(state.side_to_move, Color::Dark);
        assert_eq!(state.ply, 1);
        assert_eq!(state.history, vec!["E4xD5".to_owned()]);
    }

    #[test]
    fn stale_move_is_rejected_without_mutation() {
        let mut state = GameState::new_game(VariantConfig::new(Variant::Chess));
        let before = state.clone();
        let ghost = Move::quiet(
            Square::at(4, 2),
            Square::at(4, 3),
            Piece::new(Color::Light, PieceKind::Pawn),
        );

        assert!(apply_move(&mut state, &ghost).is_err());
        assert_eq!(state, before);
    }
}
