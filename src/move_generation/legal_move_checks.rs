//! Attack maps and check detection.
//!
//! Attacks follow capture geometry: pawn-like pieces threaten their forward
//! diagonals whether or not anything stands there, sliders threaten up to and
//! including the first blocker. Siege engines threaten nothing.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::{BoardSet, GameState};
use crate::move_generation::legal_move_shared::entry_mask;
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::queen_moves::queen_attacks;
use crate::moves::rook_moves::rook_attacks;

pub fn piece_attacks(piece: Piece, square: Square, occupancy: SquareMask) -> SquareMask {
    match piece.kind {
        PieceKind::Pawn | PieceKind::Marker => pawn_attacks(piece.color, square),
        PieceKind::Knight => knight_attacks(square),
        PieceKind::Bishop => bishop_attacks(square, occupancy),
        PieceKind::Rook | PieceKind::RoyalGuard => rook_attacks(square, occupancy),
        PieceKind::Queen => queen_attacks(square, occupancy),
        PieceKind::King | PieceKind::FortressKing => king_attacks(square),
        PieceKind::SiegeEngine => EMPTY_MASK,
    }
}

/// Every square `attacker` threatens on `board`.
pub fn attacked_squares(game_state: &GameState, board: &Board, attacker: Color) -> SquareMask {
    let occupancy = board.occupancy();
    let reachable = entry_mask(game_state, attacker);

    board
        .pieces_of(attacker)
        .fold(EMPTY_MASK, |acc, (square, piece)| {
            acc | piece_attacks(piece, square, occupancy)
        })
        & reachable
}

pub fn is_square_attacked(
    game_state: &GameState,
    board: &Board,
    square: Square,
    attacker: Color,
) -> bool {
    let occupancy = board.occupancy();
    let reachable = entry_mask(game_state, attacker);
    if reachable & square.mask() == 0 {
        return false;
    }

    board
        .pieces_of(attacker)
        .any(|(from, piece)| piece_attacks(piece, from, occupancy) & square.mask() != 0)
}

/// Whether `color`'s royal piece is attacked on its own plane.
pub fn is_royal_in_check(game_state: &GameState, color: Color) -> bool {
    is_royal_in_check_on(game_state, &game_state.boards, color)
}

/// As [`is_royal_in_check`], against a hypothetical set of boards.
pub fn is_royal_in_check_on(game_state: &GameState, boards: &BoardSet, color: Color) -> bool {
    if !game_state.variant().has_check_for(color) {
        return false;
    }
    let Some((plane, square)) = boards.royal_location(color) else {
        return false;
    };
    let Some(board) = boards.board(plane) else {
        return false;
    };

    is_square_attacked(game_state, board, square, color.opposite())
}
