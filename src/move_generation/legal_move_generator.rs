//! Variant dispatch and the legality filter.
//!
//! Pseudo-legal generation picks the per-piece rule for each piece kind under
//! the selected variant. The legality filter replays each candidate on a
//! scratch copy of the boards and drops those leaving the mover's royal piece
//! attacked.

use crate::game_state::chess_types::{PieceKind, PlaneId, Square};
use crate::game_state::game_state::GameState;
use crate::game_state::variant::Variant;
use crate::move_generation::legal_move_apply::apply_to_boards;
use crate::move_generation::legal_move_checks::is_royal_in_check_on;
use crate::move_generation::legal_move_shared::MoveContext;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_marker::generate_marker_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_plane_shift::generate_plane_shifts;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::move_generation::legal_moves_siege::generate_siege_moves;
use crate::move_generation::move_generator::{MoveGenResult, MoveGenerationError, MoveGenerator};
use crate::moves::move_descriptions::Move;

/// Moves by piece rules alone; may leave the mover in check.
pub struct PseudoLegalMoveGenerator;

/// Pseudo-legal moves that keep the mover's royal piece safe.
pub struct LegalMoveGenerator;

impl MoveGenerator for PseudoLegalMoveGenerator {
    fn generate_moves_from(
        &self,
        game_state: &GameState,
        plane: Option<PlaneId>,
        from: Square,
    ) -> MoveGenResult<Vec<Move>> {
        pseudo_legal_moves_at(game_state, plane, from)
    }
}

impl MoveGenerator for LegalMoveGenerator {
    fn generate_moves_from(
        &self,
        game_state: &GameState,
        plane: Option<PlaneId>,
        from: Square,
    ) -> MoveGenResult<Vec<Move>> {
        let pseudo = pseudo_legal_moves_at(game_state, plane, from)?;
        let mut legal = Vec::with_capacity(pseudo.len());
        for mv in pseudo {
            if is_legal(game_state, &mv)? {
                legal.push(mv);
            }
        }
        Ok(legal)
    }
}

/// Board shape must match the variant: three planes for Lambda, one board
/// otherwise.
pub fn validate_layout(game_state: &GameState) -> MoveGenResult<()> {
    let has_planes = game_state.boards.plane_set().is_some();
    if has_planes != game_state.variant().uses_planes() {
        return Err(MoveGenerationError::InvalidState(format!(
            "{} game with {} board layout",
            game_state.variant(),
            if has_planes { "a three-plane" } else { "a single" }
        )));
    }
    Ok(())
}

pub fn pseudo_legal_moves_at(
    game_state: &GameState,
    plane: Option<PlaneId>,
    from: Square,
) -> MoveGenResult<Vec<Move>> {
    validate_layout(game_state)?;

    let ctx = MoveContext::new(game_state, plane)?;
    let mut out = Vec::with_capacity(16);

    if ctx.plane == game_state.active_plane() {
        if let Some(piece) = ctx.board.piece_at(from).filter(|p| p.color == ctx.mover) {
            match piece.kind {
                PieceKind::Pawn if game_state.variant() == Variant::Leviathan => {
                    generate_marker_moves(&ctx, from, piece, &mut out)
                }
                PieceKind::Pawn => generate_pawn_moves(&ctx, from, piece, &mut out),
                PieceKind::Marker => generate_marker_moves(&ctx, from, piece, &mut out),
                PieceKind::Knight => generate_knight_moves(&ctx, from, piece, &mut out),
                PieceKind::Bishop => generate_bishop_moves(&ctx, from, piece, &mut out),
                PieceKind::Rook | PieceKind::RoyalGuard => {
                    generate_rook_moves(&ctx, from, piece, &mut out)
                }
                PieceKind::Queen => generate_queen_moves(&ctx, from, piece, &mut out),
                PieceKind::King | PieceKind::FortressKing => {
                    generate_king_moves(&ctx, from, piece, &mut out)
                }
                PieceKind::SiegeEngine => generate_siege_moves(&ctx, from, piece, &mut out),
            }
        }
    }

    if let Some(plane) = ctx.plane {
        generate_plane_shifts(game_state, plane, from, &mut out);
    }

    Ok(out)
}

/// Whether `mv` leaves its mover's royal piece out of check.
pub fn is_legal(game_state: &GameState, mv: &Move) -> MoveGenResult<bool> {
    let mover = mv.piece.color;
    if !game_state.variant().has_check_for(mover) {
        return Ok(true);
    }

    let mut scratch = game_state.boards.clone();
    apply_to_boards(&mut scratch, mv)?;
    Ok(!is_royal_in_check_on(game_state, &scratch, mover))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::engine_random::RandomEngine;
    use crate::game_state::board::Board;
    use crate::game_state::chess_rules::EMPTY_LAYOUT;
    use crate::game_state::chess_types::{Color, Piece};
    use crate::game_state::game_state::BoardSet;
    use crate::game_state::variant::VariantConfig;
    use crate::move_generation::legal_move_checks::is_royal_in_check;
    use crate::moves::move_descriptions::MoveKind;
    use crate::turn::turn_controller::{OpponentReply, TurnController};

    #[test]
    fn chess_start_has_twenty_legal_moves() {
        let game = GameState::new_game(VariantConfig::new(Variant::Chess));
        let moves = LegalMoveGenerator
            .generate_legal_moves(&game)
            .expect("move generation should succeed");
        assert_eq!(moves.len(), 20);
    }

    #[test]
    fn lambda_start_adds_two_shifts_per_piece() {
        let game = GameState::new_game(VariantConfig::new(Variant::Lambda));
        let moves = LegalMoveGenerator
            .generate_legal_moves(&game)
            .expect("move generation should succeed");
        let shifts = moves.iter().filter(|mv| mv.kind == MoveKind::PlaneShift).count();

        assert_eq!(shifts, 32);
        assert_eq!(moves.len(), 52);
    }

    #[test]
    fn pinned_piece_cannot_leave_the_line() {
        let game = GameState::from_layout(
            VariantConfig::new(Variant::Chess),
            "4r1k1/8/8/8/8/8/4N3/4K3",
            Color::Light,
        )
        .expect("layout should parse");

        let pseudo = PseudoLegalMoveGenerator
            .generate_moves_from(&game, None, Square::at(4, 1))
            .expect("pseudo generation should succeed");
        let legal = LegalMoveGenerator
            .generate_moves_from(&game, None, Square::at(4, 1))
            .expect("legal generation should succeed");

        assert_eq!(pseudo.len(), 6);
        assert!(legal.is_empty());
    }

    #[test]
    fn fortress_king_cannot_step_into_pawn_attack() {
        let game = GameState::from_layout(
            VariantConfig::new(Variant::Helmbreaker),
            "3f4/8/2P5/8/8/8/8/8",
            Color::Dark,
        )
        .expect("layout should parse");
        let d8 = Square::at(3, 7);
        let d7 = Square::at(3, 6);

        let pseudo = PseudoLegalMoveGenerator
            .generate_moves_from(&game, None, d8)
            .expect("pseudo generation should succeed");
        let legal = LegalMoveGenerator
            .generate_moves_from(&game, None, d8)
            .expect("legal generation should succeed");

        assert!(pseudo.iter().any(|mv| mv.to == d7));
        let mut targets: Vec<Square> = legal.iter().map(|mv| mv.to).collect();
        targets.sort();
        assert_eq!(
            targets,
            vec![Square::at(2, 6), Square::at(4, 6), Square::at(2, 7), Square::at(4, 7)]
        );
    }

    #[test]
    fn king_cannot_shift_onto_an_attacked_plane() {
        let game = GameState::from_plane_layouts(
            VariantConfig::new(Variant::Lambda),
            "4r3/8/8/8/8/8/8/8",
            "7k/8/8/8/8/8/8/4K3",
            EMPTY_LAYOUT,
            PlaneId::Body,
            Color::Light,
        )
        .expect("plane layouts should parse");
        let e1 = Square::at(4, 0);

        let shifts = |generator: &dyn MoveGenerator| -> Vec<String> {
            generator
                .generate_moves_from(&game, Some(PlaneId::Body), e1)
                .expect("generation should succeed")
                .into_iter()
                .filter(|mv| mv.kind == MoveKind::PlaneShift)
                .map(|mv| mv.notation())
                .collect()
        };

        assert_eq!(shifts(&PseudoLegalMoveGenerator), vec!["E1@body>mind", "E1@body>spirit"]);
        assert_eq!(shifts(&LegalMoveGenerator), vec!["E1@body>spirit"]);
    }

    #[test]
    fn random_games_never_leave_the_mover_in_check() {
        for variant in Variant::ALL {
            for seed in 0..4u64 {
                let mut game = TurnController::new(VariantConfig::new(variant));
                let mut engine = RandomEngine::with_seed(seed);

                for _ in 0..80 {
                    if game.state().is_terminal() {
                        break;
                    }
                    let mover = game.state().side_to_move;
                    match game.request_opponent_move(&mut engine).expect("random move should be legal") {
                        OpponentReply::Moved(report) => assert!(
                            !is_royal_in_check(game.state(), mover),
                            "{variant} seed {seed}: {} left {mover} in check",
                            report.mv
                        ),
                        OpponentReply::Resigned(_) => break,
                    }
                }
            }
        }
    }

    #[test]
    fn every_destination_is_on_the_board_and_sliders_stop_at_blockers() {
        let game = GameState::from_layout(
            VariantConfig::new(Variant::Chess),
            "4k3/8/8/3p4/8/8/3R4/4K3",
            Color::Light,
        )
        .expect("layout should parse");
        let moves = LegalMoveGenerator
            .generate_moves_from(&game, None, Square::at(3, 1))
            .expect("rook generation should succeed");

        assert!(moves.iter().all(|mv| mv.to.index() < 64));
        assert!(moves.iter().any(|mv| mv.to == Square::at(3, 4) && mv.kind == MoveKind::Capture));
        assert!(moves.iter().all(|mv| mv.to != Square::at(3, 5)));
        assert_eq!(moves.iter().filter(|mv| mv.kind == MoveKind::Capture).count(), 1);
    }

    #[test]
    fn invader_moves_skip_the_legality_filter() {
        let game = GameState::new_game(VariantConfig::new(Variant::Helmbreaker));
        let pseudo = PseudoLegalMoveGenerator
            .generate_legal_moves(&game)
            .expect("pseudo generation should succeed");
        let legal = LegalMoveGenerator
            .generate_legal_moves(&game)
            .expect("legal generation should succeed");
        assert_eq!(pseudo, legal);
    }

    #[test]
    fn mismatched_board_layout_is_an_error() {
        let mut game = GameState::new_game(VariantConfig::new(Variant::Lambda));
        let mut board = Board::empty();
        board.place(Square::at(4, 0), Piece::new(Color::Light, PieceKind::King));
        game.boards = BoardSet::Single(board);
        assert!(LegalMoveGenerator.generate_legal_moves(&game).is_err());

        let chess = GameState::from_layout(VariantConfig::new(Variant::Chess), EMPTY_LAYOUT, Color::Light)
            .expect("layout should parse");
        assert!(LegalMoveGenerator
            .generate_moves_from(&chess, Some(PlaneId::Mind), Square::at(0, 0))
            .is_err());
    }
}
