//! Helmbreaker siege engine: one square forward or diagonally forward onto
//! an empty square, never capturing. Entering a standing fortification is a
//! siege strike.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::MoveContext;
use crate::moves::move_descriptions::Move;
use crate::moves::pawn_moves::forward_fan;

pub fn generate_siege_moves(ctx: &MoveContext<'_>, from: Square, piece: Piece, out: &mut Vec<Move>) {
    let targets = forward_fan(piece.color, from) & !ctx.board.occupancy() & ctx.state.active_squares;

    for to in squares_in(targets) {
        let mv = if ctx.state.is_fortified(to) {
            Move::siege_strike(from, to, piece)
        } else {
            Move::quiet(from, to, piece)
        };
        out.push(mv.on_plane(ctx.plane));
    }
}

#[cfg(test)]
mod tests {
    use super::generate_siege_moves;
    use crate::game_state::chess_types::{Color, Square};
    use crate::game_state::game_state::GameState;
    use crate::game_state::variant::{Variant, VariantConfig};
    use crate::move_generation::legal_move_shared::MoveContext;
    use crate::moves::move_descriptions::MoveKind;

    #[test]
    fn siege_engine_strikes_walls_and_never_captures() {
        let state = GameState::from_layout(
            VariantConfig::new(Variant::Helmbreaker),
            "3f4/1gS5/8/8/8/8/8/8",
            Color::Light,
        )
        .expect("layout should parse");
        let c7 = Square::at(2, 6);
        let ctx = MoveContext::new(&state, None).expect("context should build");
        let piece = state.board().piece_at(c7).expect("siege engine should be on C7");

        let mut out = Vec::new();
        generate_siege_moves(&ctx, c7, piece, &mut out);
        let mut found: Vec<(Square, MoveKind)> = out.iter().map(|mv| (mv.to, mv.kind)).collect();
        found.sort_by_key(|(sq, _)| *sq);

        assert_eq!(
            found,
            vec![
                (Square::at(1, 7), MoveKind::Quiet),
                (Square::at(2, 7), MoveKind::SiegeStrike),
            ]
        );
    }
}
