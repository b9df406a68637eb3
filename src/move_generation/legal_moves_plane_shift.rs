//! Lambda Protocol plane shifts.

use crate::game_state::chess_types::{PlaneId, Square};
use crate::game_state::game_state::GameState;
use crate::game_state::variant::Variant;
use crate::moves::move_descriptions::Move;

/// Shift moves for the mover's piece on `plane` at `from`.
///
/// Each costs one resource and needs the same square on the adjacent plane
/// to be empty.
pub fn generate_plane_shifts(state: &GameState, plane: PlaneId, from: Square, out: &mut Vec<Move>) {
    if state.variant() != Variant::Lambda || state.resources_of(state.side_to_move) < 1 {
        return;
    }
    let Some(set) = state.boards.plane_set() else {
        return;
    };
    let Some(piece) = set.plane(plane).piece_at(from) else {
        return;
    };
    if piece.color != state.side_to_move {
        return;
    }

    for &target in plane.adjacent() {
        if set.plane(target).is_vacant(from) {
            out.push(Move::plane_shift(from, piece, plane, target));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::generate_plane_shifts;
    use crate::game_state::chess_rules::EMPTY_LAYOUT;
    use crate::game_state::chess_types::{Color, PlaneId, Square};
    use crate::game_state::game_state::GameState;
    use crate::game_state::variant::{Variant, VariantConfig};

    fn lambda(mind: &str, body: &str) -> GameState {
        GameState::from_plane_layouts(
            VariantConfig::new(Variant::Lambda),
            mind,
            body,
            EMPTY_LAYOUT,
            PlaneId::Body,
            Color::Light,
        )
        .expect("plane layouts should parse")
    }

    #[test]
    fn body_piece_can_shift_to_both_neighbours() {
        let state = lambda(EMPTY_LAYOUT, "4k3/8/8/8/3N4/8/8/4K3");
        let mut out = Vec::new();
        generate_plane_shifts(&state, PlaneId::Body, Square::at(3, 3), &mut out);

        let targets: Vec<_> = out.iter().map(|mv| mv.target_plane).collect();
        assert_eq!(targets, vec![Some(PlaneId::Mind), Some(PlaneId::Spirit)]);
    }

    #[test]
    fn mind_piece_never_shifts_to_spirit() {
        let state = lambda("8/8/8/8/3N4/8/8/8", "4k3/8/8/8/8/8/8/4K3");
        let mut out = Vec::new();
        generate_plane_shifts(&state, PlaneId::Mind, Square::at(3, 3), &mut out);

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].target_plane, Some(PlaneId::Body));
    }

    #[test]
    fn occupied_target_square_or_empty_pool_blocks_shift() {
        let mut state = lambda("8/8/8/8/3p4/8/8/8", "4k3/8/8/8/3N4/8/8/4K3");
        let d4 = Square::at(3, 3);

        let mut out = Vec::new();
        generate_plane_shifts(&state, PlaneId::Body, d4, &mut out);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].target_plane, Some(PlaneId::Spirit));

        state.resources = [0, 0];
        out.clear();
        generate_plane_shifts(&state, PlaneId::Body, d4, &mut out);
        assert!(out.is_empty());
    }
}
