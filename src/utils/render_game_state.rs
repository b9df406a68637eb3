//! Terminal text rendering of boards and game metadata.
//!
//! Used by tests, the match runner and tracing output when a position needs
//! to be read by a human.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::game_state::variant::Variant;

/// Render one board, rank 8 at the top.
///
/// Pieces use their layout letters (upper case White). Empty squares are
/// `·`.
pub fn render_board(board: &Board) -> String {
    render_board_with_overlay(board, |_| None)
}

/// Render the full game: every plane, plus the variant metadata that is not
/// visible on the board itself.
///
/// Rite squares that have collapsed show as `x`; standing fortifications show
/// as `#` when vacant.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} | ply {} | {} to move\n",
        game_state.variant().title(),
        game_state.ply,
        game_state.side_to_move
    ));

    for (plane, board) in game_state.boards.boards() {
        if let Some(plane) = plane {
            let marker = if Some(plane) == game_state.active_plane() { " (active)" } else { "" };
            out.push_str(&format!("[{plane}{marker}]\n"));
        }
        out.push_str(&render_board_with_overlay(board, |square| {
            if !game_state.is_square_active(square) {
                Some('x')
            } else if game_state.is_fortified(square) {
                Some('#')
            } else {
                None
            }
        }));
        out.push('\n');
    }

    match game_state.variant() {
        Variant::Rite => out.push_str(&format!(
            "essence W {} / B {} | rings collapsed {}\n",
            game_state.essence_of(Color::Light),
            game_state.essence_of(Color::Dark),
            game_state.collapsed_rings
        )),
        Variant::Lambda => out.push_str(&format!(
            "resources W {} / B {}\n",
            game_state.resources_of(Color::Light),
            game_state.resources_of(Color::Dark)
        )),
        Variant::Helmbreaker => {
            let walls: Vec<String> = game_state
                .fortifications
                .iter()
                .map(|(square, health)| format!("{square}={health}"))
                .collect();
            out.push_str(&format!(
                "fortifications {} | turns remaining {}\n",
                walls.join(" "),
                game_state.turns_remaining.unwrap_or(0)
            ));
        }
        Variant::Chess | Variant::Leviathan => {}
    }

    if let Some(outcome) = &game_state.outcome {
        out.push_str(&format!("result: {outcome}\n"));
    }

    out
}

/// `overlay` is consulted for empty squares only.
fn render_board_with_overlay(board: &Board, overlay: impl Fn(Square) -> Option<char>) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in (0..8u8).rev() {
        out.push(char::from(b'1' + rank));
        out.push(' ');

        for file in 0..8u8 {
            let square = Square::at(file, rank);
            let ch = match board.piece_at(square) {
                Some(piece) => piece.layout_char(),
                None => overlay(square).unwrap_or('·'),
            };
            out.push(ch);

            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + rank));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::variant::VariantConfig;

    #[test]
    fn renders_start_position_ranks() {
        let state = GameState::new_game(VariantConfig::new(Variant::Chess));
        let text = render_board(state.board());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[1], "8 r n b q k b n r 8");
        assert_eq!(lines[5], "4 · · · · · · · · 4");
        assert_eq!(lines[8], "1 R N B Q K B N R 1");
    }

    #[test]
    fn helmbreaker_render_marks_walls_and_metadata() {
        let state = GameState::new_game(VariantConfig::new(Variant::Helmbreaker));
        let text = render_game_state(&state);

        assert!(text.contains("8 · · # f # · · · 8"));
        assert!(text.contains("fortifications C8=3 E8=3 | turns remaining 40"));
    }

    #[test]
    fn rite_render_marks_collapsed_ring() {
        let mut state = GameState::new_game(VariantConfig::new(Variant::Rite));
        state.active_squares = ring_mask(1) | ring_mask(2) | ring_mask(3);
        for square in squares_in(ring_mask(0)) {
            state.boards.active_mut().remove(square);
        }
        let text = render_game_state(&state);

        assert!(text.contains("8 x x x x x x x x 8"));
        assert!(text.contains("7 x p p p p p p x 7"));
    }

    #[test]
    fn lambda_render_lists_planes() {
        let state = GameState::new_game(VariantConfig::new(Variant::Lambda));
        let text = render_game_state(&state);

        assert!(text.contains("[mind]"));
        assert!(text.contains("[body (active)]"));
        assert!(text.contains("[spirit]"));
        assert!(text.contains("resources W 1 / B 1"));
    }
}
