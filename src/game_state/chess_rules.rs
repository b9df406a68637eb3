//! Rule constants and initial placements for every variant.
//!
//! Placements use FEN's board field (rank 8 first) with extra letters for the
//! variant pieces: `m` marker, `s` siege engine, `f` fortress king and `g`
//! royal guard. Uppercase is white.

use crate::game_state::chess_types::{Color, Square};

/// Standard chess array.
pub const CHESS_LAYOUT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// Two full ranks of markers per side.
pub const LEVIATHAN_LAYOUT: &str = "mmmmmmmm/mmmmmmmm/8/8/8/8/MMMMMMMM/MMMMMMMM";

/// Siege engines D1/E1, invader pawns on rank 2, fortress king D8 behind three guards.
pub const HELMBREAKER_LAYOUT: &str = "3f4/2ggg3/8/8/8/8/PPPPPPPP/3SS3";

pub const EMPTY_LAYOUT: &str = "8/8/8/8/8/8/8/8";

/// Walls flanking the fortress king.
pub const HELMBREAKER_FORTIFICATIONS: [Square; 2] = [Square::at(2, 7), Square::at(4, 7)];

/// D4, E4, D5, E5.
pub const CENTRAL_SQUARES: [Square; 4] = [
    Square::at(3, 3),
    Square::at(4, 3),
    Square::at(3, 4),
    Square::at(4, 4),
];

pub const DEFAULT_COLLAPSE_INTERVAL: u32 = 10;
/// The central 2x2 never collapses.
pub const DEFAULT_MAX_COLLAPSED_RINGS: u8 = 3;
pub const DEFAULT_RESOURCE_CAP: u8 = 5;
pub const DEFAULT_INITIAL_RESOURCES: u8 = 1;
pub const DEFAULT_RESOURCE_INCOME: u8 = 1;
pub const DEFAULT_TURN_LIMIT: u16 = 40;
pub const DEFAULT_FORTIFICATION_HEALTH: u8 = 3;

/// Rank a pawn must stand on to use its two-square push.
#[inline]
pub const fn pawn_start_rank(color: Color) -> u8 {
    match color {
        Color::Light => 1,
        Color::Dark => 6,
    }
}
