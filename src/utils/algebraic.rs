//! Square conversions for the `E4`-style coordinates used by the UI.

use thiserror::Error;

use crate::game_state::chess_types::{squares_in, Square, SquareMask};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SquareParseError {
    #[error("invalid square '{0}': expected a file A-H followed by a rank 1-8")]
    Malformed(String),
    #[error("invalid file '{0}'")]
    File(char),
    #[error("invalid rank '{0}'")]
    Rank(char),
}

/// Parse a coordinate such as `E4` (files are accepted in either case).
pub fn parse_square(square: &str) -> Result<Square, SquareParseError> {
    let bytes = square.trim().as_bytes();
    if bytes.len() != 2 {
        return Err(SquareParseError::Malformed(square.to_owned()));
    }

    let file = bytes[0].to_ascii_uppercase();
    let rank = bytes[1];

    if !(b'A'..=b'H').contains(&file) {
        return Err(SquareParseError::File(bytes[0] as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(SquareParseError::Rank(rank as char));
    }

    Ok(Square::at(file - b'A', rank - b'1'))
}

/// Convert a square to its uppercase coordinate, e.g. `E4`.
pub fn square_to_algebraic(square: Square) -> String {
    let file_char = char::from(b'A' + square.file());
    let rank_char = char::from(b'1' + square.rank());
    format!("{file_char}{rank_char}")
}

/// Coordinates of every square in a mask, in ascending order.
pub fn mask_to_algebraic(mask: SquareMask) -> Vec<String> {
    squares_in(mask).map(square_to_algebraic).collect()
}
