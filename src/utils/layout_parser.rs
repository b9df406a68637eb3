//! Placement-string to `Board` parser.
//!
//! Accepts FEN's board field (`rnbqkbnr/pppppppp/8/...`, rank 8 first) plus
//! the variant letters `m`, `s`, `f` and `g`. Only the placement field is
//! read; side to move and variant metadata live on `GameState`.

use thiserror::Error;

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("layout must contain 8 ranks, found {0}")]
    RankCount(usize),
    #[error("invalid piece character '{0}' in layout")]
    InvalidPiece(char),
    #[error("invalid empty-square count '{0}'")]
    InvalidGap(char),
    #[error("rank {rank} does not sum to 8 files")]
    RankWidth { rank: u8 },
}

pub fn parse_layout(layout: &str) -> Result<Board, LayoutError> {
    let placement = layout.split_whitespace().next().unwrap_or_default();
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(LayoutError::RankCount(ranks.len()));
    }

    let mut board = Board::empty();

    for (layout_rank_idx, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - layout_rank_idx as u8;
        let mut file = 0u8;

        for ch in rank_str.chars() {
            if let Some(gap) = ch.to_digit(10) {
                if !(1..=8).contains(&gap) {
                    return Err(LayoutError::InvalidGap(ch));
                }
                file = file.saturating_add(gap as u8);
                continue;
            }

            let piece = piece_from_layout_char(ch).ok_or(LayoutError::InvalidPiece(ch))?;
            let square =
                Square::from_coords(file, rank).ok_or(LayoutError::RankWidth { rank: rank + 1 })?;
            board.place(square, piece);
            file += 1;
        }

        if file != 8 {
            return Err(LayoutError::RankWidth { rank: rank + 1 });
        }
    }

    Ok(board)
}

fn piece_from_layout_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::Light
    } else if ch.is_ascii_lowercase() {
        Color::Dark
    } else {
        return None;
    };

    PieceKind::from_layout_char(ch).map(|kind| Piece::new(color, kind))
}
