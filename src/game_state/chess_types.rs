//! Value types shared by every subsystem.
//!
//! Squares are indexed `0..64` with `0 == A1`, `7 == H1` and `63 == H8`, so the
//! derived ordering walks the board rank by rank, file by file. Sets of squares
//! are 64-bit masks using the same indexing.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::utils::algebraic::{parse_square, square_to_algebraic, SquareParseError};

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    #[serde(rename = "white")]
    Light,
    #[serde(rename = "black")]
    Dark,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::Light, Color::Dark];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Rank step of a forward move: white climbs, black descends.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::Light => 1,
            Color::Dark => -1,
        }
    }

    #[inline]
    pub const fn code(self) -> char {
        match self {
            Color::Light => 'W',
            Color::Dark => 'B',
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Color::Light => "White",
            Color::Dark => "Black",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Piece kind. Color is stored separately in [`Piece`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
    /// Kindless Leviathan piece; only its color matters.
    Marker,
    SiegeEngine,
    FortressKing,
    RoyalGuard,
}

impl PieceKind {
    pub const ALL: [PieceKind; 10] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Marker,
        PieceKind::SiegeEngine,
        PieceKind::FortressKing,
        PieceKind::RoyalGuard,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
            PieceKind::Marker => 6,
            PieceKind::SiegeEngine => 7,
            PieceKind::FortressKing => 8,
            PieceKind::RoyalGuard => 9,
        }
    }

    /// King-equivalent pieces whose safety drives check and checkmate.
    #[inline]
    pub const fn is_royal(self) -> bool {
        matches!(self, PieceKind::King | PieceKind::FortressKing)
    }

    /// Essence value used by the Rite of Reduction.
    pub const fn essence(self) -> i32 {
        match self {
            PieceKind::King | PieceKind::FortressKing => 10,
            PieceKind::Queen => 9,
            PieceKind::Rook | PieceKind::RoyalGuard => 5,
            PieceKind::Bishop | PieceKind::Knight => 3,
            PieceKind::Pawn | PieceKind::Marker => 1,
            PieceKind::SiegeEngine => 0,
        }
    }

    /// Suffix of the UI piece code (`WP`, `BFK`, ...).
    pub const fn code(self) -> &'static str {
        match self {
            PieceKind::Pawn => "P",
            PieceKind::Knight => "N",
            PieceKind::Bishop => "B",
            PieceKind::Rook => "R",
            PieceKind::Queen => "Q",
            PieceKind::King => "K",
            PieceKind::Marker => "",
            PieceKind::SiegeEngine => "SE",
            PieceKind::FortressKing => "FK",
            PieceKind::RoyalGuard => "GR",
        }
    }

    /// Lowercase placement-string letter; white pieces use the uppercase form.
    pub const fn layout_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
            PieceKind::Marker => 'm',
            PieceKind::SiegeEngine => 's',
            PieceKind::FortressKing => 'f',
            PieceKind::RoyalGuard => 'g',
        }
    }

    pub fn from_layout_char(ch: char) -> Option<Self> {
        PieceKind::ALL
            .into_iter()
            .find(|kind| kind.layout_char() == ch.to_ascii_lowercase())
    }
}

/// A colored piece. Pieces carry no identity beyond the square they sit on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    #[inline]
    pub const fn is_royal(self) -> bool {
        self.kind.is_royal()
    }

    pub fn code(self) -> String {
        format!("{}{}", self.color.code(), self.kind.code())
    }

    pub fn layout_char(self) -> char {
        match self.color {
            Color::Light => self.kind.layout_char().to_ascii_uppercase(),
            Color::Dark => self.kind.layout_char(),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code())
    }
}

/// Set of squares, one bit per square index.
pub type SquareMask = u64;

pub const EMPTY_MASK: SquareMask = 0;
pub const FULL_MASK: SquareMask = u64::MAX;

/// A coordinate on the 8x8 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Square(u8);

impl Square {
    /// Build a square from zero-based file and rank. Panics when out of range,
    /// so it is meant for literal coordinates.
    pub const fn at(file: u8, rank: u8) -> Self {
        assert!(file < 8 && rank < 8, "square coordinate out of range");
        Self(rank * 8 + file)
    }

    #[inline]
    pub const fn from_coords(file: u8, rank: u8) -> Option<Self> {
        if file < 8 && rank < 8 {
            Some(Self(rank * 8 + file))
        } else {
            None
        }
    }

    #[inline]
    pub const fn new(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Self(index))
        } else {
            None
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn file(self) -> u8 {
        self.0 % 8
    }

    #[inline]
    pub const fn rank(self) -> u8 {
        self.0 / 8
    }

    #[inline]
    pub const fn mask(self) -> SquareMask {
        1u64 << self.0
    }

    /// Step by a file/rank delta, `None` when the result leaves the grid.
    #[inline]
    pub fn offset(self, file_step: i8, rank_step: i8) -> Option<Self> {
        let file = self.file() as i8 + file_step;
        let rank = self.rank() as i8 + rank_step;
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Self((rank * 8 + file) as u8))
        } else {
            None
        }
    }

    /// Concentric ring index: `0` is the outer edge, `3` the central 2x2.
    #[inline]
    pub fn ring(self) -> u8 {
        let file = self.file();
        let rank = self.rank();
        file.min(rank).min(7 - file).min(7 - rank)
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&square_to_algebraic(*self))
    }
}

impl std::str::FromStr for Square {
    type Err = SquareParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_square(s)
    }
}

impl TryFrom<String> for Square {
    type Error = SquareParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse_square(&value)
    }
}

impl From<Square> for String {
    fn from(square: Square) -> Self {
        square_to_algebraic(square)
    }
}

/// Iterates the squares of a mask in ascending index order.
pub fn squares_in(mask: SquareMask) -> SquareIter {
    SquareIter(mask)
}

pub struct SquareIter(SquareMask);

impl Iterator for SquareIter {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        if self.0 == 0 {
            return None;
        }
        let index = self.0.trailing_zeros() as u8;
        self.0 &= self.0 - 1;
        Some(Square(index))
    }
}

/// All squares on the given concentric ring.
pub fn ring_mask(ring: u8) -> SquareMask {
    Square::all()
        .filter(|square| square.ring() == ring)
        .fold(EMPTY_MASK, |acc, square| acc | square.mask())
}

/// One of the three Lambda Protocol boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaneId {
    Mind,
    Body,
    Spirit,
}

impl PlaneId {
    pub const ALL: [PlaneId; 3] = [PlaneId::Mind, PlaneId::Body, PlaneId::Spirit];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PlaneId::Mind => 0,
            PlaneId::Body => 1,
            PlaneId::Spirit => 2,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            PlaneId::Mind => "mind",
            PlaneId::Body => "body",
            PlaneId::Spirit => "spirit",
        }
    }

    /// Planes reachable by a single shift. Mind and spirit never touch.
    pub const fn adjacent(self) -> &'static [PlaneId] {
        match self {
            PlaneId::Mind => &[PlaneId::Body],
            PlaneId::Body => &[PlaneId::Mind, PlaneId::Spirit],
            PlaneId::Spirit => &[PlaneId::Body],
        }
    }

    pub fn is_adjacent_to(self, other: PlaneId) -> bool {
        self.adjacent().contains(&other)
    }
}

impl fmt::Display for PlaneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_coordinates_follow_rank_major_indexing() {
        let e4 = Square::at(4, 3);
        assert_eq!(e4.index(), 28);
        assert_eq!(e4.to_string(), "E4");
        assert!(Square::at(7, 0) < Square::at(0, 1));
        assert_eq!(Square::at(0, 0).offset(-1, 0), None);
        assert_eq!(Square::at(0, 0).offset(1, 2), Some(Square::at(1, 2)));
    }

    #[test]
    fn rings_partition_the_board() {
        let sizes: Vec<u32> = (0..4).map(|ring| ring_mask(ring).count_ones()).collect();
        assert_eq!(sizes, vec![28, 20, 12, 4]);
        assert_eq!(Square::at(3, 3).ring(), 3);
    }

    #[test]
    fn mind_and_spirit_are_not_adjacent() {
        assert!(PlaneId::Mind.is_adjacent_to(PlaneId::Body));
        assert!(PlaneId::Body.is_adjacent_to(PlaneId::Spirit));
        assert!(!PlaneId::Mind.is_adjacent_to(PlaneId::Spirit));
        assert!(!PlaneId::Body.is_adjacent_to(PlaneId::Body));
    }

    #[test]
    fn piece_codes_match_ui_codes() {
        assert_eq!(Piece::new(Color::Light, PieceKind::Pawn).code(), "WP");
        assert_eq!(Piece::new(Color::Dark, PieceKind::FortressKing).code(), "BFK");
        assert_eq!(Piece::new(Color::Light, PieceKind::SiegeEngine).code(), "WSE");
        assert_eq!(Piece::new(Color::Dark, PieceKind::Marker).code(), "B");
    }

    #[test]
    fn mask_iteration_is_ascending() {
        let mask = Square::at(4, 3).mask() | Square::at(0, 0).mask() | Square::at(7, 7).mask();
        let squares: Vec<String> = squares_in(mask).map(|s| s.to_string()).collect();
        assert_eq!(squares, vec!["A1", "E4", "H8"]);
    }
}
