//! Move descriptions produced by generation and consumed by application.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::game_state::chess_types::{Piece, PlaneId, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MoveKind {
    Quiet,
    Capture,
    /// Leviathan's forced two-square advance.
    Momentum,
    /// Lambda same-square move onto an adjacent plane.
    PlaneShift,
    /// Helmbreaker siege engine entering a standing fortification.
    SiegeStrike,
}

impl MoveKind {
    pub const fn name(self) -> &'static str {
        match self {
            MoveKind::Quiet => "quiet",
            MoveKind::Capture => "capture",
            MoveKind::Momentum => "momentum",
            MoveKind::PlaneShift => "plane-shift",
            MoveKind::SiegeStrike => "siege-strike",
        }
    }
}

impl fmt::Display for MoveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub kind: MoveKind,
    pub captured: Option<Piece>,
    /// Plane the move starts on; `None` outside Lambda Protocol.
    pub plane: Option<PlaneId>,
    /// Destination plane of a plane shift.
    pub target_plane: Option<PlaneId>,
}

impl Move {
    pub const fn quiet(from: Square, to: Square, piece: Piece) -> Self {
        Self::with_kind(from, to, piece, MoveKind::Quiet, None)
    }

    pub const fn capture(from: Square, to: Square, piece: Piece, captured: Piece) -> Self {
        Self::with_kind(from, to, piece, MoveKind::Capture, Some(captured))
    }

    pub const fn momentum(from: Square, to: Square, piece: Piece) -> Self {
        Self::with_kind(from, to, piece, MoveKind::Momentum, None)
    }

    pub const fn siege_strike(from: Square, to: Square, piece: Piece) -> Self {
        Self::with_kind(from, to, piece, MoveKind::SiegeStrike, None)
    }

    pub const fn plane_shift(square: Square, piece: Piece, from: PlaneId, to: PlaneId) -> Self {
        Self {
            from: square,
            to: square,
            piece,
            kind: MoveKind::PlaneShift,
            captured: None,
            plane: Some(from),
            target_plane: Some(to),
        }
    }

    const fn with_kind(
        from: Square,
        to: Square,
        piece: Piece,
        kind: MoveKind,
        captured: Option<Piece>,
    ) -> Self {
        Self {
            from,
            to,
            piece,
            kind,
            captured,
            plane: None,
            target_plane: None,
        }
    }

    /// Tag a board move with the plane it is played on.
    pub const fn on_plane(mut self, plane: Option<PlaneId>) -> Self {
        self.plane = plane;
        self
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// History notation: `E2-E4`, `E4xD5`, `C2=>C4`, `D4@body>mind`, `D7#C8`.
    pub fn notation(&self) -> String {
        match self.kind {
            MoveKind::Quiet => format!("{}-{}", self.from, self.to),
            MoveKind::Capture => format!("{}x{}", self.from, self.to),
            MoveKind::Momentum => format!("{}=>{}", self.from, self.to),
            MoveKind::SiegeStrike => format!("{}#{}", self.from, self.to),
            MoveKind::PlaneShift => {
                let source = self.plane.map_or("?", PlaneId::name);
                let target = self.target_plane.map_or("?", PlaneId::name);
                format!("{}@{}>{}", self.from, source, target)
            }
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.piece, self.notation())
    }
}
