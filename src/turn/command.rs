//! Commands submitted to the turn controller and the ways they fail.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engines::engine_trait::EngineError;
use crate::game_state::chess_types::{Color, Piece, PlaneId, Square};
use crate::move_generation::move_generator::MoveGenerationError;
use crate::moves::move_descriptions::{Move, MoveKind};
use crate::utils::algebraic::{parse_square, SquareParseError};

/// `{ from, to }`, with optional planes for Lambda Protocol.
///
/// `from_plane` defaults to the active plane and `to_plane` to `from_plane`;
/// naming a different `to_plane` on the same square requests a plane shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Command {
    pub from: Square,
    pub to: Square,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_plane: Option<PlaneId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_plane: Option<PlaneId>,
}

impl Command {
    pub const fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            from_plane: None,
            to_plane: None,
        }
    }

    pub fn parse(from: &str, to: &str) -> Result<Self, SquareParseError> {
        Ok(Self::new(parse_square(from)?, parse_square(to)?))
    }

    pub const fn plane_shift(square: Square, from_plane: PlaneId, to_plane: PlaneId) -> Self {
        Self {
            from: square,
            to: square,
            from_plane: Some(from_plane),
            to_plane: Some(to_plane),
        }
    }

    pub const fn on_plane(mut self, plane: PlaneId) -> Self {
        self.from_plane = Some(plane);
        self
    }

    pub fn from_move(mv: &Move) -> Self {
        Self {
            from: mv.from,
            to: mv.to,
            from_plane: mv.plane,
            to_plane: mv.target_plane,
        }
    }

    pub fn is_plane_shift(&self) -> bool {
        matches!((self.from_plane, self.to_plane), (Some(a), Some(b)) if a != b)
    }

    /// Whether `mv` is the move this command asks for.
    pub fn matches(&self, mv: &Move) -> bool {
        if self.is_plane_shift() {
            mv.kind == MoveKind::PlaneShift
                && mv.from == self.from
                && self.to == self.from
                && mv.target_plane == self.to_plane
        } else {
            mv.kind != MoveKind::PlaneShift && mv.from == self.from && mv.to == self.to
        }
    }
}

/// Why a command was rejected. The game state is untouched in every case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("no piece at {square}")]
    NoPieceAtSource { square: Square },
    #[error("{piece} on {square} does not belong to {mover}")]
    NotMoversPiece {
        square: Square,
        piece: Piece,
        mover: Color,
    },
    #[error("{from} to {to} is not a legal move")]
    IllegalDestination { from: Square, to: Square },
    #[error("{color} has no resource left for a plane shift")]
    InsufficientResource { color: Color },
    #[error("{square} has collapsed")]
    InactiveDestination { square: Square },
    #[error("{square} is held by a fortification (health {health})")]
    BlockedByFortification { square: Square, health: u8 },
    #[error("the game is over: {reason}")]
    GameOver { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TurnError {
    #[error(transparent)]
    Command(#[from] CommandError),
    #[error("opponent proposed illegal move {mv}: {reason}")]
    IllegalOpponentMove { mv: Move, reason: CommandError },
    #[error("opponent engine failed: {0}")]
    Engine(#[from] EngineError),
    #[error(transparent)]
    MoveGeneration(#[from] MoveGenerationError),
}
