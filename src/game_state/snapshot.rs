//! Serializable view of a `GameState` handed to the presentation layer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::game_state::chess_types::{Color, PlaneId};
use crate::game_state::game_state::GameState;
use crate::game_state::variant::Variant;
use crate::turn::victory::VictoryOutcome;
use crate::utils::algebraic::{mask_to_algebraic, square_to_algebraic};
use crate::utils::layout_generator::generate_layout;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerSide<T> {
    pub white: T,
    pub black: T,
}

impl<T: Copy> PerSide<T> {
    pub fn from_array(values: [T; 2]) -> Self {
        Self {
            white: values[Color::Light.index()],
            black: values[Color::Dark.index()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaneSnapshot {
    /// `None` for single-board variants.
    pub plane: Option<PlaneId>,
    pub layout: String,
    /// `"E4" -> "WP"`.
    pub pieces: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub variant: Variant,
    pub planes: Vec<PlaneSnapshot>,
    pub active_plane: Option<PlaneId>,
    pub side_to_move: Color,
    pub ply: u32,
    pub essence: PerSide<i32>,
    pub resources: PerSide<u8>,
    pub fortifications: BTreeMap<String, u8>,
    pub active_squares: Vec<String>,
    pub turns_remaining: Option<u16>,
    pub history: Vec<String>,
    pub victory: Option<VictoryOutcome>,
}

impl GameSnapshot {
    pub fn from_state(state: &GameState) -> Self {
        let planes = state
            .boards
            .boards()
            .into_iter()
            .map(|(plane, board)| PlaneSnapshot {
                plane,
                layout: generate_layout(board),
                pieces: board
                    .pieces()
                    .map(|(square, piece)| (square_to_algebraic(square), piece.code()))
                    .collect(),
            })
            .collect();

        Self {
            variant: state.variant(),
            planes,
            active_plane: state.active_plane(),
            side_to_move: state.side_to_move,
            ply: state.ply,
            essence: PerSide::from_array(state.essence),
            resources: PerSide::from_array(state.resources),
            fortifications: state
                .fortifications
                .iter()
                .map(|(square, health)| (square_to_algebraic(*square), *health))
                .collect(),
            active_squares: mask_to_algebraic(state.active_squares),
            turns_remaining: state.turns_remaining,
            history: state.history.clone(),
            victory: state.outcome.clone(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
