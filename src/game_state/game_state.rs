//! The single mutable aggregate of a game.
//!
//! `GameState` owns the board (or Lambda's plane set), the side to move, the
//! ply counter and every piece of variant metadata. Components borrow it for
//! the duration of one half-move and never keep aliased views.

use std::collections::BTreeMap;

use crate::game_state::board::Board;
use crate::game_state::chess_rules::*;
use crate::game_state::chess_types::*;
use crate::game_state::plane_set::PlaneSet;
use crate::game_state::snapshot::GameSnapshot;
use crate::game_state::variant::{Variant, VariantConfig};
use crate::turn::victory::VictoryOutcome;
use crate::utils::layout_parser::{parse_layout, LayoutError};
use crate::variant_rules::rite::initial_essence;

/// One board, or three for Lambda Protocol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardSet {
    Single(Board),
    Planes(PlaneSet),
}

impl BoardSet {
    /// The board standard moves are played on.
    pub fn active(&self) -> &Board {
        match self {
            BoardSet::Single(board) => board,
            BoardSet::Planes(set) => set.active_board(),
        }
    }

    pub fn active_mut(&mut self) -> &mut Board {
        match self {
            BoardSet::Single(board) => board,
            BoardSet::Planes(set) => set.active_board_mut(),
        }
    }

    pub fn active_plane(&self) -> Option<PlaneId> {
        match self {
            BoardSet::Single(_) => None,
            BoardSet::Planes(set) => Some(set.active_plane()),
        }
    }

    /// Board addressed by plane; `None` addresses the active board.
    /// A plane id on a single-board game has no board.
    pub fn board(&self, plane: Option<PlaneId>) -> Option<&Board> {
        match (self, plane) {
            (_, None) => Some(self.active()),
            (BoardSet::Planes(set), Some(plane)) => Some(set.plane(plane)),
            (BoardSet::Single(_), Some(_)) => None,
        }
    }

    pub fn board_mut(&mut self, plane: Option<PlaneId>) -> Option<&mut Board> {
        match (self, plane) {
            (BoardSet::Single(board), None) => Some(board),
            (BoardSet::Planes(set), None) => Some(set.active_board_mut()),
            (BoardSet::Planes(set), Some(plane)) => Some(set.plane_mut(plane)),
            (BoardSet::Single(_), Some(_)) => None,
        }
    }

    pub fn plane_set(&self) -> Option<&PlaneSet> {
        match self {
            BoardSet::Single(_) => None,
            BoardSet::Planes(set) => Some(set),
        }
    }

    pub fn plane_set_mut(&mut self) -> Option<&mut PlaneSet> {
        match self {
            BoardSet::Single(_) => None,
            BoardSet::Planes(set) => Some(set),
        }
    }

    /// Every board with its plane id (`None` for a single board).
    pub fn boards(&self) -> Vec<(Option<PlaneId>, &Board)> {
        match self {
            BoardSet::Single(board) => vec![(None, board)],
            BoardSet::Planes(set) => set.planes().map(|(id, board)| (Some(id), board)).collect(),
        }
    }

    /// Where `color`'s royal piece stands, searching every plane.
    pub fn royal_location(&self, color: Color) -> Option<(Option<PlaneId>, Square)> {
        self.boards()
            .into_iter()
            .find_map(|(plane, board)| board.royal_square(color).map(|square| (plane, square)))
    }

    pub fn has_pieces_of(&self, color: Color) -> bool {
        self.boards()
            .into_iter()
            .any(|(_, board)| board.pieces_of(color).next().is_some())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub config: VariantConfig,
    pub boards: BoardSet,
    pub side_to_move: Color,
    pub ply: u32,

    // --- Rite of Reduction ---
    pub essence: [i32; 2],
    pub active_squares: SquareMask,
    pub collapsed_rings: u8,

    // --- Lambda Protocol ---
    pub resources: [u8; 2],

    // --- Helmbreaker ---
    pub fortifications: BTreeMap<Square, u8>,
    pub turns_remaining: Option<u16>,

    pub history: Vec<String>,
    pub outcome: Option<VictoryOutcome>,
}

impl GameState {
    /// Fresh game with the variant's initial placement.
    pub fn new_game(config: VariantConfig) -> Self {
        let variant = config.variant;
        let layout = match variant {
            Variant::Chess | Variant::Lambda | Variant::Rite => CHESS_LAYOUT,
            Variant::Leviathan => LEVIATHAN_LAYOUT,
            Variant::Helmbreaker => HELMBREAKER_LAYOUT,
        };
        Self::from_layout(config, layout, Color::Light).expect("initial layouts should always parse")
    }

    /// Game from a custom placement with the variant's default metadata.
    /// For Lambda the placement goes on the body plane.
    pub fn from_layout(
        config: VariantConfig,
        layout: &str,
        side_to_move: Color,
    ) -> Result<Self, LayoutError> {
        let board = parse_layout(layout)?;
        let boards = if config.variant.uses_planes() {
            BoardSet::Planes(PlaneSet::new(
                Board::empty(),
                board,
                Board::empty(),
                PlaneId::Body,
            ))
        } else {
            BoardSet::Single(board)
        };
        Ok(Self::with_boards(config, boards, side_to_move))
    }

    /// Lambda game from three placements.
    pub fn from_plane_layouts(
        config: VariantConfig,
        mind: &str,
        body: &str,
        spirit: &str,
        active: PlaneId,
        side_to_move: Color,
    ) -> Result<Self, LayoutError> {
        let boards = BoardSet::Planes(PlaneSet::new(
            parse_layout(mind)?,
            parse_layout(body)?,
            parse_layout(spirit)?,
            active,
        ));
        Ok(Self::with_boards(config, boards, side_to_move))
    }

    fn with_boards(config: VariantConfig, boards: BoardSet, side_to_move: Color) -> Self {
        let variant = config.variant;

        let essence = match variant {
            Variant::Rite => initial_essence(boards.active()),
            _ => [0; 2],
        };
        let resources = match variant {
            Variant::Lambda => [config.initial_resources; 2],
            _ => [0; 2],
        };
        let fortifications = match variant {
            Variant::Helmbreaker => HELMBREAKER_FORTIFICATIONS
                .into_iter()
                .map(|square| (square, config.fortification_health))
                .collect(),
            _ => BTreeMap::new(),
        };
        let turns_remaining = match variant {
            Variant::Helmbreaker => Some(config.turn_limit),
            _ => None,
        };

        Self {
            config,
            boards,
            side_to_move,
            ply: 0,
            essence,
            active_squares: FULL_MASK,
            collapsed_rings: 0,
            resources,
            fortifications,
            turns_remaining,
            history: Vec::new(),
            outcome: None,
        }
    }

    #[inline]
    pub fn variant(&self) -> Variant {
        self.config.variant
    }

    /// The active board.
    #[inline]
    pub fn board(&self) -> &Board {
        self.boards.active()
    }

    #[inline]
    pub fn active_plane(&self) -> Option<PlaneId> {
        self.boards.active_plane()
    }

    pub fn fortification_health(&self, square: Square) -> u8 {
        self.fortifications.get(&square).copied().unwrap_or(0)
    }

    #[inline]
    pub fn is_fortified(&self, square: Square) -> bool {
        self.fortification_health(square) > 0
    }

    /// Squares whose fortification still stands.
    pub fn fortified_mask(&self) -> SquareMask {
        self.fortifications
            .iter()
            .filter(|(_, health)| **health > 0)
            .fold(EMPTY_MASK, |acc, (square, _)| acc | square.mask())
    }

    #[inline]
    pub fn is_square_active(&self, square: Square) -> bool {
        self.active_squares & square.mask() != 0
    }

    #[inline]
    pub fn essence_of(&self, color: Color) -> i32 {
        self.essence[color.index()]
    }

    #[inline]
    pub fn resources_of(&self, color: Color) -> u8 {
        self.resources[color.index()]
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from_state(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_starts_with_its_placement() {
        let counts: Vec<(Variant, usize)> = Variant::ALL
            .into_iter()
            .map(|variant| {
                let state = GameState::new_game(VariantConfig::new(variant));
                let pieces = state
                    .boards
                    .boards()
                    .iter()
                    .map(|(_, board)| board.len())
                    .sum();
                (variant, pieces)
            })
            .collect();

        assert_eq!(
            counts,
            vec![
                (Variant::Chess, 32),
                (Variant::Leviathan, 32),
                (Variant::Lambda, 32),
                (Variant::Helmbreaker, 14),
                (Variant::Rite, 32),
            ]
        );
    }

    #[test]
    fn lambda_starts_on_body_plane_with_one_resource_each() {
        let state = GameState::new_game(VariantConfig::new(Variant::Lambda));
        assert_eq!(state.active_plane(), Some(PlaneId::Body));
        assert_eq!(state.resources, [1, 1]);
        let set = state.boards.plane_set().expect("lambda should use planes");
        assert!(set.plane(PlaneId::Mind).is_empty());
        assert!(set.plane(PlaneId::Spirit).is_empty());
    }

    #[test]
    fn helmbreaker_starts_with_walls_and_turn_limit() {
        let state = GameState::new_game(VariantConfig::new(Variant::Helmbreaker));
        assert_eq!(state.fortification_health(Square::at(2, 7)), 3);
        assert_eq!(state.fortification_health(Square::at(4, 7)), 3);
        assert_eq!(state.fortification_health(Square::at(3, 7)), 0);
        assert_eq!(state.turns_remaining, Some(40));
    }

    #[test]
    fn rite_starts_with_full_board_and_non_royal_essence() {
        let state = GameState::new_game(VariantConfig::new(Variant::Rite));
        assert_eq!(state.active_squares.count_ones(), 64);
        assert_eq!(state.essence, [39, 39]);
    }

    #[test]
    fn royal_location_searches_all_planes() {
        let state = GameState::from_plane_layouts(
            VariantConfig::new(Variant::Lambda),
            "8/8/8/8/8/8/8/4K3",
            "4k3/8/8/8/8/8/8/8",
            crate::game_state::chess_rules::EMPTY_LAYOUT,
            PlaneId::Body,
            Color::Light,
        )
        .expect("plane layouts should parse");

        assert_eq!(
            state.boards.royal_location(Color::Light),
            Some((Some(PlaneId::Mind), Square::at(4, 0)))
        );
        assert_eq!(
            state.boards.royal_location(Color::Dark),
            Some((Some(PlaneId::Body), Square::at(4, 7)))
        );
    }
}
