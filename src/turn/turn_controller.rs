//! Half-move pipeline: validate, apply, post-move effects, victory.
//!
//! Every half-move is computed on a working copy of the state and committed
//! only once it has fully succeeded, so a rejected command leaves the game
//! exactly as it was.

use tracing::{debug, info, warn};

use crate::engines::engine_trait::{Engine, EngineDecision};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::pawn_start_rank;
use crate::game_state::chess_types::{Color, Piece, PieceKind, PlaneId, Square, SquareMask, EMPTY_MASK};
use crate::game_state::game_state::GameState;
use crate::game_state::snapshot::GameSnapshot;
use crate::game_state::variant::{Variant, VariantConfig};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::piece_attacks;
use crate::move_generation::legal_move_generator::{validate_layout, LegalMoveGenerator};
use crate::move_generation::move_generator::{MoveGenerationError, MoveGenerator};
use crate::moves::move_descriptions::Move;
use crate::moves::pawn_moves::{forward_fan, forward_square, pawn_attacks};
use crate::turn::command::{Command, CommandError, TurnError};
use crate::turn::victory::{evaluate_victory, VictoryOutcome};
use crate::variant_rules::turn_effects::{apply_post_move_effects, turn_started, RuleEvent};

/// What one committed half-move did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HalfMoveReport {
    pub color: Color,
    pub mv: Move,
    pub captured: Option<Piece>,
    pub events: Vec<RuleEvent>,
    pub outcome: Option<VictoryOutcome>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpponentReply {
    Moved(HalfMoveReport),
    Resigned(VictoryOutcome),
}

/// The player's half-move, the opponent's answer (if the game went on) and
/// the resulting state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    pub player: HalfMoveReport,
    pub opponent: Option<OpponentReply>,
    pub snapshot: GameSnapshot,
}

pub struct TurnController {
    state: GameState,
    move_generator: LegalMoveGenerator,
}

impl TurnController {
    pub fn new(config: VariantConfig) -> Self {
        Self {
            state: GameState::new_game(config),
            move_generator: LegalMoveGenerator,
        }
    }

    /// Resume from an existing state, e.g. a custom position.
    pub fn from_state(state: GameState) -> Result<Self, MoveGenerationError> {
        validate_layout(&state)?;
        Ok(Self {
            state,
            move_generator: LegalMoveGenerator,
        })
    }

    /// Discard the current game and start another, possibly of a different
    /// variant.
    pub fn new_game(&mut self, config: VariantConfig) {
        info!(variant = %config.variant, "new game");
        self.state = GameState::new_game(config);
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot()
    }

    #[inline]
    pub fn outcome(&self) -> Option<&VictoryOutcome> {
        self.state.outcome.as_ref()
    }

    /// Legal moves for the piece on `square` of the active board.
    pub fn legal_moves_from(&self, square: Square) -> Result<Vec<Move>, TurnError> {
        self.legal_moves_on(None, square)
    }

    /// Legal moves for the piece on `square` of `plane`.
    pub fn legal_moves_on(&self, plane: Option<PlaneId>, square: Square) -> Result<Vec<Move>, TurnError> {
        if self.state.is_terminal() {
            return Ok(Vec::new());
        }
        let view = turn_started(&self.state);
        Ok(self.move_generator.generate_moves_from(&view, plane, square)?)
    }

    pub fn legal_moves(&self) -> Result<Vec<Move>, TurnError> {
        if self.state.is_terminal() {
            return Ok(Vec::new());
        }
        let view = turn_started(&self.state);
        Ok(self.move_generator.generate_legal_moves(&view)?)
    }

    /// Play one half-move for the side to move.
    pub fn submit(&mut self, command: Command) -> Result<HalfMoveReport, TurnError> {
        self.ensure_live()?;
        let working = turn_started(&self.state);
        let mv = self.resolve(&working, &command).inspect_err(|err| {
            warn!(variant = %working.variant(), from = %command.from, to = %command.to, %err, "command rejected");
        })?;
        self.commit(working, mv)
    }

    /// Ask `engine` for the side to move's half-move and play it.
    ///
    /// An engine move that fails validation is reported as
    /// [`TurnError::IllegalOpponentMove`] and not applied.
    pub fn request_opponent_move(&mut self, engine: &mut dyn Engine) -> Result<OpponentReply, TurnError> {
        self.ensure_live()?;
        let working = turn_started(&self.state);
        let output = engine.choose_move(&working)?;

        let proposed = match output.decision {
            EngineDecision::Resign => {
                let outcome = VictoryOutcome::win(working.side_to_move.opposite(), "resignation");
                info!(engine = engine.name(), side = %working.side_to_move, "opponent resigned");
                self.state.outcome = Some(outcome.clone());
                return Ok(OpponentReply::Resigned(outcome));
            }
            EngineDecision::Move(mv) => mv,
        };

        let mv = match self.resolve(&working, &Command::from_move(&proposed)) {
            Ok(mv) if mv == proposed => mv,
            Ok(_) => {
                return Err(self.illegal_opponent_move(
                    engine,
                    proposed,
                    CommandError::IllegalDestination {
                        from: proposed.from,
                        to: proposed.to,
                    },
                ))
            }
            Err(TurnError::Command(reason)) => {
                return Err(self.illegal_opponent_move(engine, proposed, reason))
            }
            Err(other) => return Err(other),
        };

        self.commit(working, mv).map(OpponentReply::Moved)
    }

    /// Player half-move followed, if the game is still open, by the
    /// opponent's reply.
    pub fn play_turn(&mut self, command: Command, opponent: &mut dyn Engine) -> Result<TurnReport, TurnError> {
        let player = self.submit(command)?;
        let opponent = if self.state.is_terminal() {
            None
        } else {
            Some(self.request_opponent_move(opponent)?)
        };

        Ok(TurnReport {
            player,
            opponent,
            snapshot: self.snapshot(),
        })
    }

    fn ensure_live(&self) -> Result<(), CommandError> {
        match &self.state.outcome {
            Some(outcome) => Err(CommandError::GameOver {
                reason: outcome.to_string(),
            }),
            None => Ok(()),
        }
    }

    fn illegal_opponent_move(&self, engine: &dyn Engine, mv: Move, reason: CommandError) -> TurnError {
        warn!(engine = engine.name(), %mv, %reason, "opponent proposed an illegal move");
        TurnError::IllegalOpponentMove { mv, reason }
    }

    /// Match `command` against the legal moves of its source piece.
    fn resolve(&self, working: &GameState, command: &Command) -> Result<Move, TurnError> {
        let mover = working.side_to_move;
        let from_plane = command.from_plane.or(working.active_plane());

        let piece = working
            .boards
            .board(from_plane)
            .and_then(|board| board.piece_at(command.from))
            .ok_or(CommandError::NoPieceAtSource {
                square: command.from,
            })?;
        if piece.color != mover {
            return Err(CommandError::NotMoversPiece {
                square: command.from,
                piece,
                mover,
            }
            .into());
        }

        let candidates = self
            .move_generator
            .generate_moves_from(working, from_plane, command.from)?;
        if let Some(mv) = candidates.into_iter().find(|mv| command.matches(mv)) {
            return Ok(mv);
        }

        Err(classify_rejection(working, from_plane, command, piece).into())
    }

    fn commit(&mut self, mut working: GameState, mv: Move) -> Result<HalfMoveReport, TurnError> {
        let color = working.side_to_move;
        let applied = apply_move(&mut working, &mv)?;
        let events = apply_post_move_effects(&mut working, &applied);
        let outcome = evaluate_victory(&working, &self.move_generator)?;
        working.outcome = outcome.clone();

        debug!(
            variant = %working.variant(),
            ply = working.ply,
            side = %color,
            notation = %mv.notation(),
            events = events.len(),
            "half-move committed"
        );
        self.state = working;

        Ok(HalfMoveReport {
            color,
            mv,
            captured: applied.captured,
            events,
            outcome,
        })
    }
}

/// Name the most specific reason a command matched no legal move.
///
/// Square-specific reasons apply only when the piece's own geometry reaches
/// the destination.
fn classify_rejection(
    working: &GameState,
    plane: Option<PlaneId>,
    command: &Command,
    piece: Piece,
) -> CommandError {
    let mover = working.side_to_move;

    if command.is_plane_shift()
        && working.variant() == Variant::Lambda
        && working.resources_of(mover) < 1
    {
        return CommandError::InsufficientResource { color: mover };
    }

    let reach = working
        .boards
        .board(plane)
        .map_or(EMPTY_MASK, |board| geometric_reach(working.variant(), board, command.from, piece));
    if reach & command.to.mask() == 0 {
        return CommandError::IllegalDestination {
            from: command.from,
            to: command.to,
        };
    }

    if working.variant() == Variant::Rite && !working.is_square_active(command.to) {
        return CommandError::InactiveDestination { square: command.to };
    }
    if working.variant() == Variant::Helmbreaker
        && mover == Color::Light
        && piece.kind != PieceKind::SiegeEngine
        && working.is_fortified(command.to)
    {
        return CommandError::BlockedByFortification {
            square: command.to,
            health: working.fortification_health(command.to),
        };
    }

    CommandError::IllegalDestination {
        from: command.from,
        to: command.to,
    }
}

/// Squares `piece` could travel to by movement pattern alone, ignoring
/// collapsed squares, walls and check.
fn geometric_reach(variant: Variant, board: &Board, from: Square, piece: Piece) -> SquareMask {
    let color = piece.color;
    let pushes = |max_steps: i8| {
        (1..=max_steps)
            .filter_map(|steps| forward_square(color, from, steps))
            .fold(EMPTY_MASK, |acc, square| acc | square.mask())
    };

    match piece.kind {
        PieceKind::SiegeEngine => forward_fan(color, from),
        PieceKind::Marker => pawn_attacks(color, from) | pushes(2),
        PieceKind::Pawn if variant == Variant::Leviathan || from.rank() == pawn_start_rank(color) => {
            pawn_attacks(color, from) | pushes(2)
        }
        PieceKind::Pawn => pawn_attacks(color, from) | pushes(1),
        _ => piece_attacks(piece, from, board.occupancy()),
    }
}
