//! Node counting over the legal move tree.
//!
//! Every node is a turn-started position, the same view the turn controller
//! generates moves from. A child is the parent with the move applied, the
//! variant effects run and the next side's turn begun.

use std::sync::Arc;
use std::thread;

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_royal_in_check;
use crate::move_generation::move_generator::{MoveGenResult, MoveGenerationError, MoveGenerator};
use crate::moves::move_descriptions::{Move, MoveKind};
use crate::variant_rules::turn_effects::{apply_post_move_effects, begin_turn, turn_started};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub momentum: usize,
    pub plane_shifts: usize,
    pub siege_strikes: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.momentum += rhs.momentum;
        self.plane_shifts += rhs.plane_shifts;
        self.siege_strikes += rhs.siege_strikes;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// State after `mv`, with the following turn already begun.
pub fn advance(game_state: &GameState, mv: &Move) -> MoveGenResult<GameState> {
    let mut next = game_state.clone();
    let applied = apply_move(&mut next, mv)?;
    apply_post_move_effects(&mut next, &applied);
    begin_turn(&mut next);
    Ok(next)
}

pub fn perft<G: MoveGenerator + ?Sized>(
    generator: &G,
    game_state: &GameState,
    depth: u8,
) -> MoveGenResult<PerftCounts> {
    let mut total = PerftCounts::default();
    if depth == 0 {
        total.nodes = 1;
        return Ok(total);
    }

    let root = turn_started(game_state);
    for mv in generator.generate_legal_moves(&root)? {
        perft_recurse(generator, &root, &mv, depth, 1, &mut total)?;
    }
    Ok(total)
}

/// Same counts, one worker thread per root move.
pub fn perft_multi_threaded(
    generator: Arc<dyn MoveGenerator>,
    game_state: &GameState,
    depth: u8,
) -> MoveGenResult<PerftCounts> {
    if depth == 0 {
        return perft(generator.as_ref(), game_state, 0);
    }

    let root = turn_started(game_state);
    let root_moves = generator.generate_legal_moves(&root)?;
    let mut handles = Vec::with_capacity(root_moves.len());

    for mv in root_moves {
        let generator_ref = Arc::clone(&generator);
        let root = root.clone();
        handles.push(thread::spawn(move || {
            let mut local = PerftCounts::default();
            let result = perft_recurse(generator_ref.as_ref(), &root, &mv, depth, 1, &mut local);
            (result, local)
        }));
    }

    let mut total = PerftCounts::default();
    for handle in handles {
        let (result, local) = handle
            .join()
            .map_err(|_| MoveGenerationError::InvalidState("perft worker thread panicked".to_owned()))?;
        result?;
        total.merge(local);
    }

    Ok(total)
}

fn perft_recurse<G: MoveGenerator + ?Sized>(
    generator: &G,
    parent: &GameState,
    mv: &Move,
    search_depth: u8,
    current_depth: u8,
    counts: &mut PerftCounts,
) -> MoveGenResult<()> {
    let next = advance(parent, mv)?;

    if current_depth == search_depth {
        counts.nodes += 1;
        if mv.is_capture() {
            counts.captures += 1;
        }
        match mv.kind {
            MoveKind::Momentum => counts.momentum += 1,
            MoveKind::PlaneShift => counts.plane_shifts += 1,
            MoveKind::SiegeStrike => counts.siege_strikes += 1,
            MoveKind::Quiet | MoveKind::Capture => {}
        }
        if is_royal_in_check(&next, next.side_to_move) {
            counts.checks += 1;
            if generator.generate_legal_moves(&next)?.is_empty() {
                counts.checkmates += 1;
            }
        }
        return Ok(());
    }

    for child in generator.generate_legal_moves(&next)? {
        perft_recurse(generator, &next, &child, search_depth, current_depth + 1, counts)?;
    }
    Ok(())
}
