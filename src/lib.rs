//! Crate root module declarations for the Hollow Chess rules engine.
//!
//! This file exposes the game state model, move generation, variant rules,
//! the turn pipeline, opponent engines and utility helpers so binaries,
//! benches and a presentation layer can import stable module paths.

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod plane_set;
    pub mod snapshot;
    pub mod variant;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_descriptions;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_marker;
    pub mod legal_moves_pawn;
    pub mod legal_moves_plane_shift;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod legal_moves_siege;
    pub mod move_generator;
    pub mod perft;
}

pub mod variant_rules {
    pub mod helmbreaker;
    pub mod lambda;
    pub mod rite;
    pub mod turn_effects;
}

pub mod turn {
    pub mod command;
    pub mod turn_controller;
    pub mod victory;
}

pub mod engines {
    pub mod engine_greedy;
    pub mod engine_random;
    pub mod engine_scripted;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod engine_match_harness;
    pub mod layout_generator;
    pub mod layout_parser;
    pub mod render_game_state;
}
