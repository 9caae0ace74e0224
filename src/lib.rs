//! Crate root module declarations for the Duel Chess rules engine.
//!
//! This file exposes the board model, per-piece movement rules, the legality
//! and termination layer, the two-player session facade, and utility helpers
//! so binaries, benches, and UI front ends can import stable module paths.

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_descriptions;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rays;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod game_termination;
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod move_generator;
    pub mod perft;
    pub mod pseudo_legal;
    pub mod special_moves;
}

pub mod session {
    pub mod chess_session;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_parser;
    pub mod random_playout;
    pub mod render_game_state;
}
