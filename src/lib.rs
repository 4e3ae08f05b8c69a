//! Crate root module declarations for the chess kata move generator.
//!
//! This file exposes the board snapshot, the per-piece move rules, the
//! dispatching move generator, and notation/diagnostic helpers so binaries,
//! benches, and external callers can import stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod board_geometry;
    pub mod chess_types;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod knight_moves;
    pub mod move_set;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod ray_cast;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod move_generator;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_parser;
    pub mod random_board;
    pub mod render_board;
}
