//! Crate root module declarations for the chess arbiter kernel.
//!
//! This file exposes all top-level subsystems (board value types and
//! snapshots, game-state classification, rating math, and FEN utilities) so
//! servers, tests, and external tooling can import stable module paths.

pub mod board {
    pub mod board_helper;
    pub mod board_state;
    pub mod chess_move;
    pub mod piece;
    pub mod zobrist;
}

pub mod arbiter {
    pub mod arbiter_top;
    pub mod game_result;
}

pub mod rating {
    pub mod elo;
}

pub mod utils {
    pub mod fen_generator;
    pub mod fen_parser;
}
