//! Crate root module declarations for the chess referee.
//!
//! The referee owns a chess position and decides whether requested moves are
//! legal: per-piece movement rules, attack detection, king-safety
//! simulation, castling and en-passant bookkeeping, promotion, and
//! checkmate/stalemate detection. Rendering and input handling are left to
//! callers; `session::move_protocol` and the `utils` helpers are thin layers
//! for them.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod castling_rights;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod move_outcome;
    pub mod move_record;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod piece_rules;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_castling;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
}

pub mod session {
    pub mod move_protocol;
}

pub mod utils {
    pub mod algebraic;
    pub mod random_playout;
    pub mod render_game_state;
}
