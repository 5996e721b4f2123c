//! Canonical chess-rule constants.
//!
//! Board geometry, home ranks, and the fixed columns castling depends on.
//! The initial layout itself lives in `Board::standard`.

use crate::game_state::chess_types::PieceKind;

pub const BOARD_SIZE: u8 = 8;

pub const BLACK_BACK_RANK: u8 = 0;
pub const WHITE_BACK_RANK: u8 = 7;
pub const BLACK_PAWN_START_ROW: u8 = 1;
pub const WHITE_PAWN_START_ROW: u8 = 6;

/// Column of both kings in the initial layout.
pub const KING_START_COL: u8 = 4;
pub const QUEENSIDE_ROOK_COL: u8 = 0;
pub const KINGSIDE_ROOK_COL: u8 = 7;

/// Back rank, a-file to h-file.
pub const BACK_RANK_LAYOUT: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];
