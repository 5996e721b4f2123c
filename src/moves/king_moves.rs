//! King movement rule.
//!
//! Covers the ordinary one-square step and the board-geometry half of
//! castling: the king shifts two columns from its home square, the squares
//! between it and the matching rook are empty, and that rook is still on its
//! corner. Whether castling is allowed by history or by attacked squares is
//! decided in `move_generation::legal_move_castling`.

use crate::chess_errors::CastleFailure;
use crate::game_state::board::Board;
use crate::game_state::castling_rights::CastleSide;
use crate::game_state::chess_rules::KING_START_COL;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
use crate::moves::piece_rules::destination_open;

/// One-square adjacency, ignoring occupancy.
#[inline]
pub fn king_attacks(from: Square, target: Square) -> bool {
    let (d_row, d_col) = from.delta_to(target);
    d_row.abs().max(d_col.abs()) == 1
}

/// The castle a `color` king would be attempting by moving `from` -> `to`,
/// if the move has castling shape at all.
pub fn castle_shift(color: Color, from: Square, to: Square) -> Option<CastleSide> {
    let home = Square::at(color.home_rank(), KING_START_COL);
    let (d_row, d_col) = from.delta_to(to);
    if from == home && d_row == 0 && d_col.abs() == 2 {
        Some(CastleSide::from_king_move(from, to))
    } else {
        None
    }
}

/// Board-geometry precondition of a castle: the rook is home and nothing
/// stands between it and the king.
pub fn castle_path_failure(color: Color, side: CastleSide, board: &Board) -> Option<CastleFailure> {
    let rank = color.home_rank();
    let rook_square = Square::at(rank, side.rook_col());
    if board.piece_at(rook_square) != Some(Piece::new(PieceKind::Rook, color)) {
        return Some(CastleFailure::RookMissing);
    }
    if side
        .between_cols()
        .any(|col| !board.is_empty(Square::at(rank, col)))
    {
        return Some(CastleFailure::PathObstructed);
    }
    None
}

pub fn is_valid_king_move(color: Color, from: Square, to: Square, board: &Board) -> bool {
    if king_attacks(from, to) {
        return destination_open(color, to, board);
    }
    match castle_shift(color, from, to) {
        Some(side) => castle_path_failure(color, side, board).is_none(),
        None => false,
    }
}
