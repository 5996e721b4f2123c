//! Per-piece move legality, ignoring king safety.
//!
//! `is_geometrically_legal` dispatches on `PieceKind` to the rule modules.
//! Every rule is a pure function of the board snapshot; castling history and
//! attacked squares are handled elsewhere.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
use crate::moves::bishop_moves::is_valid_bishop_move;
use crate::moves::king_moves::is_valid_king_move;
use crate::moves::knight_moves::is_valid_knight_move;
use crate::moves::pawn_moves::is_valid_pawn_move;
use crate::moves::queen_moves::is_valid_queen_move;
use crate::moves::rook_moves::is_valid_rook_move;

/// Whether `piece` on `from` may move to `to` by its movement pattern.
///
/// `en_passant` is only consulted for pawns.
pub fn is_geometrically_legal(
    piece: Piece,
    from: Square,
    to: Square,
    board: &Board,
    en_passant: Option<Square>,
) -> bool {
    let color = piece.color;
    match piece.kind {
        PieceKind::Pawn => is_valid_pawn_move(color, from, to, board, en_passant),
        PieceKind::Knight => is_valid_knight_move(color, from, to, board),
        PieceKind::Bishop => is_valid_bishop_move(color, from, to, board),
        PieceKind::Rook => is_valid_rook_move(color, from, to, board),
        PieceKind::Queen => is_valid_queen_move(color, from, to, board),
        PieceKind::King => is_valid_king_move(color, from, to, board),
    }
}

/// The destination is empty or holds an enemy piece.
#[inline]
pub fn destination_open(color: Color, to: Square, board: &Board) -> bool {
    board.piece_at(to).is_none_or(|piece| piece.color != color)
}

/// Every square strictly between `from` and `to` is empty.
///
/// Callers guarantee the two squares share a row, column, or diagonal.
pub fn path_is_clear(from: Square, to: Square, board: &Board) -> bool {
    let (d_row, d_col) = from.delta_to(to);
    let step = (d_row.signum(), d_col.signum());
    let mut current = from.offset(step.0, step.1);
    while let Some(square) = current {
        if square == to {
            return true;
        }
        if !board.is_empty(square) {
            return false;
        }
        current = square.offset(step.0, step.1);
    }
    false
}
