use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::moves::bishop_moves::is_valid_bishop_move;
use crate::moves::rook_moves::is_valid_rook_move;

/// A queen moves like a bishop or like a rook.
#[inline]
pub fn is_valid_queen_move(color: Color, from: Square, to: Square, board: &Board) -> bool {
    is_valid_bishop_move(color, from, to, board) || is_valid_rook_move(color, from, to, board)
}
