use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::moves::piece_rules::{destination_open, path_is_clear};

/// Pure diagonal geometry: equal, non-zero row and column distance.
#[inline]
pub fn is_diagonal(from: Square, to: Square) -> bool {
    let (d_row, d_col) = from.delta_to(to);
    d_row != 0 && d_row.abs() == d_col.abs()
}

pub fn is_valid_bishop_move(color: Color, from: Square, to: Square, board: &Board) -> bool {
    is_diagonal(from, to) && path_is_clear(from, to, board) && destination_open(color, to, board)
}
