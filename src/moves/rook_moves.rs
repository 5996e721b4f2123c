use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::moves::piece_rules::{destination_open, path_is_clear};

/// Pure orthogonal geometry: exactly one axis changes.
#[inline]
pub fn is_orthogonal(from: Square, to: Square) -> bool {
    let (d_row, d_col) = from.delta_to(to);
    (d_row == 0) != (d_col == 0)
}

pub fn is_valid_rook_move(color: Color, from: Square, to: Square, board: &Board) -> bool {
    is_orthogonal(from, to) && path_is_clear(from, to, board) && destination_open(color, to, board)
}
