use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::moves::piece_rules::destination_open;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// L-shape test, ignoring what stands on either square.
#[inline]
pub fn knight_attacks(from: Square, target: Square) -> bool {
    KNIGHT_OFFSETS.contains(&from.delta_to(target))
}

pub fn is_valid_knight_move(color: Color, from: Square, to: Square, board: &Board) -> bool {
    knight_attacks(from, to) && destination_open(color, to, board)
}
