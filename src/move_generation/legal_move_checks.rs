//! Attack detection.
//!
//! Answers "is this square attacked by the opponent of `defender`?" by
//! scanning every opposing piece on the board. Pawns and kings are tested by
//! their capture pattern directly (a pawn attacks its forward diagonals even
//! when they are empty; a king never attacks through its castling shift).
//! Every other piece uses its ordinary move rule. No recursion, no turn or
//! safety logic: a single bounded pass over the 64 squares.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
use crate::moves::bishop_moves::is_valid_bishop_move;
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::queen_moves::is_valid_queen_move;
use crate::moves::rook_moves::is_valid_rook_move;

/// True if any piece of `defender.opposite()` attacks `square`.
pub fn is_square_attacked(board: &Board, square: Square, defender: Color) -> bool {
    board
        .pieces_of(defender.opposite())
        .any(|(from, piece)| piece_attacks(piece, from, square, board))
}

/// Every opposing piece attacking `square`, with its location.
pub fn attackers_to_square(board: &Board, square: Square, defender: Color) -> Vec<(Square, Piece)> {
    board
        .pieces_of(defender.opposite())
        .filter(|(from, piece)| piece_attacks(*piece, *from, square, board))
        .collect()
}

fn piece_attacks(piece: Piece, from: Square, target: Square, board: &Board) -> bool {
    if from == target {
        return false;
    }
    let attacker = piece.color;
    match piece.kind {
        PieceKind::Pawn => pawn_attacks(attacker, from, target),
        PieceKind::Knight => knight_attacks(from, target),
        PieceKind::King => king_attacks(from, target),
        PieceKind::Bishop => is_valid_bishop_move(attacker, from, target, board),
        PieceKind::Rook => is_valid_rook_move(attacker, from, target, board),
        PieceKind::Queen => is_valid_queen_move(attacker, from, target, board),
    }
}
