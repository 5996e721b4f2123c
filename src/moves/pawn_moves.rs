use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceKind, Square};

/// True if a `color` pawn standing on `from` attacks `target`.
///
/// Pawns attack one square diagonally forward whether or not anything stands
/// there, which is why attack detection uses this instead of the move rule.
#[inline]
pub fn pawn_attacks(color: Color, from: Square, target: Square) -> bool {
    let (d_row, d_col) = from.delta_to(target);
    d_row == color.pawn_direction() && d_col.abs() == 1
}

/// Move rule for a `color` pawn. Promotion is the caller's concern.
pub fn is_valid_pawn_move(
    color: Color,
    from: Square,
    to: Square,
    board: &Board,
    en_passant: Option<Square>,
) -> bool {
    let direction = color.pawn_direction();
    let (d_row, d_col) = from.delta_to(to);
    let target = board.piece_at(to);

    // Single push.
    if d_col == 0 && d_row == direction {
        return target.is_none();
    }

    // Double push from the start row.
    if d_col == 0 && d_row == direction * 2 && from.row() == color.pawn_start_row() {
        let Some(intermediate) = from.offset(direction, 0) else {
            return false;
        };
        return target.is_none() && board.is_empty(intermediate);
    }

    // Diagonal capture, normal or en passant.
    if d_col.abs() == 1 && d_row == direction {
        return match target {
            Some(piece) => piece.color != color,
            None => en_passant == Some(to) && has_en_passant_victim(color, from, to, board),
        };
    }

    false
}

/// Square of the pawn removed by an en-passant capture from `from` to `to`:
/// beside the destination, on the mover's original row.
#[inline]
pub fn en_passant_victim_square(from: Square, to: Square) -> Square {
    Square::at(from.row(), to.col())
}

fn has_en_passant_victim(color: Color, from: Square, to: Square, board: &Board) -> bool {
    board
        .piece_at(en_passant_victim_square(from, to))
        .is_some_and(|piece| piece.kind == PieceKind::Pawn && piece.color != color)
}
