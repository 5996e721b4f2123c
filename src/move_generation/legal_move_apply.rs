//! Moving pieces on a board.
//!
//! `apply_to_board` is the single place that relocates pieces, shared by the
//! authoritative game state and by the safety check, which runs it on a
//! cloned scratch board and never on the caller's board.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, PieceKind, PromotionPiece, Square};
use crate::game_state::move_record::MoveKind;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::moves::king_moves::castle_shift;
use crate::moves::pawn_moves::en_passant_victim_square;

/// A move with its side effects worked out, ready to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannedMove {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub kind: MoveKind,
    pub promotion: Option<PromotionPiece>,
}

impl PlannedMove {
    /// True when this pawn move lands on its side's far rank.
    #[inline]
    pub fn reaches_promotion_rank(&self) -> bool {
        self.piece.kind == PieceKind::Pawn && self.to.row() == self.piece.color.promotion_row()
    }
}

/// Classify `from` -> `to` on `board`. Does not judge legality.
///
/// Returns `None` when `from` is empty.
pub fn plan_move(
    board: &Board,
    from: Square,
    to: Square,
    promotion: Option<PromotionPiece>,
) -> Option<PlannedMove> {
    let piece = board.piece_at(from)?;
    let (d_row, d_col) = from.delta_to(to);
    let target = board.piece_at(to);

    let kind = match piece.kind {
        PieceKind::King => match castle_shift(piece.color, from, to) {
            Some(side) => MoveKind::Castle(side),
            None if target.is_some() => MoveKind::Capture,
            None => MoveKind::Quiet,
        },
        PieceKind::Pawn if d_col.abs() == 1 && target.is_none() => MoveKind::EnPassant,
        PieceKind::Pawn if d_row.abs() == 2 => MoveKind::DoublePawnPush,
        _ if target.is_some() => MoveKind::Capture,
        _ => MoveKind::Quiet,
    };

    let promotion = promotion.filter(|_| {
        piece.kind == PieceKind::Pawn && to.row() == piece.color.promotion_row()
    });

    Some(PlannedMove {
        from,
        to,
        piece,
        kind,
        promotion,
    })
}

/// Apply `mv` to `board`, returning the captured piece if any.
pub fn apply_to_board(board: &mut Board, mv: &PlannedMove) -> Option<Piece> {
    board.put(mv.from, None);

    let placed = match mv.promotion {
        Some(promo) => Piece::new(promo.kind(), mv.piece.color),
        None => mv.piece,
    };
    let displaced = board.put(mv.to, Some(placed));

    match mv.kind {
        MoveKind::EnPassant => board.put(en_passant_victim_square(mv.from, mv.to), None),
        MoveKind::Castle(side) => {
            let rank = mv.piece.color.home_rank();
            let rook = board.put(Square::at(rank, side.rook_col()), None);
            board.put(Square::at(rank, side.transit_col()), rook);
            displaced
        }
        _ => displaced,
    }
}

/// Simulate `from` -> `to` on a scratch copy of `board` and report whether
/// the mover's king is safe afterwards.
///
/// Returns `false` when `from` is empty or the mover has no king.
pub fn is_move_safe(board: &Board, from: Square, to: Square) -> bool {
    let Some(mv) = plan_move(board, from, to, None) else {
        return false;
    };
    let mut scratch = board.clone();
    apply_to_board(&mut scratch, &mv);

    let color = mv.piece.color;
    match scratch.king_square(color) {
        Some(king_sq) => !is_square_attacked(&scratch, king_sq, color),
        None => false,
    }
}
