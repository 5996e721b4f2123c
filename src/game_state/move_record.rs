use chrono::{DateTime, Utc};

use crate::game_state::castling_rights::CastleSide;
use crate::game_state::chess_types::{Piece, PromotionPiece, Square};
use crate::utils::algebraic::format_coordinate_move;

/// What an applied move did to the board besides relocating one piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    Quiet,
    Capture,
    DoublePawnPush,
    /// Pawn captured the pawn beside it by moving onto the skipped square.
    EnPassant,
    /// King moved two columns; the rook moved with it.
    Castle(CastleSide),
}

/// One entry of a game's history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    /// The piece as it stood on `from`, before any promotion.
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub kind: MoveKind,
    pub promotion: Option<PromotionPiece>,
    pub applied_at: DateTime<Utc>,
}

impl MoveRecord {
    /// Coordinate notation, e.g. `e2e4` or `e7e8q`.
    pub fn coordinate_notation(&self) -> String {
        format_coordinate_move(self.from, self.to, self.promotion)
    }
}
