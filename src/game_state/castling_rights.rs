//! Castling-rights bookkeeping.
//!
//! Records, per side, whether the king and each original rook have left
//! their starting squares. Flags only ever go from `false` to `true`; a
//! fresh record comes only with a new game.

use crate::game_state::chess_rules::{KINGSIDE_ROOK_COL, KING_START_COL, QUEENSIDE_ROOK_COL};
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    /// Side implied by a two-column king shift from `from` to `to`.
    #[inline]
    pub fn from_king_move(from: Square, to: Square) -> Self {
        if to.col() > from.col() {
            CastleSide::Kingside
        } else {
            CastleSide::Queenside
        }
    }

    #[inline]
    pub const fn rook_col(self) -> u8 {
        match self {
            CastleSide::Kingside => KINGSIDE_ROOK_COL,
            CastleSide::Queenside => QUEENSIDE_ROOK_COL,
        }
    }

    /// Column the king lands on.
    #[inline]
    pub const fn king_target_col(self) -> u8 {
        match self {
            CastleSide::Kingside => KING_START_COL + 2,
            CastleSide::Queenside => KING_START_COL - 2,
        }
    }

    /// Column the king crosses, which is also where the rook lands.
    #[inline]
    pub const fn transit_col(self) -> u8 {
        match self {
            CastleSide::Kingside => KING_START_COL + 1,
            CastleSide::Queenside => KING_START_COL - 1,
        }
    }

    /// Columns strictly between king and rook.
    pub fn between_cols(self) -> std::ops::Range<u8> {
        match self {
            CastleSide::Kingside => KING_START_COL + 1..KINGSIDE_ROOK_COL,
            CastleSide::Queenside => QUEENSIDE_ROOK_COL + 1..KING_START_COL,
        }
    }
}

/// Movement flags for one side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SideCastlingRights {
    pub king_moved: bool,
    pub queenside_rook_moved: bool,
    pub kingside_rook_moved: bool,
}

impl SideCastlingRights {
    #[inline]
    pub const fn rook_moved(&self, side: CastleSide) -> bool {
        match side {
            CastleSide::Kingside => self.kingside_rook_moved,
            CastleSide::Queenside => self.queenside_rook_moved,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CastlingRights {
    sides: [SideCastlingRights; 2],
}

impl CastlingRights {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn side(&self, color: Color) -> &SideCastlingRights {
        &self.sides[color.index()]
    }

    /// Update flags for `piece` leaving `from`.
    pub fn record_move(&mut self, piece: Piece, from: Square) {
        let rights = &mut self.sides[piece.color.index()];
        match piece.kind {
            PieceKind::King => rights.king_moved = true,
            PieceKind::Rook if from.row() == piece.color.home_rank() => {
                if from.col() == QUEENSIDE_ROOK_COL {
                    rights.queenside_rook_moved = true;
                } else if from.col() == KINGSIDE_ROOK_COL {
                    rights.kingside_rook_moved = true;
                }
            }
            _ => {}
        }
    }

    /// A rook taken on its original corner can never castle again.
    pub fn record_capture(&mut self, captured: Piece, on: Square) {
        if captured.kind == PieceKind::Rook {
            self.record_move(captured, on);
        }
    }

    /// Mark a flag directly; used when setting up hand-built positions.
    pub fn mark_king_moved(&mut self, color: Color) {
        self.sides[color.index()].king_moved = true;
    }

    pub fn mark_rook_moved(&mut self, color: Color, side: CastleSide) {
        let rights = &mut self.sides[color.index()];
        match side {
            CastleSide::Kingside => rights.kingside_rook_moved = true,
            CastleSide::Queenside => rights.queenside_rook_moved = true,
        }
    }
}
