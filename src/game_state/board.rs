//! 8x8 mailbox board.
//!
//! `Board` is a plain value: cloning it yields an independent scratch copy,
//! which is how move simulation avoids touching the authoritative position.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::{BACK_RANK_LAYOUT, BOARD_SIZE};
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Piece>; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub const fn empty() -> Self {
        Self {
            cells: [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize],
        }
    }

    /// The standard initial position.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for color in [Color::White, Color::Black] {
            let home = color.home_rank() as usize;
            let pawns = color.pawn_start_row() as usize;
            for (col, kind) in BACK_RANK_LAYOUT.iter().enumerate() {
                board.cells[home][col] = Some(Piece::new(*kind, color));
                board.cells[pawns][col] = Some(Piece::new(PieceKind::Pawn, color));
            }
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.cells[square.row() as usize][square.col() as usize]
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Put `piece` on `square`, returning whatever stood there.
    ///
    /// Fails without modifying the board if this would give one side a
    /// second king.
    pub fn place(&mut self, square: Square, piece: Piece) -> Result<Option<Piece>, ChessErrors> {
        if piece.kind == PieceKind::King {
            if let Some(existing) = self.king_square(piece.color) {
                if existing != square {
                    return Err(ChessErrors::TooManyKings(piece.color));
                }
            }
        }
        Ok(self.put(square, Some(piece)))
    }

    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        self.put(square, None)
    }

    /// Raw cell write used by move application; no king bookkeeping.
    #[inline]
    pub(crate) fn put(&mut self, square: Square, piece: Option<Piece>) -> Option<Piece> {
        std::mem::replace(
            &mut self.cells[square.row() as usize][square.col() as usize],
            piece,
        )
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, piece)| piece.kind == PieceKind::King && piece.color == color)
            .map(|(square, _)| square)
    }

    /// Every occupied square with its piece, row-major.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| self.piece_at(square).map(|piece| (square, piece)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    /// The same position seen from the other side: rows mirrored and every
    /// piece's color swapped.
    pub fn color_flipped(&self) -> Board {
        let mut flipped = Board::empty();
        for (square, piece) in self.pieces() {
            flipped.put(
                square.flipped(),
                Some(Piece::new(piece.kind, piece.color.opposite())),
            );
        }
        flipped
    }
}
