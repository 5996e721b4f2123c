//! Core value types shared by every part of the referee: colors, piece
//! kinds, pieces, squares, and the shape of a move request.
//!
//! Squares are addressed as (row, column). Row 0 is black's back rank and
//! row 7 is white's back rank; column 0 is the a-file.
use std::fmt;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::{
    BLACK_BACK_RANK, BLACK_PAWN_START_ROW, BOARD_SIZE, WHITE_BACK_RANK, WHITE_PAWN_START_ROW,
};

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row holding this side's king and rooks in the initial layout.
    #[inline]
    pub const fn home_rank(self) -> u8 {
        match self {
            Color::White => WHITE_BACK_RANK,
            Color::Black => BLACK_BACK_RANK,
        }
    }

    /// Row delta of a single pawn step.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn pawn_start_row(self) -> u8 {
        match self {
            Color::White => WHITE_PAWN_START_ROW,
            Color::Black => BLACK_PAWN_START_ROW,
        }
    }

    /// Row on which this side's pawns promote (the opponent's back rank).
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        self.opposite().home_rank()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => f.write_str("white"),
            Color::Black => f.write_str("black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

pub const ALL_PIECE_KINDS: [PieceKind; 6] = [
    PieceKind::Pawn,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
    PieceKind::King,
];

/// A piece on the board: what it is and whose it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    /// True when `other` exists and belongs to the same side.
    #[inline]
    pub fn is_friendly_with(self, other: Option<Piece>) -> bool {
        other.is_some_and(|piece| piece.color == self.color)
    }
}

/// Piece a pawn may become on the far rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromotionPiece {
    Knight,
    Bishop,
    Rook,
    Queen,
}

impl PromotionPiece {
    pub const ALL: [PromotionPiece; 4] = [
        PromotionPiece::Queen,
        PromotionPiece::Rook,
        PromotionPiece::Bishop,
        PromotionPiece::Knight,
    ];

    #[inline]
    pub const fn kind(self) -> PieceKind {
        match self {
            PromotionPiece::Knight => PieceKind::Knight,
            PromotionPiece::Bishop => PieceKind::Bishop,
            PromotionPiece::Rook => PieceKind::Rook,
            PromotionPiece::Queen => PieceKind::Queen,
        }
    }
}

/// A board coordinate. Always within `0..8` on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    pub fn new(row: u8, col: u8) -> Result<Self, ChessErrors> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Ok(Self { row, col })
        } else {
            Err(ChessErrors::InvalidSquare((row, col)))
        }
    }

    /// Const constructor for literal coordinates. Panics when out of range.
    pub const fn at(row: u8, col: u8) -> Self {
        assert!(row < BOARD_SIZE && col < BOARD_SIZE, "square out of range");
        Self { row, col }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Row-major index in `0..64`.
    #[inline]
    pub const fn index(self) -> usize {
        self.row as usize * BOARD_SIZE as usize + self.col as usize
    }

    /// The square `d_row`/`d_col` away, if it is still on the board.
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if (0..BOARD_SIZE as i8).contains(&row) && (0..BOARD_SIZE as i8).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Signed (row, column) distance from `self` to `to`.
    #[inline]
    pub fn delta_to(self, to: Square) -> (i8, i8) {
        (
            to.row as i8 - self.row as i8,
            to.col as i8 - self.col as i8,
        )
    }

    /// Same column, mirrored row. Used to relabel a position for the other side.
    #[inline]
    pub const fn flipped(self) -> Square {
        Self {
            row: BOARD_SIZE - 1 - self.row,
            col: self.col,
        }
    }

    /// All 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square { row, col }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = char::from(b'a' + self.col);
        let rank = char::from(b'8' - self.row);
        write!(f, "{file}{rank}")
    }
}

/// A requested move: source, destination, and an optional promotion choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRequest {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PromotionPiece>,
}

impl MoveRequest {
    pub const fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }

    pub const fn with_promotion(mut self, piece: PromotionPiece) -> Self {
        self.promotion = Some(piece);
        self
    }
}
