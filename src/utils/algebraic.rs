//! Conversions between board squares and coordinate notation.
//!
//! Squares print as file letter plus rank digit (`e4`). Moves print as two
//! squares with an optional promotion letter (`e2e4`, `e7e8q`).

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::{MoveRequest, PromotionPiece, Square};

/// Convert coordinate notation (for example: "e4") to a square.
#[inline]
pub fn algebraic_to_square(square: &str) -> Result<Square, ChessErrors> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    let col = file - b'a';
    let row = BOARD_SIZE - (rank - b'0');
    Square::new(row, col)
}

#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    square.to_string()
}

pub fn promotion_to_char(piece: PromotionPiece) -> char {
    match piece {
        PromotionPiece::Queen => 'q',
        PromotionPiece::Rook => 'r',
        PromotionPiece::Bishop => 'b',
        PromotionPiece::Knight => 'n',
    }
}

pub fn char_to_promotion(ch: char) -> Option<PromotionPiece> {
    match ch.to_ascii_lowercase() {
        'q' => Some(PromotionPiece::Queen),
        'r' => Some(PromotionPiece::Rook),
        'b' => Some(PromotionPiece::Bishop),
        'n' => Some(PromotionPiece::Knight),
        _ => None,
    }
}

/// Format a move as `e2e4`, or `e7e8q` when a promotion piece is given.
pub fn format_coordinate_move(
    from: Square,
    to: Square,
    promotion: Option<PromotionPiece>,
) -> String {
    let mut out = format!("{from}{to}");
    if let Some(piece) = promotion {
        out.push(promotion_to_char(piece));
    }
    out
}

/// Parse `e2e4` / `e7e8q` into a move request.
pub fn parse_coordinate_move(text: &str) -> Result<MoveRequest, ChessErrors> {
    let text = text.trim();
    if !text.is_ascii() || !(4..=5).contains(&text.len()) {
        return Err(ChessErrors::InvalidAlgebraicString(text.to_owned()));
    }

    let from = algebraic_to_square(&text[0..2])?;
    let to = algebraic_to_square(&text[2..4])?;
    let request = MoveRequest::new(from, to);

    match text[4..].chars().next() {
        None => Ok(request),
        Some(ch) => char_to_promotion(ch)
            .map(|piece| request.with_promotion(piece))
            .ok_or_else(|| ChessErrors::InvalidAlgebraicString(text.to_owned())),
    }
}
