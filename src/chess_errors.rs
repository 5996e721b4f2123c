//! Errors and rejection reasons used throughout the referee.
//!
//! Two families live here:
//! - `IllegalMoveReason` (with its `CastleFailure` detail) describes a move
//!   attempt that the rules refuse. These are ordinary, user-facing outcomes
//!   carried inside `MoveOutcome::Rejected`; callers present them and carry on.
//! - `ChessErrors` describes bad input or a broken game invariant (a missing
//!   king, an out-of-range coordinate). These travel in the `Err` arm of a
//!   `Result` and indicate a caller bug rather than a bad move.
//!
//! Neither family ever leaves the authoritative game state half-modified: a
//! rejection or an error is reported before any mutation takes place.

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::{Color, Square};

/// Unified fault type for the referee.
///
/// When matching on `ChessErrors`:
/// - Treat `InvalidSquare` and `InvalidAlgebraicString` as input errors
///   suitable for showing to an end user.
/// - Treat `TooManyKings` as a rejected board setup.
/// - Treat `KingMissing` and `KingCaptureAttempted` as corrupted game state;
///   the position was built by hand and is not one legal play can reach.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// Row or column outside `0..=7`.
    ///
    /// Payload: (row, column) as given.
    InvalidSquare((u8, u8)),

    /// A coordinate or move string could not be parsed.
    ///
    /// Payload: the original string.
    InvalidAlgebraicString(String),

    /// Tried to place a second king of the same color.
    TooManyKings(Color),

    /// The board holds no king for the given color.
    KingMissing(Color),

    /// A legal move would capture the enemy king. Only reachable from a
    /// hand-built position where the side not to move is already in check.
    KingCaptureAttempted(Square),
}

impl fmt::Display for ChessErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessErrors::InvalidSquare((row, col)) => {
                write!(f, "square ({row}, {col}) is off the board")
            }
            ChessErrors::InvalidAlgebraicString(text) => {
                write!(f, "could not parse coordinate string: {text}")
            }
            ChessErrors::TooManyKings(color) => {
                write!(f, "board already holds a {color} king")
            }
            ChessErrors::KingMissing(color) => write!(f, "board has no {color} king"),
            ChessErrors::KingCaptureAttempted(square) => {
                write!(f, "move would capture the king on {square}")
            }
        }
    }
}

impl Error for ChessErrors {}

/// Which castling precondition failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastleFailure {
    KingAlreadyMoved,
    RookAlreadyMoved,
    /// No rook of the mover's color stands on the expected corner.
    RookMissing,
    PathObstructed,
    KingInCheck,
    PassesThroughCheck,
    LandsInCheck,
}

impl fmt::Display for CastleFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            CastleFailure::KingAlreadyMoved => "the king has already moved",
            CastleFailure::RookAlreadyMoved => "that rook has already moved",
            CastleFailure::RookMissing => "there is no rook on the corner",
            CastleFailure::PathObstructed => "a piece stands between king and rook",
            CastleFailure::KingInCheck => "the king is in check",
            CastleFailure::PassesThroughCheck => "the king would cross an attacked square",
            CastleFailure::LandsInCheck => "the king would land on an attacked square",
        };
        f.write_str(text)
    }
}

/// Why a move attempt was refused. Every variant is recoverable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMoveReason {
    NoPieceAtSource,
    NotYourTurn,
    /// The piece cannot reach the destination by its movement pattern.
    IllegalGeometry,
    IllegalCastle(CastleFailure),
    MoveLeavesKingInCheck,
    /// A pawn would reach the far rank but no promotion piece was supplied.
    PromotionChoicePending,
}

impl fmt::Display for IllegalMoveReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalMoveReason::NoPieceAtSource => write!(f, "no piece on the source square"),
            IllegalMoveReason::NotYourTurn => write!(f, "that piece belongs to the other side"),
            IllegalMoveReason::IllegalGeometry => write!(f, "the piece cannot move there"),
            IllegalMoveReason::IllegalCastle(failure) => write!(f, "cannot castle: {failure}"),
            IllegalMoveReason::MoveLeavesKingInCheck => {
                write!(f, "the move would leave the king in check")
            }
            IllegalMoveReason::PromotionChoicePending => {
                write!(f, "choose a piece to promote to")
            }
        }
    }
}

impl Error for IllegalMoveReason {}
