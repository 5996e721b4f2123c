//! What a move attempt reports back to the caller.

use crate::chess_errors::IllegalMoveReason;
use crate::game_state::chess_types::{Color, Square};
use crate::game_state::move_record::MoveRecord;

/// Check status of the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckState {
    pub side_to_move: Color,
    pub in_check: bool,
    pub in_checkmate: bool,
    pub in_stalemate: bool,
}

impl CheckState {
    pub fn status(&self) -> GameStatus {
        if self.in_checkmate {
            GameStatus::Checkmate {
                winner: self.side_to_move.opposite(),
            }
        } else if self.in_stalemate {
            GameStatus::Stalemate
        } else if self.in_check {
            GameStatus::Check
        } else {
            GameStatus::Ongoing
        }
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.in_checkmate || self.in_stalemate
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate { winner: Color },
    Stalemate,
}

/// Result of `GameState::attempt_move`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was made; `check_state` describes the new side to move.
    Applied {
        record: MoveRecord,
        check_state: CheckState,
    },
    /// The destination holds one of the mover's own pieces; the caller should
    /// make it the active selection. Nothing changed.
    Reselected(Square),
    /// The move was refused. Nothing changed.
    Rejected(IllegalMoveReason),
}

impl MoveOutcome {
    #[inline]
    pub fn applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied { .. })
    }

    pub fn reason(&self) -> Option<IllegalMoveReason> {
        match self {
            MoveOutcome::Rejected(reason) => Some(*reason),
            _ => None,
        }
    }

    pub fn check_state(&self) -> Option<CheckState> {
        match self {
            MoveOutcome::Applied { check_state, .. } => Some(*check_state),
            _ => None,
        }
    }

    pub fn record(&self) -> Option<&MoveRecord> {
        match self {
            MoveOutcome::Applied { record, .. } => Some(record),
            _ => None,
        }
    }
}
