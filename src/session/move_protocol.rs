//! Click-driven move protocol over a caller-owned `GameState`.
//!
//! A UI feeds square selections and promotion choices in; the protocol
//! tracks the pending selection and turns a completed pair into a single
//! `GameState::attempt_move` call.
//!
//! ```text
//! AwaitingSelection --own piece--> AwaitingDestination
//! AwaitingDestination --own piece--> AwaitingDestination (reselect)
//! AwaitingDestination --pawn to far rank--> AwaitingPromotionChoice
//! AwaitingDestination --applied or rejected--> AwaitingSelection
//! AwaitingPromotionChoice --choice--> AwaitingSelection
//! ```

use log::debug;

use crate::chess_errors::{ChessErrors, IllegalMoveReason};
use crate::game_state::chess_types::{MoveRequest, PromotionPiece, Square};
use crate::game_state::game_state::GameState;
use crate::game_state::move_outcome::{CheckState, MoveOutcome};
use crate::game_state::move_record::MoveRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProtocolState {
    #[default]
    AwaitingSelection,
    AwaitingDestination {
        from: Square,
    },
    AwaitingPromotionChoice {
        from: Square,
        to: Square,
    },
}

/// What a single protocol input did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProtocolEvent {
    /// A piece of the side to move is now selected.
    Selected(Square),
    /// The input had no effect in the current state.
    Ignored,
    /// A different own piece replaced the selection.
    Reselected(Square),
    /// The pawn move is legal but waits for `choose_promotion`.
    PromotionRequired { from: Square, to: Square },
    Moved {
        record: MoveRecord,
        check_state: CheckState,
    },
    /// The attempt was refused and the selection cleared.
    Rejected(IllegalMoveReason),
}

#[derive(Debug, Clone, Default)]
pub struct MoveProtocol {
    state: ProtocolState,
}

impl MoveProtocol {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn state(&self) -> ProtocolState {
        self.state
    }

    /// Currently selected square, if any.
    pub fn selection(&self) -> Option<Square> {
        match self.state {
            ProtocolState::AwaitingSelection => None,
            ProtocolState::AwaitingDestination { from }
            | ProtocolState::AwaitingPromotionChoice { from, .. } => Some(from),
        }
    }

    /// Legal destinations of the selected piece, for highlighting.
    pub fn highlighted(&self, game: &GameState) -> Vec<Square> {
        match self.state {
            ProtocolState::AwaitingDestination { from } => game.legal_destinations(from),
            _ => Vec::new(),
        }
    }

    /// Drop any selection or pending promotion.
    pub fn cancel(&mut self) {
        self.state = ProtocolState::AwaitingSelection;
    }

    /// Feed one clicked square.
    ///
    /// While a promotion choice is pending, clicks are refused with
    /// `PromotionChoicePending` and the pending move is kept.
    pub fn select_square(
        &mut self,
        game: &mut GameState,
        square: Square,
    ) -> Result<ProtocolEvent, ChessErrors> {
        match self.state {
            ProtocolState::AwaitingSelection => {
                let own = game
                    .board()
                    .piece_at(square)
                    .is_some_and(|piece| piece.color == game.side_to_move());
                if own {
                    self.state = ProtocolState::AwaitingDestination { from: square };
                    Ok(ProtocolEvent::Selected(square))
                } else {
                    Ok(ProtocolEvent::Ignored)
                }
            }
            ProtocolState::AwaitingDestination { from } => {
                self.submit(game, MoveRequest::new(from, square))
            }
            ProtocolState::AwaitingPromotionChoice { .. } => Ok(ProtocolEvent::Rejected(
                IllegalMoveReason::PromotionChoicePending,
            )),
        }
    }

    /// Complete a pending promotion. Ignored in any other state.
    pub fn choose_promotion(
        &mut self,
        game: &mut GameState,
        piece: PromotionPiece,
    ) -> Result<ProtocolEvent, ChessErrors> {
        match self.state {
            ProtocolState::AwaitingPromotionChoice { from, to } => {
                self.submit(game, MoveRequest::new(from, to).with_promotion(piece))
            }
            _ => Ok(ProtocolEvent::Ignored),
        }
    }

    fn submit(
        &mut self,
        game: &mut GameState,
        request: MoveRequest,
    ) -> Result<ProtocolEvent, ChessErrors> {
        self.state = ProtocolState::AwaitingSelection;

        let event = match game.attempt_move(request)? {
            MoveOutcome::Applied {
                record,
                check_state,
            } => ProtocolEvent::Moved {
                record,
                check_state,
            },
            MoveOutcome::Reselected(square) => {
                self.state = ProtocolState::AwaitingDestination { from: square };
                ProtocolEvent::Reselected(square)
            }
            MoveOutcome::Rejected(IllegalMoveReason::PromotionChoicePending) => {
                self.state = ProtocolState::AwaitingPromotionChoice {
                    from: request.from,
                    to: request.to,
                };
                ProtocolEvent::PromotionRequired {
                    from: request.from,
                    to: request.to,
                }
            }
            MoveOutcome::Rejected(reason) => ProtocolEvent::Rejected(reason),
        };
        debug!("protocol now {:?}", self.state);
        Ok(event)
    }
}
