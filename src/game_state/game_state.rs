//! Authoritative game state and the move-attempt entry point.
//!
//! `GameState` owns the board, side to move, castling rights, en-passant
//! target, and move history. All mutation goes through `attempt_move` and
//! `reset_game`; every other method is a read-only query.
//!
//! A move attempt runs, in order:
//! 1. fault checks (both kings present, no king capture),
//! 2. ownership (`NoPieceAtSource`, `NotYourTurn`), with a friendly
//!    destination reported as a reselection,
//! 3. the legality pipeline in `legal_move_generator::check_move`,
//! 4. the promotion gate (`PromotionChoicePending` until a piece is given),
//! 5. application, bookkeeping, turn flip, and terminal-state evaluation.
//!
//! Anything refused in steps 1-4 leaves the state exactly as it was.

use chrono::Utc;
use log::{debug, info};

use crate::chess_errors::{ChessErrors, IllegalMoveReason};
use crate::game_state::board::Board;
use crate::game_state::castling_rights::CastlingRights;
use crate::game_state::chess_types::{Color, MoveRequest, PieceKind, Square};
use crate::game_state::move_outcome::{CheckState, MoveOutcome};
use crate::game_state::move_record::{MoveKind, MoveRecord};
use crate::move_generation::legal_move_apply::{apply_to_board, plan_move, PlannedMove};
use crate::move_generation::legal_move_checks::{attackers_to_square, is_square_attacked};
use crate::move_generation::legal_move_generator::{
    check_move, evaluate_check_state, legal_moves, legal_moves_from,
};

#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    side_to_move: Color,
    castling_rights: CastlingRights,
    en_passant_target: Option<Square>,
    history: Vec<MoveRecord>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard initial position, white to move.
    pub fn new_game() -> Self {
        Self::with_board(Board::standard(), Color::White)
    }

    /// A hand-built position with fresh castling rights and no en-passant
    /// target. The board is taken as given; reachability is not checked.
    pub fn with_board(board: Board, side_to_move: Color) -> Self {
        Self {
            board,
            side_to_move,
            castling_rights: CastlingRights::new(),
            en_passant_target: None,
            history: Vec::new(),
        }
    }

    pub fn with_castling_rights(mut self, rights: CastlingRights) -> Self {
        self.castling_rights = rights;
        self
    }

    pub fn with_en_passant_target(mut self, target: Option<Square>) -> Self {
        self.en_passant_target = target;
        self
    }

    /// Back to the initial position: rights, en-passant target, and history
    /// cleared, white to move.
    pub fn reset_game(&mut self) {
        *self = Self::new_game();
        debug!("game reset to the initial position");
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Owned copy of the board; later moves do not affect it.
    pub fn board_snapshot(&self) -> Board {
        self.board.clone()
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling_rights(&self) -> &CastlingRights {
        &self.castling_rights
    }

    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history.last()
    }

    /// Whether the opponent of `for_color` attacks `square`.
    pub fn is_square_attacked(&self, square: Square, for_color: Color) -> bool {
        is_square_attacked(&self.board, square, for_color)
    }

    /// Squares of the pieces currently giving check to the side to move.
    pub fn checkers(&self) -> Vec<Square> {
        match self.board.king_square(self.side_to_move) {
            Some(king_sq) => attackers_to_square(&self.board, king_sq, self.side_to_move)
                .into_iter()
                .map(|(square, _)| square)
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn check_state(&self) -> Result<CheckState, ChessErrors> {
        evaluate_check_state(self)
    }

    pub fn legal_moves(&self) -> Vec<PlannedMove> {
        legal_moves(self)
    }

    /// Destinations the piece on `from` may legally move to. Empty when the
    /// square is empty or holds a piece of the side not to move.
    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        legal_moves_from(self, from)
            .into_iter()
            .map(|mv| mv.to)
            .collect()
    }

    /// Try to play `request` for the side to move.
    ///
    /// Rule violations come back as `Ok(MoveOutcome::Rejected(..))`; `Err` is
    /// reserved for broken positions: a missing king, or a hand-built
    /// position whose side not to move is in check and can be captured.
    pub fn attempt_move(&mut self, request: MoveRequest) -> Result<MoveOutcome, ChessErrors> {
        let MoveRequest {
            from,
            to,
            promotion,
        } = request;

        for color in [Color::White, Color::Black] {
            if self.board.king_square(color).is_none() {
                return Err(ChessErrors::KingMissing(color));
            }
        }

        let Some(piece) = self.board.piece_at(from) else {
            return Ok(self.reject(request, IllegalMoveReason::NoPieceAtSource));
        };
        if piece.color != self.side_to_move {
            return Ok(self.reject(request, IllegalMoveReason::NotYourTurn));
        }

        let target = self.board.piece_at(to);
        if piece.is_friendly_with(target) {
            debug!("reselect {to} instead of moving {from}");
            return Ok(MoveOutcome::Reselected(to));
        }

        if let Err(reason) = check_move(self, from, to) {
            return Ok(self.reject(request, reason));
        }
        // Legal only when the side not to move was left in check.
        if target.is_some_and(|victim| victim.kind == PieceKind::King) {
            return Err(ChessErrors::KingCaptureAttempted(to));
        }

        let Some(planned) = plan_move(&self.board, from, to, promotion) else {
            return Ok(self.reject(request, IllegalMoveReason::NoPieceAtSource));
        };
        if planned.reaches_promotion_rank() && planned.promotion.is_none() {
            return Ok(self.reject(request, IllegalMoveReason::PromotionChoicePending));
        }

        let record = self.apply(planned);
        let check_state = evaluate_check_state(self)?;
        debug!(
            "applied {} ({:?}); {} to move",
            record.coordinate_notation(),
            record.kind,
            check_state.side_to_move
        );
        if check_state.in_checkmate {
            info!("checkmate: {} wins", check_state.side_to_move.opposite());
        } else if check_state.in_stalemate {
            info!("stalemate: {} has no legal move", check_state.side_to_move);
        }

        Ok(MoveOutcome::Applied {
            record,
            check_state,
        })
    }

    fn reject(&self, request: MoveRequest, reason: IllegalMoveReason) -> MoveOutcome {
        debug!(
            "rejected {}{} for {}: {reason}",
            request.from, request.to, self.side_to_move
        );
        MoveOutcome::Rejected(reason)
    }

    fn apply(&mut self, planned: PlannedMove) -> MoveRecord {
        let captured = apply_to_board(&mut self.board, &planned);

        self.castling_rights.record_move(planned.piece, planned.from);
        if let Some(victim) = captured {
            self.castling_rights.record_capture(victim, planned.to);
        }

        self.en_passant_target = match planned.kind {
            MoveKind::DoublePawnPush => self.capturable_skip_square(&planned),
            _ => None,
        };
        self.side_to_move = self.side_to_move.opposite();

        let record = MoveRecord {
            from: planned.from,
            to: planned.to,
            piece: planned.piece,
            captured,
            kind: planned.kind,
            promotion: planned.promotion,
            applied_at: Utc::now(),
        };
        self.history.push(record.clone());
        record
    }

    /// Skipped square of a double push, but only when an enemy pawn stands
    /// beside the landing square to use it.
    fn capturable_skip_square(&self, planned: &PlannedMove) -> Option<Square> {
        let color = planned.piece.color;
        let has_capturer = [-1, 1].into_iter().any(|d_col| {
            planned.to.offset(0, d_col).is_some_and(|square| {
                self.board.piece_at(square).is_some_and(|piece| {
                    piece.kind == PieceKind::Pawn && piece.color != color
                })
            })
        });
        if has_capturer {
            planned.from.offset(color.pawn_direction(), 0)
        } else {
            None
        }
    }
}
