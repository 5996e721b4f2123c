//! Full move-legality pipeline and the exhaustive scan built on it.
//!
//! `check_move` is the validation `GameState::attempt_move` runs after its
//! ownership checks: piece rule, then either castle adjudication or the
//! scratch-board safety check. `legal_moves` and `has_legal_move` repeat that
//! pipeline over every own piece and all 64 destinations, which is how
//! checkmate and stalemate are told apart.

use crate::chess_errors::{ChessErrors, IllegalMoveReason};
use crate::game_state::chess_types::{PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::game_state::move_outcome::CheckState;
use crate::move_generation::legal_move_apply::{is_move_safe, plan_move, PlannedMove};
use crate::move_generation::legal_move_castling::validate_castle;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::moves::king_moves::castle_shift;
use crate::moves::piece_rules::is_geometrically_legal;

/// Validate `from` -> `to` for the piece standing on `from`.
///
/// Does not look at whose turn it is or at friendly destinations; callers
/// filter those first.
pub fn check_move(game_state: &GameState, from: Square, to: Square) -> Result<(), IllegalMoveReason> {
    let board = game_state.board();
    let piece = board
        .piece_at(from)
        .ok_or(IllegalMoveReason::NoPieceAtSource)?;

    if piece.kind == PieceKind::King {
        if let Some(side) = castle_shift(piece.color, from, to) {
            return validate_castle(board, game_state.castling_rights(), piece.color, side)
                .map_err(IllegalMoveReason::IllegalCastle);
        }
    }

    if !is_geometrically_legal(piece, from, to, board, game_state.en_passant_target()) {
        return Err(IllegalMoveReason::IllegalGeometry);
    }
    if !is_move_safe(board, from, to) {
        return Err(IllegalMoveReason::MoveLeavesKingInCheck);
    }
    Ok(())
}

/// Every legal move for the piece on `from`, if it belongs to the side to move.
pub fn legal_moves_from(game_state: &GameState, from: Square) -> Vec<PlannedMove> {
    candidate_moves(game_state, from).collect()
}

/// Every legal move for the side to move.
///
/// A pawn reaching the far rank appears once with `promotion: None`.
pub fn legal_moves(game_state: &GameState) -> Vec<PlannedMove> {
    own_squares(game_state)
        .into_iter()
        .flat_map(|from| candidate_moves(game_state, from))
        .collect()
}

/// Short-circuiting form of `!legal_moves(..).is_empty()`.
pub fn has_legal_move(game_state: &GameState) -> bool {
    own_squares(game_state)
        .into_iter()
        .any(|from| candidate_moves(game_state, from).next().is_some())
}

/// Check, checkmate, and stalemate flags for the side to move.
pub fn evaluate_check_state(game_state: &GameState) -> Result<CheckState, ChessErrors> {
    let side = game_state.side_to_move();
    let board = game_state.board();
    let king_sq = board.king_square(side).ok_or(ChessErrors::KingMissing(side))?;

    let in_check = is_square_attacked(board, king_sq, side);
    let can_move = has_legal_move(game_state);

    Ok(CheckState {
        side_to_move: side,
        in_check,
        in_checkmate: in_check && !can_move,
        in_stalemate: !in_check && !can_move,
    })
}

fn own_squares(game_state: &GameState) -> Vec<Square> {
    game_state
        .board()
        .pieces_of(game_state.side_to_move())
        .map(|(square, _)| square)
        .collect()
}

fn candidate_moves(game_state: &GameState, from: Square) -> impl Iterator<Item = PlannedMove> + '_ {
    let board = game_state.board();
    let mover = board
        .piece_at(from)
        .filter(|piece| piece.color == game_state.side_to_move());

    Square::all()
        .filter(move |_| mover.is_some())
        .filter(move |to| {
            let friendly = mover.is_some_and(|piece| piece.is_friendly_with(board.piece_at(*to)));
            !friendly && check_move(game_state, from, *to).is_ok()
        })
        .filter_map(move |to| plan_move(board, from, to, None))
}

#[cfg(test)]
mod tests {
    use super::{check_move, evaluate_check_state, has_legal_move, legal_moves, legal_moves_from};
    use crate::chess_errors::{CastleFailure, ChessErrors, IllegalMoveReason};
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
    use crate::game_state::game_state::GameState;
    use crate::game_state::move_record::MoveKind;

    fn place(board: &mut Board, row: u8, col: u8, kind: PieceKind, color: Color) {
        board
            .place(Square::at(row, col), Piece::new(kind, color))
            .expect("place");
    }

    #[test]
    fn start_position_has_twenty_moves() {
        let game = GameState::new_game();
        assert_eq!(legal_moves(&game).len(), 20);
        assert!(has_legal_move(&game));
        assert_eq!(legal_moves_from(&game, Square::at(7, 6)).len(), 2);
        // Black pieces are not the side to move.
        assert!(legal_moves_from(&game, Square::at(1, 4)).is_empty());
    }

    #[test]
    fn castles_are_listed_when_available() {
        let mut board = Board::empty();
        place(&mut board, 7, 4, PieceKind::King, Color::White);
        place(&mut board, 7, 7, PieceKind::Rook, Color::White);
        place(&mut board, 0, 0, PieceKind::King, Color::Black);
        let game = GameState::with_board(board, Color::White);
        let castles = legal_moves_from(&game, Square::at(7, 4))
            .into_iter()
            .filter(|mv| matches!(mv.kind, MoveKind::Castle(_)))
            .count();
        assert_eq!(castles, 1);
    }

    #[test]
    fn check_move_reports_castle_failures() {
        let mut board = Board::empty();
        place(&mut board, 7, 4, PieceKind::King, Color::White);
        place(&mut board, 7, 0, PieceKind::Rook, Color::White);
        place(&mut board, 0, 3, PieceKind::Rook, Color::Black);
        place(&mut board, 0, 7, PieceKind::King, Color::Black);
        let game = GameState::with_board(board, Color::White);
        assert_eq!(
            check_move(&game, Square::at(7, 4), Square::at(7, 2)),
            Err(IllegalMoveReason::IllegalCastle(CastleFailure::PassesThroughCheck))
        );
        assert_eq!(
            check_move(&game, Square::at(7, 4), Square::at(7, 6)),
            Err(IllegalMoveReason::IllegalCastle(CastleFailure::RookMissing))
        );
        assert_eq!(
            check_move(&game, Square::at(7, 4), Square::at(6, 3)),
            Err(IllegalMoveReason::MoveLeavesKingInCheck)
        );
        assert_eq!(
            check_move(&game, Square::at(7, 4), Square::at(5, 4)),
            Err(IllegalMoveReason::IllegalGeometry)
        );
    }

    #[test]
    fn back_rank_mate_is_checkmate() {
        let mut board = Board::empty();
        place(&mut board, 0, 6, PieceKind::King, Color::Black);
        place(&mut board, 1, 5, PieceKind::Pawn, Color::Black);
        place(&mut board, 1, 6, PieceKind::Pawn, Color::Black);
        place(&mut board, 1, 7, PieceKind::Pawn, Color::Black);
        place(&mut board, 0, 0, PieceKind::Rook, Color::White);
        place(&mut board, 7, 4, PieceKind::King, Color::White);
        let game = GameState::with_board(board, Color::Black);
        let state = evaluate_check_state(&game).expect("both kings present");
        assert!(state.in_check);
        assert!(state.in_checkmate);
        assert!(!state.in_stalemate);
    }

    #[test]
    fn check_with_an_escape_is_not_mate() {
        let mut board = Board::empty();
        place(&mut board, 0, 6, PieceKind::King, Color::Black);
        place(&mut board, 1, 5, PieceKind::Pawn, Color::Black);
        place(&mut board, 1, 7, PieceKind::Pawn, Color::Black);
        place(&mut board, 0, 0, PieceKind::Rook, Color::White);
        place(&mut board, 7, 4, PieceKind::King, Color::White);
        let game = GameState::with_board(board, Color::Black);
        let state = evaluate_check_state(&game).expect("both kings present");
        assert!(state.in_check);
        assert!(!state.in_checkmate);
    }

    #[test]
    fn cornered_king_without_moves_is_stalemate() {
        let mut board = Board::empty();
        place(&mut board, 0, 7, PieceKind::King, Color::Black);
        place(&mut board, 2, 6, PieceKind::Queen, Color::White);
        place(&mut board, 7, 0, PieceKind::King, Color::White);
        let game = GameState::with_board(board, Color::Black);
        let state = evaluate_check_state(&game).expect("both kings present");
        assert!(!state.in_check);
        assert!(!state.in_checkmate);
        assert!(state.in_stalemate);
        assert!(legal_moves(&game).is_empty());
    }

    #[test]
    fn missing_king_is_a_fault() {
        let mut board = Board::empty();
        place(&mut board, 7, 4, PieceKind::King, Color::White);
        let game = GameState::with_board(board, Color::Black);
        assert_eq!(
            evaluate_check_state(&game),
            Err(ChessErrors::KingMissing(Color::Black))
        );
    }
}
