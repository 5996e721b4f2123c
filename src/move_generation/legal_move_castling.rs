use crate::chess_errors::CastleFailure;
use crate::game_state::board::Board;
use crate::game_state::castling_rights::{CastleSide, CastlingRights};
use crate::game_state::chess_rules::KING_START_COL;
use crate::game_state::chess_types::{Color, Square};
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::moves::king_moves::castle_path_failure;

/// Full castling adjudication for a `color` king on its home square.
///
/// Checks, in order: history flags, rook presence and an empty path, then
/// that the king's start, transit, and landing squares are not attacked.
pub fn validate_castle(
    board: &Board,
    rights: &CastlingRights,
    color: Color,
    side: CastleSide,
) -> Result<(), CastleFailure> {
    let own = rights.side(color);
    if own.king_moved {
        return Err(CastleFailure::KingAlreadyMoved);
    }
    if own.rook_moved(side) {
        return Err(CastleFailure::RookAlreadyMoved);
    }
    if let Some(failure) = castle_path_failure(color, side, board) {
        return Err(failure);
    }

    let rank = color.home_rank();
    let checks = [
        (KING_START_COL, CastleFailure::KingInCheck),
        (side.transit_col(), CastleFailure::PassesThroughCheck),
        (side.king_target_col(), CastleFailure::LandsInCheck),
    ];
    for (col, failure) in checks {
        if is_square_attacked(board, Square::at(rank, col), color) {
            return Err(failure);
        }
    }
    Ok(())
}
