//! Seeded random games played through the public move entry point.
//!
//! Every ply picks uniformly among the side to move's legal moves and feeds
//! it to `GameState::attempt_move`, so a playout exercises the same
//! validation path a UI would. Pawns reaching the far rank promote to a
//! random piece.

use log::{trace, warn};
use rand::seq::IndexedRandom;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{Color, MoveRequest, PromotionPiece};
use crate::game_state::game_state::GameState;
use crate::game_state::move_outcome::{CheckState, MoveOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayoutOutcome {
    WhiteWinCheckmate,
    BlackWinCheckmate,
    DrawStalemate,
    DrawMaxPlies,
}

impl PlayoutOutcome {
    fn from_terminal(check_state: &CheckState) -> Option<Self> {
        if check_state.in_checkmate {
            Some(match check_state.side_to_move {
                Color::White => PlayoutOutcome::BlackWinCheckmate,
                Color::Black => PlayoutOutcome::WhiteWinCheckmate,
            })
        } else if check_state.in_stalemate {
            Some(PlayoutOutcome::DrawStalemate)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlayoutConfig {
    pub max_plies: u16,
    pub seed: u64,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        Self {
            max_plies: 300,
            seed: 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlayoutResult {
    pub outcome: PlayoutOutcome,
    pub final_state: GameState,
    /// Coordinate notation of every applied move, in order.
    pub played_moves: Vec<String>,
}

/// Pick one legal move at random and attempt it.
///
/// Returns `Ok(None)` when the side to move has no legal move.
pub fn play_random_move<R: Rng + ?Sized>(
    state: &mut GameState,
    rng: &mut R,
) -> Result<Option<MoveOutcome>, ChessErrors> {
    let moves = state.legal_moves();
    let Some(chosen) = moves.choose(rng) else {
        return Ok(None);
    };

    let mut request = MoveRequest::new(chosen.from, chosen.to);
    if chosen.reaches_promotion_rank() {
        if let Some(piece) = PromotionPiece::ALL.choose(rng) {
            request = request.with_promotion(*piece);
        }
    }
    trace!("random move {}{}", request.from, request.to);

    state.attempt_move(request).map(Some)
}

/// Play a random game from the initial position.
pub fn play_random_game(config: &PlayoutConfig) -> Result<PlayoutResult, ChessErrors> {
    play_random_game_from(GameState::new_game(), config)
}

/// Play a random game from a caller-provided position.
pub fn play_random_game_from(
    mut state: GameState,
    config: &PlayoutConfig,
) -> Result<PlayoutResult, ChessErrors> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut played_moves = Vec::<String>::new();

    if let Some(outcome) = PlayoutOutcome::from_terminal(&state.check_state()?) {
        return Ok(PlayoutResult {
            outcome,
            final_state: state,
            played_moves,
        });
    }

    for ply in 0..config.max_plies {
        match play_random_move(&mut state, &mut rng)? {
            Some(MoveOutcome::Applied {
                record,
                check_state,
            }) => {
                played_moves.push(record.coordinate_notation());
                if let Some(outcome) = PlayoutOutcome::from_terminal(&check_state) {
                    trace!("playout seed={} ended at ply {ply}: {outcome:?}", config.seed);
                    return Ok(PlayoutResult {
                        outcome,
                        final_state: state,
                        played_moves,
                    });
                }
            }
            Some(other) => {
                warn!("generated move was not applied at ply {ply}: {other:?}");
            }
            None => {
                let outcome = PlayoutOutcome::from_terminal(&state.check_state()?)
                    .unwrap_or(PlayoutOutcome::DrawStalemate);
                return Ok(PlayoutResult {
                    outcome,
                    final_state: state,
                    played_moves,
                });
            }
        }
    }

    Ok(PlayoutResult {
        outcome: PlayoutOutcome::DrawMaxPlies,
        final_state: state,
        played_moves,
    })
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::{
        play_random_game, play_random_game_from, play_random_move, PlayoutConfig, PlayoutOutcome,
    };
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, MoveRequest, Piece, PieceKind, Square};
    use crate::game_state::game_state::GameState;
    use crate::game_state::move_outcome::MoveOutcome;
    use crate::game_state::move_record::MoveKind;

    fn place(board: &mut Board, row: u8, col: u8, kind: PieceKind, color: Color) {
        board
            .place(Square::at(row, col), Piece::new(kind, color))
            .expect("place");
    }

    #[test]
    fn same_seed_replays_the_same_game() {
        let config = PlayoutConfig {
            max_plies: 60,
            seed: 17,
        };
        let first = play_random_game(&config).expect("playout");
        let second = play_random_game(&config).expect("playout");
        assert_eq!(first.played_moves, second.played_moves);
        assert_eq!(first.outcome, second.outcome);
        assert_eq!(first.final_state.history().len(), first.played_moves.len());
    }

    #[test]
    fn zero_plies_stops_immediately() {
        let config = PlayoutConfig {
            max_plies: 0,
            seed: 1,
        };
        let result = play_random_game(&config).expect("playout");
        assert_eq!(result.outcome, PlayoutOutcome::DrawMaxPlies);
        assert!(result.played_moves.is_empty());
    }

    #[test]
    fn terminal_start_positions_are_reported() {
        let mut board = Board::empty();
        place(&mut board, 0, 7, PieceKind::King, Color::Black);
        place(&mut board, 2, 6, PieceKind::Queen, Color::White);
        place(&mut board, 7, 0, PieceKind::King, Color::White);
        let stalemate = GameState::with_board(board.clone(), Color::Black);
        let result = play_random_game_from(stalemate, &PlayoutConfig::default()).expect("playout");
        assert_eq!(result.outcome, PlayoutOutcome::DrawStalemate);

        // Queen to g7, protected by a king on f6.
        board.remove(Square::at(2, 6));
        board.remove(Square::at(7, 0));
        place(&mut board, 1, 6, PieceKind::Queen, Color::White);
        place(&mut board, 2, 5, PieceKind::King, Color::White);
        let mate = GameState::with_board(board, Color::Black);
        let result = play_random_game_from(mate, &PlayoutConfig::default()).expect("playout");
        assert_eq!(result.outcome, PlayoutOutcome::WhiteWinCheckmate);
        assert!(result.played_moves.is_empty());
    }

    #[test]
    fn en_passant_target_lives_for_one_ply_only() {
        for seed in 0..6u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut game = GameState::new_game();
            for _ in 0..120 {
                let Some(outcome) = play_random_move(&mut game, &mut rng).expect("kings present")
                else {
                    break;
                };
                let MoveOutcome::Applied {
                    record,
                    check_state,
                } = outcome
                else {
                    panic!("generated move was refused: {outcome:?}");
                };

                if let Some(target) = game.en_passant_target() {
                    assert_eq!(record.kind, MoveKind::DoublePawnPush);
                    assert_eq!(target.col(), record.from.col());
                    assert_eq!(target.row(), (record.from.row() + record.to.row()) / 2);
                }
                if check_state.is_terminal() {
                    break;
                }
            }
        }
    }

    #[test]
    fn refused_attempts_never_touch_the_game() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut game = GameState::new_game();
        for _ in 0..80 {
            let from = Square::at(rng.random_range(0..8), rng.random_range(0..8));
            let to = Square::at(rng.random_range(0..8), rng.random_range(0..8));
            let board = game.board_snapshot();
            let rights = *game.castling_rights();
            let target = game.en_passant_target();
            let side = game.side_to_move();

            let outcome = game
                .attempt_move(MoveRequest::new(from, to))
                .expect("legal play never faults");
            if !outcome.applied() {
                assert_eq!(game.board(), &board);
                assert_eq!(*game.castling_rights(), rights);
                assert_eq!(game.en_passant_target(), target);
                assert_eq!(game.side_to_move(), side);
            }

            match play_random_move(&mut game, &mut rng).expect("kings present") {
                Some(outcome) if outcome.check_state().is_some_and(|s| s.is_terminal()) => break,
                None => break,
                _ => {}
            }
        }
    }
}
