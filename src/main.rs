use std::io::{self, BufRead, Write};

use chess_referee::game_state::game_state::GameState;
use chess_referee::game_state::move_outcome::{GameStatus, MoveOutcome};
use chess_referee::utils::algebraic::{format_coordinate_move, parse_coordinate_move};
use chess_referee::utils::render_game_state::render_game_state;

enum Flow {
    Continue,
    Quit,
}

fn main() -> io::Result<()> {
    env_logger::init();

    let mut game = GameState::new_game();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    writeln!(stdout, "{}", render_game_state(&game))?;
    for line in stdin.lock().lines() {
        let line = line?;
        let (reply, flow) = handle_line(&mut game, line.trim());
        if !reply.is_empty() {
            writeln!(stdout, "{reply}")?;
        }
        stdout.flush()?;
        if let Flow::Quit = flow {
            break;
        }
    }
    Ok(())
}

fn handle_line(game: &mut GameState, line: &str) -> (String, Flow) {
    match line {
        "" => (String::new(), Flow::Continue),
        "quit" | "exit" => (String::new(), Flow::Quit),
        "show" => (render_game_state(game), Flow::Continue),
        "reset" => {
            game.reset_game();
            (render_game_state(game), Flow::Continue)
        }
        "moves" => {
            let moves: Vec<String> = game
                .legal_moves()
                .iter()
                .map(|mv| format_coordinate_move(mv.from, mv.to, None))
                .collect();
            (moves.join(" "), Flow::Continue)
        }
        text => (play(game, text), Flow::Continue),
    }
}

fn play(game: &mut GameState, text: &str) -> String {
    let request = match parse_coordinate_move(text) {
        Ok(request) => request,
        Err(e) => return format!("error: {e}"),
    };

    match game.attempt_move(request) {
        Ok(MoveOutcome::Applied { check_state, .. }) => {
            let status = match check_state.status() {
                GameStatus::Ongoing => format!("{} to move", check_state.side_to_move),
                GameStatus::Check => format!("{} to move, in check", check_state.side_to_move),
                GameStatus::Checkmate { winner } => format!("checkmate, {winner} wins"),
                GameStatus::Stalemate => "stalemate".to_owned(),
            };
            format!("ok {text}: {status}")
        }
        Ok(MoveOutcome::Reselected(square)) => format!("illegal: {square} holds your own piece"),
        Ok(MoveOutcome::Rejected(reason)) => format!("illegal: {reason}"),
        Err(e) => format!("error: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::{handle_line, Flow};
    use chess_referee::game_state::game_state::GameState;

    #[test]
    fn lines_drive_the_game() {
        let mut game = GameState::new_game();
        let (reply, _) = handle_line(&mut game, "e2e8");
        assert_eq!(reply, "illegal: the piece cannot move there");
        let (reply, _) = handle_line(&mut game, "e2e4");
        assert_eq!(reply, "ok e2e4: black to move");
        let (reply, _) = handle_line(&mut game, "e9e1");
        assert!(reply.starts_with("error: "));
        assert!(matches!(handle_line(&mut game, "quit").1, Flow::Quit));
    }
}
