use crate::error::GameError;
use crate::games::SessionRng;
use super::board::Board;
use super::types::{Difficulty, Mark, Position};

const COMPUTER_WIN_SCORE: i8 = 1;
const PLAYER_WIN_SCORE: i8 = -1;
const DRAW_SCORE: i8 = 0;

/// Picks the computer's reply on `board`. The board itself is never modified; the
/// search works on a private copy and undoes every speculative move.
pub fn select_move(
    board: &Board,
    difficulty: Difficulty,
    rng: &mut SessionRng,
) -> Result<Position, GameError> {
    let available_moves = board.available_positions();
    if available_moves.is_empty() {
        return Err(GameError::EmptyMoveRequest);
    }
    if board.has_winner() {
        return Err(GameError::GameOver);
    }

    let mut board = board.clone();
    let position = match difficulty {
        Difficulty::Easy => calculate_random_move(&available_moves, rng),
        Difficulty::Normal => calculate_heuristic_move(&mut board, &available_moves, rng),
        Difficulty::Hard => calculate_minimax_move(&mut board, &available_moves),
    };

    position.ok_or(GameError::EmptyMoveRequest)
}

fn calculate_random_move(available_moves: &[Position], rng: &mut SessionRng) -> Option<Position> {
    rng.pick(available_moves)
}

fn calculate_heuristic_move(
    board: &mut Board,
    available_moves: &[Position],
    rng: &mut SessionRng,
) -> Option<Position> {
    if let Some(pos) = find_winning_move(board, Mark::Computer, available_moves) {
        return Some(pos);
    }

    if let Some(pos) = find_winning_move(board, Mark::Player, available_moves) {
        return Some(pos);
    }

    calculate_random_move(available_moves, rng)
}

fn calculate_minimax_move(board: &mut Board, available_moves: &[Position]) -> Option<Position> {
    if let Some(pos) = find_winning_move(board, Mark::Computer, available_moves) {
        return Some(pos);
    }

    let mut best_move = None;
    let mut best_score = i8::MIN;

    for &pos in available_moves {
        if board.place(pos, Mark::Computer).is_err() {
            continue;
        }
        let score = minimax(board, false);
        board.remove(pos);

        if score > best_score {
            best_score = score;
            best_move = Some(pos);
        }
    }

    best_move
}

/// First position, in ascending order, where `mark` completes a line.
fn find_winning_move(board: &mut Board, mark: Mark, moves: &[Position]) -> Option<Position> {
    for &pos in moves {
        if board.place(pos, mark).is_err() {
            continue;
        }
        let wins = board.check_win(mark);
        board.remove(pos);

        if wins {
            return Some(pos);
        }
    }
    None
}

fn minimax(board: &mut Board, is_maximizing: bool) -> i8 {
    if board.check_win(Mark::Computer) {
        return COMPUTER_WIN_SCORE;
    }
    if board.check_win(Mark::Player) {
        return PLAYER_WIN_SCORE;
    }
    if board.is_draw() {
        return DRAW_SCORE;
    }

    let moves = board.available_positions();

    if is_maximizing {
        let mut max_eval = i8::MIN;
        for pos in moves {
            if board.place(pos, Mark::Computer).is_err() {
                continue;
            }
            let eval = minimax(board, false);
            board.remove(pos);
            max_eval = max_eval.max(eval);
        }
        max_eval
    } else {
        let mut min_eval = i8::MAX;
        for pos in moves {
            if board.place(pos, Mark::Player).is_err() {
                continue;
            }
            let eval = minimax(board, true);
            board.remove(pos);
            min_eval = min_eval.min(eval);
        }
        min_eval
    }
}
