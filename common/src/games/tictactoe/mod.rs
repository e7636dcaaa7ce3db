mod board;
mod bot_controller;
mod display;
mod game_state;
mod types;

pub use board::Board;
pub use bot_controller::select_move;
pub use display::{BoardDisplay, StatusMessage};
pub use game_state::TicTacToeGameState;
pub use types::{
    BOARD_SIDE, CELL_COUNT, Difficulty, GameStatus, Mark, Position, Turn, WINNING_LINES,
    WinningLine,
};
