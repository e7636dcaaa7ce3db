use std::io::Write;
use std::time::Duration;

use common::GameError;
use common::games::tictactoe::{
    BOARD_SIDE, Board, BoardDisplay, Mark, Position, StatusMessage, WinningLine,
};

use crate::config::DisplayConfig;

/// Draws the board as text. Empty cells show their index so the player knows what to type.
pub struct TerminalDisplay<W: Write> {
    out: W,
    player_symbol: char,
    computer_symbol: char,
    computer_move_delay: Duration,
    interactable: bool,
}

impl<W: Write> TerminalDisplay<W> {
    pub fn new(out: W, config: &DisplayConfig) -> Self {
        Self {
            out,
            player_symbol: config.player_symbol,
            computer_symbol: config.computer_symbol,
            computer_move_delay: Duration::from_millis(config.computer_move_delay_ms),
            interactable: false,
        }
    }

    pub fn is_interactable(&self) -> bool {
        self.interactable
    }

    /// Pause before the computer's reply is shown, so it reads as a separate turn.
    pub fn computer_move_delay(&self) -> Duration {
        self.computer_move_delay
    }

    pub fn show_error(&mut self, error: &GameError) {
        let _ = writeln!(self.out, "! {}", error);
    }

    pub fn show_message(&mut self, message: &str) {
        let _ = writeln!(self.out, "{}", message);
    }

    pub fn show_help(&mut self) {
        let _ = writeln!(
            self.out,
            "Commands:\n  0-8               place your mark on that cell\n  \
             difficulty <lvl>  switch to easy, normal or hard (restarts the game)\n  \
             easy|normal|hard  same as above\n  \
             reset             start a new game\n  \
             help              show this text\n  \
             quit              leave"
        );
    }

    pub fn prompt(&mut self) {
        let _ = write!(self.out, "> ");
        let _ = self.out.flush();
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn cell_text(&self, board: &Board, pos: Position, highlight: Option<WinningLine>) -> String {
        let symbol = match board.get(pos) {
            Mark::Player => self.player_symbol.to_string(),
            Mark::Computer => self.computer_symbol.to_string(),
            Mark::Empty => pos.to_string(),
        };
        if highlight.is_some_and(|line| line.contains(pos)) {
            format!("[{}]", symbol)
        } else {
            format!(" {} ", symbol)
        }
    }
}

impl<W: Write> BoardDisplay for TerminalDisplay<W> {
    fn render(&mut self, board: &Board) {
        let highlight = board
            .winning_line(Mark::Player)
            .or_else(|| board.winning_line(Mark::Computer));

        let mut lines = Vec::with_capacity(BOARD_SIDE * 2);
        let mut cells = Vec::with_capacity(BOARD_SIDE);
        for pos in Position::ALL {
            cells.push(self.cell_text(board, pos, highlight));
            if pos.col() + 1 < BOARD_SIDE {
                continue;
            }
            lines.push(cells.join("|"));
            cells.clear();
            if pos.row() + 1 < BOARD_SIDE {
                lines.push("---+---+---".to_string());
            }
        }
        let _ = writeln!(self.out, "\n{}\n", lines.join("\n"));
    }

    fn announce_status(&mut self, message: StatusMessage) {
        let text = match message {
            StatusMessage::PlayerTurn => format!("{} ({})", message, self.player_symbol),
            StatusMessage::ComputerTurn => format!("{} ({})...", message, self.computer_symbol),
            StatusMessage::PlayerWins | StatusMessage::ComputerWins | StatusMessage::Draw => {
                format!("{}! Type 'reset' to play again.", message)
            }
        };
        let _ = writeln!(self.out, "{}", text);
    }

    fn set_interactable(&mut self, interactable: bool) {
        self.interactable = interactable;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn display() -> TerminalDisplay<Vec<u8>> {
        TerminalDisplay::new(Vec::new(), &DisplayConfig::default())
    }

    fn output(display: TerminalDisplay<Vec<u8>>) -> String {
        String::from_utf8(display.into_inner()).unwrap()
    }

    #[test]
    fn test_empty_cells_show_their_index() {
        let mut display = display();
        display.render(&Board::new());
        let text = output(display);
        assert!(text.contains(" 0 | 1 | 2 "));
        assert!(text.contains(" 6 | 7 | 8 "));
    }

    #[test]
    fn test_marks_use_configured_symbols() {
        let config = DisplayConfig {
            player_symbol: '〇',
            computer_symbol: '×',
            ..DisplayConfig::default()
        };
        let mut display = TerminalDisplay::new(Vec::new(), &config);
        display.render(&Board::from_marks(&[0], &[4]).unwrap());
        let text = output(display);
        assert!(text.contains(" 〇 | 1 | 2 "));
        assert!(text.contains(" 3 | × | 5 "));
    }

    #[test]
    fn test_winning_line_is_highlighted() {
        let mut display = display();
        display.render(&Board::from_marks(&[1, 2], &[0, 4, 8]).unwrap());
        let text = output(display);
        assert!(text.contains("[X]| O | O "));
        assert!(text.contains(" 3 |[X]| 5 "));
        assert!(text.contains(" 6 | 7 |[X]"));
    }

    #[test]
    fn test_status_and_interactable_are_tracked() {
        let mut display = display();
        display.set_interactable(true);
        assert!(display.is_interactable());
        display.announce_status(StatusMessage::ComputerWins);
        display.set_interactable(false);
        assert!(!display.is_interactable());
        assert!(output(display).contains("computer wins!"));
    }

    #[test]
    fn test_rows_are_separated_by_rules() {
        let mut display = display();
        display.render(&Board::new());
        let text = output(display);
        assert_eq!(text.matches("---+---+---").count(), BOARD_SIDE - 1);
        assert_eq!(text.trim().lines().count(), BOARD_SIDE * 2 - 1);
    }

    #[test]
    fn test_delay_comes_from_config() {
        let config = DisplayConfig {
            computer_move_delay_ms: 0,
            ..DisplayConfig::default()
        };
        let display = TerminalDisplay::new(Vec::new(), &config);
        assert_eq!(display.computer_move_delay(), Duration::ZERO);
    }
}
