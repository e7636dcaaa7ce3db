use crate::error::GameError;
use super::types::{CELL_COUNT, Mark, Position, WINNING_LINES, WinningLine};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from the cells held by each side. Used by tests and benches to set
    /// up positions directly.
    pub fn from_marks(player: &[usize], computer: &[usize]) -> Result<Self, GameError> {
        let mut board = Self::new();
        for &index in player {
            board.place(Position::new(index)?, Mark::Player)?;
        }
        for &index in computer {
            board.place(Position::new(index)?, Mark::Computer)?;
        }
        Ok(board)
    }

    pub fn reset(&mut self) {
        self.cells = [Mark::Empty; CELL_COUNT];
    }

    pub fn get(&self, pos: Position) -> Mark {
        self.cells[pos.index()]
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn available_positions(&self) -> Vec<Position> {
        Position::ALL
            .into_iter()
            .filter(|&pos| self.get(pos) == Mark::Empty)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn place(&mut self, pos: Position, mark: Mark) -> Result<(), GameError> {
        if mark == Mark::Empty || self.get(pos) != Mark::Empty {
            return Err(GameError::InvalidMove(pos));
        }
        self.cells[pos.index()] = mark;
        Ok(())
    }

    pub fn remove(&mut self, pos: Position) {
        self.cells[pos.index()] = Mark::Empty;
    }

    pub fn check_win(&self, mark: Mark) -> bool {
        self.winning_line(mark).is_some()
    }

    pub fn winning_line(&self, mark: Mark) -> Option<WinningLine> {
        if mark == Mark::Empty {
            return None;
        }
        WINNING_LINES
            .iter()
            .find(|line| line.cells.iter().all(|&pos| self.get(pos) == mark))
            .copied()
    }

    /// Callers check both sides for a win before asking about a draw.
    pub fn is_draw(&self) -> bool {
        self.is_full() && !self.check_win(Mark::Player) && !self.check_win(Mark::Computer)
    }

    pub fn has_winner(&self) -> bool {
        self.check_win(Mark::Player) || self.check_win(Mark::Computer)
    }
}
