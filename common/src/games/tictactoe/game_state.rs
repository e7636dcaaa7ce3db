use crate::error::GameError;
use crate::games::SessionRng;
use crate::log;
use super::board::Board;
use super::bot_controller::select_move;
use super::display::{BoardDisplay, StatusMessage};
use super::types::{Difficulty, GameStatus, Mark, Position, Turn, WinningLine};

/// One human-versus-computer game. Owns the board and the turn; the display only gets
/// told what to show.
#[derive(Debug)]
pub struct TicTacToeGameState {
    board: Board,
    turn: Turn,
    status: GameStatus,
    difficulty: Difficulty,
    last_move: Option<Position>,
}

impl TicTacToeGameState {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            board: Board::new(),
            turn: Turn::Player,
            status: GameStatus::InProgress,
            difficulty,
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Turn {
        self.turn
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        match self.status {
            GameStatus::PlayerWon => self.board.winning_line(Mark::Player),
            GameStatus::ComputerWon => self.board.winning_line(Mark::Computer),
            _ => None,
        }
    }

    pub fn is_computer_turn(&self) -> bool {
        self.status == GameStatus::InProgress && self.turn == Turn::Computer
    }

    /// Pushes the full current state to `display`.
    pub fn start(&self, display: &mut impl BoardDisplay) {
        display.render(&self.board);
        match StatusMessage::for_finished(self.status) {
            Some(message) => {
                display.announce_status(message);
                display.set_interactable(false);
            }
            None => self.announce_turn(display),
        }
    }

    pub fn on_reset_requested(&mut self, display: &mut impl BoardDisplay) {
        self.board.reset();
        self.turn = Turn::Player;
        self.status = GameStatus::InProgress;
        self.last_move = None;
        log!("New game started on {} difficulty", self.difficulty);
        self.start(display);
    }

    pub fn on_difficulty_changed(
        &mut self,
        level: &str,
        display: &mut impl BoardDisplay,
    ) -> Result<Difficulty, GameError> {
        let difficulty: Difficulty = level.parse()?;
        self.set_difficulty(difficulty, display);
        Ok(difficulty)
    }

    /// Switching difficulty always restarts the game.
    pub fn set_difficulty(&mut self, difficulty: Difficulty, display: &mut impl BoardDisplay) {
        log!("Difficulty changed from {} to {}", self.difficulty, difficulty);
        self.difficulty = difficulty;
        self.on_reset_requested(display);
    }

    /// Places the player's mark. Returns `true` when the computer is now expected to reply.
    pub fn on_player_chooses_position(
        &mut self,
        pos: Position,
        display: &mut impl BoardDisplay,
    ) -> Result<bool, GameError> {
        if self.status.is_over() {
            return Err(GameError::GameOver);
        }
        if self.turn != Turn::Player {
            return Err(GameError::NotPlayerTurn);
        }

        self.apply_move(pos, Turn::Player, display)?;
        Ok(self.is_computer_turn())
    }

    /// Computes and places the computer's reply.
    pub fn play_computer_turn(
        &mut self,
        rng: &mut SessionRng,
        display: &mut impl BoardDisplay,
    ) -> Result<Position, GameError> {
        if self.status.is_over() {
            return Err(GameError::GameOver);
        }
        if self.turn != Turn::Computer {
            return Err(GameError::NotComputerTurn);
        }

        let pos = select_move(&self.board, self.difficulty, rng)?;
        self.apply_move(pos, Turn::Computer, display)?;
        Ok(pos)
    }

    fn apply_move(
        &mut self,
        pos: Position,
        mover: Turn,
        display: &mut impl BoardDisplay,
    ) -> Result<(), GameError> {
        self.board.place(pos, mover.mark())?;
        self.last_move = Some(pos);
        log!("{:?} placed a mark at {}", mover, pos);

        self.check_game_over(mover);
        display.render(&self.board);

        if let Some(message) = StatusMessage::for_finished(self.status) {
            log!("Game over: {}", message);
            display.announce_status(message);
            display.set_interactable(false);
            return Ok(());
        }

        self.turn = mover.other();
        self.announce_turn(display);
        Ok(())
    }

    fn check_game_over(&mut self, mover: Turn) {
        if self.board.check_win(mover.mark()) {
            self.status = match mover {
                Turn::Player => GameStatus::PlayerWon,
                Turn::Computer => GameStatus::ComputerWon,
            };
            return;
        }

        if self.board.is_draw() {
            self.status = GameStatus::Draw;
        }
    }

    fn announce_turn(&self, display: &mut impl BoardDisplay) {
        match self.turn {
            Turn::Player => {
                display.announce_status(StatusMessage::PlayerTurn);
                display.set_interactable(true);
            }
            Turn::Computer => {
                display.announce_status(StatusMessage::ComputerTurn);
                display.set_interactable(false);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum DisplayEvent {
        Render([Mark; 9]),
        Status(StatusMessage),
        Interactable(bool),
    }

    #[derive(Default)]
    struct RecordingDisplay {
        events: Vec<DisplayEvent>,
    }

    impl RecordingDisplay {
        fn last_status(&self) -> Option<StatusMessage> {
            self.events.iter().rev().find_map(|event| match event {
                DisplayEvent::Status(message) => Some(*message),
                _ => None,
            })
        }

        fn is_interactable(&self) -> Option<bool> {
            self.events.iter().rev().find_map(|event| match event {
                DisplayEvent::Interactable(value) => Some(*value),
                _ => None,
            })
        }
    }

    impl BoardDisplay for RecordingDisplay {
        fn render(&mut self, board: &Board) {
            self.events.push(DisplayEvent::Render(*board.cells()));
        }

        fn announce_status(&mut self, message: StatusMessage) {
            self.events.push(DisplayEvent::Status(message));
        }

        fn set_interactable(&mut self, interactable: bool) {
            self.events.push(DisplayEvent::Interactable(interactable));
        }
    }

    fn pos(index: usize) -> Position {
        Position::new(index).unwrap()
    }

    fn new_game(difficulty: Difficulty) -> (TicTacToeGameState, RecordingDisplay) {
        let mut game = TicTacToeGameState::new(difficulty);
        let mut display = RecordingDisplay::default();
        game.on_reset_requested(&mut display);
        (game, display)
    }

    #[test]
    fn test_reset_renders_empty_board_and_hands_turn_to_player() {
        let (game, display) = new_game(Difficulty::Easy);
        assert_eq!(
            display.events,
            vec![
                DisplayEvent::Render([Mark::Empty; 9]),
                DisplayEvent::Status(StatusMessage::PlayerTurn),
                DisplayEvent::Interactable(true),
            ]
        );
        assert_eq!(game.turn(), Turn::Player);
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_player_move_passes_turn_to_computer() {
        let (mut game, mut display) = new_game(Difficulty::Normal);
        let computer_replies = game.on_player_chooses_position(pos(4), &mut display).unwrap();

        assert!(computer_replies);
        assert_eq!(game.board().get(pos(4)), Mark::Player);
        assert_eq!(display.last_status(), Some(StatusMessage::ComputerTurn));
        assert_eq!(display.is_interactable(), Some(false));
        assert_eq!(
            game.on_player_chooses_position(pos(0), &mut display),
            Err(GameError::NotPlayerTurn)
        );
    }

    #[test]
    fn test_computer_reply_returns_turn_to_player() {
        let (mut game, mut display) = new_game(Difficulty::Hard);
        let mut rng = SessionRng::new(0);
        game.on_player_chooses_position(pos(0), &mut display).unwrap();
        let reply = game.play_computer_turn(&mut rng, &mut display).unwrap();

        assert_eq!(reply, pos(4));
        assert_eq!(game.board().get(pos(4)), Mark::Computer);
        assert_eq!(game.last_move(), Some(pos(4)));
        assert_eq!(game.turn(), Turn::Player);
        assert_eq!(display.last_status(), Some(StatusMessage::PlayerTurn));
        assert_eq!(display.is_interactable(), Some(true));
    }

    #[test]
    fn test_computer_cannot_move_on_players_turn() {
        let (mut game, mut display) = new_game(Difficulty::Easy);
        let mut rng = SessionRng::new(0);
        assert_eq!(
            game.play_computer_turn(&mut rng, &mut display),
            Err(GameError::NotComputerTurn)
        );
        assert_eq!(game.turn(), Turn::Player);
        assert_eq!(game.board(), &Board::new());
    }

    #[test]
    fn test_occupied_cell_is_rejected_without_changing_turn() {
        let (mut game, mut display) = new_game(Difficulty::Normal);
        let mut rng = SessionRng::new(0);
        game.on_player_chooses_position(pos(0), &mut display).unwrap();
        let reply = game.play_computer_turn(&mut rng, &mut display).unwrap();

        assert_eq!(
            game.on_player_chooses_position(reply, &mut display),
            Err(GameError::InvalidMove(reply))
        );
        assert_eq!(game.turn(), Turn::Player);
    }

    #[test]
    fn test_hard_computer_wins_and_freezes_board() {
        let (mut game, mut display) = new_game(Difficulty::Hard);
        let mut rng = SessionRng::new(0);

        // Player wastes moves on edges while the computer builds a line.
        for player_move in [1, 3, 5] {
            if game.status().is_over() {
                break;
            }
            if game.board().get(pos(player_move)) != Mark::Empty {
                continue;
            }
            if game.on_player_chooses_position(pos(player_move), &mut display).unwrap() {
                game.play_computer_turn(&mut rng, &mut display).unwrap();
            }
        }

        assert_eq!(game.status(), GameStatus::ComputerWon);
        assert_eq!(display.last_status(), Some(StatusMessage::ComputerWins));
        assert_eq!(display.is_interactable(), Some(false));
        assert!(game.winning_line().is_some());
        assert_eq!(
            game.on_player_chooses_position(pos(8), &mut display),
            Err(GameError::GameOver)
        );
        assert_eq!(
            game.play_computer_turn(&mut rng, &mut display),
            Err(GameError::GameOver)
        );
    }

    #[test]
    fn test_game_end_is_announced_on_easy() {
        let (mut game, mut display) = new_game(Difficulty::Easy);
        let mut rng = SessionRng::new(0);

        // Fill cells in order until someone wins or the board is full.
        let mut attempts = 0;
        while !game.status().is_over() && attempts < 9 {
            attempts += 1;
            let target = [0, 1, 2, 3, 4, 5, 6, 7, 8]
                .into_iter()
                .map(pos)
                .find(|&p| game.board().get(p) == Mark::Empty);
            let Some(target) = target else {
                break;
            };
            if game.on_player_chooses_position(target, &mut display).unwrap() {
                game.play_computer_turn(&mut rng, &mut display).unwrap();
            }
        }

        assert!(game.status().is_over());
        let expected = StatusMessage::for_finished(game.status());
        assert_eq!(display.last_status(), expected);
        assert_eq!(display.is_interactable(), Some(false));
    }

    #[test]
    fn test_draw_is_announced() {
        let (mut game, mut display) = new_game(Difficulty::Hard);
        let mut rng = SessionRng::new(0);

        // Perfect play from both sides: the player answers with the hard strategy too.
        while !game.status().is_over() {
            let mirrored = mirror_board(game.board());
            let player_move = select_move(&mirrored, Difficulty::Hard, &mut rng).unwrap();
            if game.on_player_chooses_position(player_move, &mut display).unwrap() {
                game.play_computer_turn(&mut rng, &mut display).unwrap();
            }
        }

        assert_eq!(game.status(), GameStatus::Draw);
        assert_eq!(display.last_status(), Some(StatusMessage::Draw));
        assert_eq!(game.winning_line(), None);
    }

    fn mirror_board(board: &Board) -> Board {
        let mut mirrored = Board::new();
        for p in Position::ALL {
            if let Some(opponent) = board.get(p).opponent() {
                mirrored.place(p, opponent).unwrap();
            }
        }
        mirrored
    }

    #[test]
    fn test_difficulty_change_restarts_game() {
        let (mut game, mut display) = new_game(Difficulty::Easy);
        game.on_player_chooses_position(pos(4), &mut display).unwrap();

        let difficulty = game.on_difficulty_changed("hard", &mut display).unwrap();

        assert_eq!(difficulty, Difficulty::Hard);
        assert_eq!(game.difficulty(), Difficulty::Hard);
        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.turn(), Turn::Player);
        assert_eq!(display.last_status(), Some(StatusMessage::PlayerTurn));
    }

    #[test]
    fn test_unknown_difficulty_is_configuration_error() {
        let (mut game, mut display) = new_game(Difficulty::Normal);
        game.on_player_chooses_position(pos(4), &mut display).unwrap();

        let result = game.on_difficulty_changed("nightmare", &mut display);

        assert!(matches!(result, Err(GameError::Configuration(_))));
        assert_eq!(game.difficulty(), Difficulty::Normal);
        assert_eq!(game.board().get(pos(4)), Mark::Player);
    }

    #[test]
    fn test_status_messages_text() {
        assert_eq!(StatusMessage::PlayerTurn.to_string(), "player's turn");
        assert_eq!(StatusMessage::ComputerTurn.to_string(), "computer's turn");
        assert_eq!(StatusMessage::PlayerWins.to_string(), "player wins");
        assert_eq!(StatusMessage::ComputerWins.to_string(), "computer wins");
        assert_eq!(StatusMessage::Draw.to_string(), "draw");
    }
}
