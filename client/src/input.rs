use common::GameError;
use common::games::tictactoe::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Place(Position),
    Difficulty(String),
    Reset,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

pub fn parse_command(line: &str) -> Result<Command, GameError> {
    let line = line.trim();
    let mut words = line.split_whitespace();
    let Some(first) = words.next() else {
        return Ok(Command::Empty);
    };

    if first.chars().all(|c| c.is_ascii_digit()) {
        return Ok(Command::Place(first.parse()?));
    }

    let command = match first.to_ascii_lowercase().as_str() {
        "difficulty" | "level" => Command::Difficulty(words.collect::<Vec<_>>().join(" ")),
        "easy" | "normal" | "hard" => Command::Difficulty(first.to_string()),
        "reset" | "restart" | "new" => Command::Reset,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ => Command::Unknown(line.to_string()),
    };
    Ok(command)
}
