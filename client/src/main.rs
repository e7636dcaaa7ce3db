mod config;
mod input;
mod terminal_display;

use std::io::Stdout;
use std::path::PathBuf;

use clap::Parser;
use common::games::SessionRng;
use common::config::Validate;
use common::games::tictactoe::{Difficulty, Position, TicTacToeGameState};
use common::{GameError, log, logger};
use tokio::io::{AsyncBufReadExt, BufReader};

use config::{Config, get_config_manager};
use input::{Command, parse_command};
use terminal_display::TerminalDisplay;

#[derive(Parser)]
#[command(name = "tictactoe_client", about = "Play tic-tac-toe against the computer")]
struct Args {
    /// easy, normal or hard
    #[arg(long)]
    difficulty: Option<String>,

    /// Pause before the computer's move is shown, in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Config file; defaults to tictactoe_config.yaml next to the executable
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    verbose: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

fn load_config(args: &Args) -> Result<Config, GameError> {
    let mut config = get_config_manager(args.config.clone()).get_config()?;

    if let Some(ref level) = args.difficulty {
        config.game.difficulty = level.parse::<Difficulty>()?;
    }
    if let Some(delay_ms) = args.delay_ms {
        config.display.computer_move_delay_ms = delay_ms;
    }
    if args.seed.is_some() {
        config.game.seed = args.seed;
    }

    config.validate()?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose);

    let config = load_config(&args)?;
    let mut rng = match config.game.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Session seed: {}", rng.seed());

    let mut display = TerminalDisplay::new(std::io::stdout(), &config.display);
    let mut game = TicTacToeGameState::new(config.game.difficulty);

    display.show_message(&format!(
        "Tic-tac-toe against the computer ({} difficulty). Type 'help' for commands.",
        game.difficulty()
    ));
    game.on_reset_requested(&mut display);
    display.prompt();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                display.show_error(&e);
                display.prompt();
                continue;
            }
        };

        match command {
            Command::Place(pos) => play_round(&mut game, &mut display, &mut rng, pos).await?,
            Command::Difficulty(level) => {
                if let Err(e) = game.on_difficulty_changed(&level, &mut display) {
                    display.show_error(&e);
                }
            }
            Command::Reset => game.on_reset_requested(&mut display),
            Command::Help => display.show_help(),
            Command::Quit => break,
            Command::Empty => {}
            Command::Unknown(text) => {
                display.show_message(&format!("Unknown command '{}'. Type 'help'.", text));
            }
        }
        display.prompt();
    }

    log!("Client exiting");
    Ok(())
}

/// Player move followed, when the game goes on, by the computer's delayed reply.
/// Errors from the computer's side are programming errors and end the session.
async fn play_round(
    game: &mut TicTacToeGameState,
    display: &mut TerminalDisplay<Stdout>,
    rng: &mut SessionRng,
    pos: Position,
) -> Result<(), GameError> {
    if !display.is_interactable() {
        display.show_error(&GameError::GameOver);
        return Ok(());
    }

    match game.on_player_chooses_position(pos, display) {
        Ok(true) => {
            tokio::time::sleep(display.computer_move_delay()).await;
            game.play_computer_turn(rng, display)?;
        }
        Ok(false) => {}
        Err(e) => display.show_error(&e),
    }
    Ok(())
}
