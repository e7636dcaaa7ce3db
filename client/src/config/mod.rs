mod config;
mod display_config;
mod game_config;

pub use config::{get_config_manager, Config};
pub use display_config::DisplayConfig;
pub use game_config::GameConfig;
