mod config;
mod logging_config;
mod players_config;

pub use config::{Config, get_config_manager, get_config_path};
pub use logging_config::LoggingConfig;
pub use players_config::PlayersConfig;
