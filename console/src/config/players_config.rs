use common::config::Validate;
use common::games::tictactoe::FirstPlayerMode;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct PlayersConfig {
    pub human_name: String,
    pub bot_name: String,
    pub first_player: FirstPlayerMode,
}

impl Validate for PlayersConfig {
    fn validate(&self) -> Result<(), String> {
        if self.human_name.trim().is_empty() {
            return Err("human_name must not be empty".to_string());
        }
        if self.bot_name.trim().is_empty() {
            return Err("bot_name must not be empty".to_string());
        }
        if self.human_name == self.bot_name {
            return Err(format!(
                "human_name and bot_name must differ, both are \"{}\"",
                self.human_name
            ));
        }
        Ok(())
    }
}

impl Default for PlayersConfig {
    fn default() -> Self {
        Self {
            human_name: "1".to_string(),
            bot_name: "2".to_string(),
            first_player: FirstPlayerMode::Human,
        }
    }
}
