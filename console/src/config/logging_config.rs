use common::config::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct LoggingConfig {
    /// `None` sends log lines to stderr.
    pub file: Option<String>,
    #[serde(default)]
    pub use_prefix: bool,
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if let Some(file) = &self.file
            && file.trim().is_empty()
        {
            return Err("logging file must not be empty, use null for stderr".to_string());
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: Some("tictactoe_console.log".to_string()),
            use_prefix: false,
        }
    }
}
