#[derive(Debug)]
pub enum ConfigError {
    Read { path: String, source: std::io::Error },
    Write { path: String, source: std::io::Error },
    Parse(serde_yaml_ng::Error),
    Serialize(serde_yaml_ng::Error),
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Read { path, source } => {
                write!(f, "Failed to read config file {}: {}", path, source)
            }
            ConfigError::Write { path, source } => {
                write!(f, "Failed to write config file {}: {}", path, source)
            }
            ConfigError::Parse(e) => write!(f, "Failed to deserialize config: {}", e),
            ConfigError::Serialize(e) => write!(f, "Failed to serialize config: {}", e),
            ConfigError::Invalid(reason) => write!(f, "Config validation error: {}", reason),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Read { source, .. } | ConfigError::Write { source, .. } => Some(source),
            ConfigError::Parse(e) | ConfigError::Serialize(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}
