use std::path::{Path, PathBuf};

use common::config::ConfigError;
use common::logger::LogTarget;

use crate::config::{Config, get_config_manager};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    Loaded,
    /// No config file existed, so the defaults were written.
    Created,
    /// The file could not be read or written.
    Fallback,
}

pub struct Startup {
    pub config: Config,
    pub config_source: ConfigSource,
    pub log_target: LogTarget,
    pub warnings: Vec<String>,
}

/// Loads the config and opens the log target. File system problems turn into
/// warnings with a fallback; only a malformed or invalid config is an error.
pub fn prepare(config_path: &str) -> Result<Startup, ConfigError> {
    let mut warnings = Vec::new();

    let (config, config_source) = match get_config_manager(config_path).get_or_create_config() {
        Ok((config, true)) => (config, ConfigSource::Created),
        Ok((config, false)) => (config, ConfigSource::Loaded),
        Err(e @ (ConfigError::Read { .. } | ConfigError::Write { .. })) => {
            warnings.push(format!("{}, using default config", e));
            (Config::default(), ConfigSource::Fallback)
        }
        Err(e) => return Err(e),
    };

    let log_target = match &config.logging.file {
        Some(file) => {
            let path = resolve_log_path(Path::new(config_path), file);
            match LogTarget::append_to(&path) {
                Ok(target) => target,
                Err(e) => {
                    warnings.push(format!(
                        "Failed to open log file {}: {}, logging to stderr",
                        path.display(),
                        e
                    ));
                    LogTarget::Stderr
                }
            }
        }
        None => LogTarget::Stderr,
    };

    Ok(Startup {
        config,
        config_source,
        log_target,
        warnings,
    })
}

/// Relative log files live next to the config file.
pub fn resolve_log_path(config_path: &Path, file: &str) -> PathBuf {
    let file = Path::new(file);
    if file.is_absolute() {
        return file.to_path_buf();
    }
    match config_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.join(file),
        _ => file.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LoggingConfig, PlayersConfig};
    use common::config::ConfigContentProvider;
    use common::games::SessionRng;
    use common::games::tictactoe::{ConsoleGame, FirstPlayerMode, GameOutcome, Mark};

    fn get_temp_name(stem: &str) -> String {
        let random_number: u32 = rand::random();
        format!("temp_tictactoe_{}_{}", stem, random_number)
    }

    #[test]
    fn test_resolve_log_path() {
        let config_path = Path::new("/opt/game/config.yaml");
        assert_eq!(
            resolve_log_path(config_path, "game.log"),
            PathBuf::from("/opt/game/game.log")
        );
        assert_eq!(
            resolve_log_path(config_path, "logs/game.log"),
            PathBuf::from("/opt/game/logs/game.log")
        );
        assert_eq!(
            resolve_log_path(Path::new("config.yaml"), "game.log"),
            PathBuf::from("game.log")
        );

        let absolute = std::env::temp_dir().join("game.log");
        assert_eq!(
            resolve_log_path(config_path, &absolute.to_string_lossy()),
            absolute
        );
    }

    #[test]
    fn test_unwritable_location_falls_back_and_game_still_runs() {
        let missing_dir = std::env::temp_dir().join(get_temp_name("missing_dir"));
        let config_path = missing_dir.join("config.yaml").to_string_lossy().into_owned();

        let startup = prepare(&config_path).unwrap();

        assert_eq!(startup.config, Config::default());
        assert_eq!(startup.config_source, ConfigSource::Fallback);
        assert!(matches!(startup.log_target, LogTarget::Stderr));
        assert_eq!(startup.warnings.len(), 2);
        assert!(startup.warnings[0].contains(&config_path));
        assert!(startup.warnings[1].contains("tictactoe_console.log"));
        assert!(startup.warnings[1].contains(&*missing_dir.to_string_lossy()));
        assert!(!missing_dir.exists());

        let players = &startup.config.players;
        let mut game = ConsoleGame::human_vs_bot(
            &players.human_name,
            &players.bot_name,
            players.first_player,
            &mut SessionRng::new(1),
        );
        let mut input = "a1\nb1\na2\nc2\nb3\nc3\n".as_bytes();
        let mut output = Vec::new();
        let outcome = game.play(&mut input, &mut output).unwrap();

        assert!(matches!(outcome, GameOutcome::Winner { mark: Mark::O, .. }));
        assert!(String::from_utf8(output).unwrap().contains("Congratulations to Player 2!"));
    }

    #[test]
    fn test_unopenable_log_file_uses_stderr() {
        let config_path = std::env::temp_dir().join(format!("{}.yaml", get_temp_name("config")));
        let config_path = config_path.to_string_lossy().into_owned();
        let log_file = format!("{}/game.log", get_temp_name("missing_log_dir"));
        let config = Config {
            logging: LoggingConfig {
                file: Some(log_file.clone()),
                use_prefix: false,
            },
            ..Config::default()
        };
        get_config_manager(&config_path).set_config(&config).unwrap();

        let startup = prepare(&config_path).unwrap();

        assert_eq!(startup.config, config);
        assert_eq!(startup.config_source, ConfigSource::Loaded);
        assert!(matches!(startup.log_target, LogTarget::Stderr));
        assert_eq!(startup.warnings.len(), 1);
        assert!(startup.warnings[0].contains(&log_file));

        std::fs::remove_file(&config_path).unwrap();
    }

    #[test]
    fn test_relative_log_file_opens_beside_config() {
        let dir = std::env::temp_dir();
        let config_path = dir.join(format!("{}.yaml", get_temp_name("config")));
        let log_name = format!("{}.log", get_temp_name("log"));
        let config = Config {
            players: PlayersConfig {
                first_player: FirstPlayerMode::Bot,
                ..PlayersConfig::default()
            },
            logging: LoggingConfig {
                file: Some(log_name.clone()),
                use_prefix: true,
            },
        };
        let config_path_str = config_path.to_string_lossy().into_owned();
        get_config_manager(&config_path_str).set_config(&config).unwrap();

        let startup = prepare(&config_path_str).unwrap();

        assert!(startup.warnings.is_empty());
        assert_eq!(startup.config_source, ConfigSource::Loaded);
        assert_eq!(startup.config, config);
        assert!(matches!(startup.log_target, LogTarget::File(_)));
        assert!(dir.join(&log_name).exists());

        std::fs::remove_file(&config_path).unwrap();
        std::fs::remove_file(dir.join(&log_name)).unwrap();
    }

    #[test]
    fn test_malformed_config_is_still_an_error() {
        let config_path = std::env::temp_dir().join(format!("{}.yaml", get_temp_name("config")));
        let config_path = config_path.to_string_lossy().into_owned();
        get_config_manager(&config_path)
            .content_provider()
            .set_config_content("players: [unclosed\n")
            .unwrap();

        assert!(matches!(prepare(&config_path), Err(ConfigError::Parse(_))));

        std::fs::remove_file(&config_path).unwrap();
    }
}
