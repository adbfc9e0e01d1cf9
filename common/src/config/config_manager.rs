use std::cell::RefCell;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::{
    ConfigContentProvider, ConfigError, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_serializer: TConfigSerializer,
    config_content_provider: TConfigContentProvider,
    config: RefCell<Option<TConfig>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: impl Into<PathBuf>) -> Self {
        Self::new(
            FileContentConfigProvider::new(file_path),
            YamlConfigSerializer::new(),
        )
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(
        config_content_provider: TConfigContentProvider,
        config_serializer: TConfigSerializer,
    ) -> Self {
        Self {
            config: RefCell::new(None),
            config_content_provider,
            config_serializer,
        }
    }

    pub fn content_provider(&self) -> &TConfigContentProvider {
        &self.config_content_provider
    }

    /// Stored config, or `TConfig::default()` when nothing is stored yet.
    pub fn get_config(&self) -> Result<TConfig, ConfigError> {
        Ok(self.load()?.unwrap_or_default())
    }

    /// Like `get_config`, but persists the defaults when nothing is stored.
    /// The flag reports whether defaults were written.
    pub fn get_or_create_config(&self) -> Result<(TConfig, bool), ConfigError> {
        match self.load()? {
            Some(config) => Ok((config, false)),
            None => {
                let config = TConfig::default();
                self.set_config(&config)?;
                Ok((config, true))
            }
        }
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), ConfigError> {
        config.validate().map_err(ConfigError::Invalid)?;

        let serialized_config = self.config_serializer.serialize(config)?;

        self.config_content_provider
            .set_config_content(&serialized_config)?;

        *self.config.borrow_mut() = Some(config.clone());
        Ok(())
    }

    fn load(&self) -> Result<Option<TConfig>, ConfigError> {
        if let Some(config) = self.config.borrow().as_ref() {
            return Ok(Some(config.clone()));
        }

        let Some(config_data) = self.config_content_provider.get_config_content()? else {
            return Ok(None);
        };

        let config = self.config_serializer.deserialize(&config_data)?;
        config.validate().map_err(ConfigError::Invalid)?;

        *self.config.borrow_mut() = Some(config.clone());
        Ok(Some(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
    struct SampleConfig {
        name: String,
        rounds: u32,
    }

    impl Default for SampleConfig {
        fn default() -> Self {
            Self {
                name: "sample".to_string(),
                rounds: 3,
            }
        }
    }

    impl Validate for SampleConfig {
        fn validate(&self) -> Result<(), String> {
            if self.name.is_empty() {
                return Err("name must not be empty".to_string());
            }
            Ok(())
        }
    }

    fn get_temp_file_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_config_manager_{}.yaml", random_number))
    }

    #[test]
    fn test_missing_file_returns_default_without_writing() {
        let path = get_temp_file_path();
        let manager: ConfigManager<_, SampleConfig> = ConfigManager::from_yaml_file(&path);

        assert_eq!(manager.get_config().unwrap(), SampleConfig::default());
        assert!(!path.exists());
    }

    #[test]
    fn test_get_or_create_writes_defaults_once() {
        let path = get_temp_file_path();
        let manager: ConfigManager<_, SampleConfig> = ConfigManager::from_yaml_file(&path);

        let (config, created) = manager.get_or_create_config().unwrap();
        assert!(created);
        assert_eq!(config, SampleConfig::default());
        assert!(path.exists());

        let reopened: ConfigManager<_, SampleConfig> = ConfigManager::from_yaml_file(&path);
        let (config, created) = reopened.get_or_create_config().unwrap();
        assert!(!created);
        assert_eq!(config, SampleConfig::default());

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_set_then_get() {
        let path = get_temp_file_path();
        let manager: ConfigManager<_, SampleConfig> = ConfigManager::from_yaml_file(&path);
        let config = SampleConfig {
            name: "custom".to_string(),
            rounds: 7,
        };

        manager.set_config(&config).unwrap();
        assert_eq!(manager.get_config().unwrap(), config);

        let reopened: ConfigManager<_, SampleConfig> = ConfigManager::from_yaml_file(&path);
        assert_eq!(reopened.get_config().unwrap(), config);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_invalid_config_is_rejected_on_write_and_read() {
        let path = get_temp_file_path();
        let manager: ConfigManager<_, SampleConfig> = ConfigManager::from_yaml_file(&path);
        let invalid = SampleConfig {
            name: String::new(),
            rounds: 1,
        };

        assert!(matches!(manager.set_config(&invalid), Err(ConfigError::Invalid(_))));
        assert!(!path.exists());

        manager
            .content_provider()
            .set_config_content("name: \"\"\nrounds: 1\n")
            .unwrap();
        assert!(matches!(manager.get_config(), Err(ConfigError::Invalid(_))));

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_malformed_yaml_is_a_parse_error() {
        let path = get_temp_file_path();
        let provider = FileContentConfigProvider::new(&path);
        provider.set_config_content("name: [unclosed\n").unwrap();

        let manager: ConfigManager<_, SampleConfig> =
            ConfigManager::new(provider, YamlConfigSerializer::new());
        assert!(matches!(manager.get_config(), Err(ConfigError::Parse(_))));

        std::fs::remove_file(&path).unwrap();
    }
}
