mod game_config;
mod server_config;

pub use game_config::GameConfig;
pub use server_config::ServerConfig;

use common::config::Validate;
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "snake_client_config.yaml";

pub fn default_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub game: GameConfig,
    pub player_name: Option<String>,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.server.validate()?;
        self.game.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::ConfigFile;

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_snake_client_config_{}.yaml", random_number));
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized() {
        let default_config = Config::default();

        let serialized = serde_yaml_ng::to_string(&default_config).unwrap();
        let deserialized: Config = serde_yaml_ng::from_str(&serialized).unwrap();

        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_config_round_trips_through_file() {
        let config = Config {
            player_name: Some("alice".to_string()),
            ..Config::default()
        };
        let config_file = ConfigFile::new(get_temp_file_path());

        config_file.save(&config).unwrap();
        let loaded: Config = config_file.load().unwrap();

        assert_eq!(config, loaded);
    }

    #[test]
    fn test_missing_config_file_returns_default() {
        let config_file = ConfigFile::new("this_file_does_not_exist.yaml");

        let loaded: Config = config_file.load().unwrap();

        assert_eq!(Config::default(), loaded);
    }

    #[test]
    fn test_malformed_config_is_rejected() {
        let path = get_temp_file_path();
        std::fs::write(&path, "server:\n  address: [not a string\n").unwrap();

        let config_file = ConfigFile::new(path);
        let result: Result<Config, String> = config_file.load();

        assert!(result.is_err());
    }

    #[test]
    fn test_out_of_range_config_is_rejected() {
        let config = Config {
            game: GameConfig {
                cell_size: 4,
                ..GameConfig::default()
            },
            ..Config::default()
        };
        let path = get_temp_file_path();
        std::fs::write(&path, serde_yaml_ng::to_string(&config).unwrap()).unwrap();

        let config_file = ConfigFile::new(path);
        let result: Result<Config, String> = config_file.load();

        assert!(result.is_err());
    }

    #[test]
    fn test_game_config_validation_bounds() {
        assert!(GameConfig::default().validate().is_ok());

        let tiny_field = GameConfig {
            field_width: 120,
            ..GameConfig::default()
        };
        assert!(tiny_field.validate().is_err());

        let slow_tick = GameConfig {
            tick_interval_ms: 10_000,
            ..GameConfig::default()
        };
        assert!(slow_tick.validate().is_err());

        let disabled_server = ServerConfig {
            address: String::new(),
            enabled: false,
        };
        assert!(disabled_server.validate().is_ok());
    }
}
