use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::game::SessionSettings;
use serde::{Deserialize, Serialize};

const CONFIG_FILE: &str = "snake_client_config.yaml";

pub fn get_config_manager() -> ConfigManager<FileContentConfigProvider, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(CONFIG_FILE)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub window_title: String,
    pub game: SessionSettings,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if self.window_title.is_empty() {
            return Err("window_title must not be empty".to_string());
        }
        self.game.validate()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_title: "Snake".to_string(),
            game: SessionSettings::default(),
        }
    }
}
