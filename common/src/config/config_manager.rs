use serde::{Deserialize, Serialize};

use super::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

pub struct ConfigManager<TConfigContentProvider, TConfigSerializer = YamlConfigSerializer> {
    config_serializer: TConfigSerializer,
    config_content_provider: TConfigContentProvider,
}

impl ConfigManager<FileContentConfigProvider, YamlConfigSerializer> {
    pub fn from_yaml_file(file_path: &str) -> Self {
        Self {
            config_content_provider: FileContentConfigProvider::new(file_path.to_string()),
            config_serializer: YamlConfigSerializer::new(),
        }
    }
}

impl<TConfigContentProvider, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
{
    pub fn load<TConfig>(&self) -> Result<TConfig, String>
    where
        TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
        TConfigSerializer: ConfigSerializer<TConfig>,
    {
        let Some(content) = self.config_content_provider.get_config_content()? else {
            return Ok(TConfig::default());
        };

        let config = self.config_serializer.deserialize(&content)?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        Ok(config)
    }

    pub fn store<TConfig>(&self, config: &TConfig) -> Result<(), String>
    where
        TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
        TConfigSerializer: ConfigSerializer<TConfig>,
    {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let content = self.config_serializer.serialize(config)?;
        self.config_content_provider.set_config_content(&content)
    }
}
