use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::SnakeSettings;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = "snake_console_config.yaml";

pub fn default_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager(
    path: &str,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub snake: SnakeSettings,
    pub high_score_file: String,
    #[serde(default)]
    pub show_grid: bool,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.snake.validate()?;
        if self.high_score_file.trim().is_empty() {
            return Err("high_score_file must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            snake: SnakeSettings::default(),
            high_score_file: "snake_high_score.yaml".to_string(),
            show_grid: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::{ConfigContentProvider, ConfigSerializer};

    fn get_temp_file_path() -> String {
        let random_number: u32 = rand::random();
        let path = std::env::temp_dir().join(format!(
            "temp_snake_console_config_{}.yaml",
            random_number
        ));
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let serialized = serializer.serialize(&default_config).unwrap();
        let deserialized: Config = serializer.deserialize(&serialized).unwrap();
        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_config_can_be_saved_and_loaded_through_manager() {
        let file_path = get_temp_file_path();
        let config = Config {
            snake: SnakeSettings {
                field_width: 30,
                field_height: 12,
                tick_interval_ms: 100,
                ..SnakeSettings::default()
            },
            show_grid: true,
            ..Config::default()
        };

        let manager = get_config_manager(&file_path);
        manager.set_config(&config).unwrap();

        let fresh = get_config_manager(&file_path);
        assert_eq!(fresh.get_config().unwrap(), config);

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let manager = get_config_manager("this_file_does_not_exist.yaml");
        assert_eq!(manager.get_config().unwrap(), Config::default());
    }

    #[test]
    fn test_invalid_config_cant_be_read() {
        let invalid_config_content = r#"
            snake:
              field_width: 1
              field_height: 10
              cell_size: 20
              tick_interval_ms: 66
              start_x: 0
              start_y: 0
              initial_length: 1
            high_score_file: scores.yaml
        "#;

        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(&file_path);
        content_provider
            .set_config_content(invalid_config_content)
            .unwrap();

        let manager: ConfigManager<_, Config, _> =
            ConfigManager::new(content_provider, YamlConfigSerializer::new());
        assert!(manager.get_config().is_err());

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_missing_show_grid_defaults_to_false() {
        let content = r#"
            snake:
              field_width: 10
              field_height: 10
              cell_size: 20
              tick_interval_ms: 66
              start_x: 0
              start_y: 0
              initial_length: 1
            high_score_file: scores.yaml
        "#;
        let config: Config = YamlConfigSerializer::new().deserialize(content).unwrap();
        assert!(!config.show_grid);
    }
}
