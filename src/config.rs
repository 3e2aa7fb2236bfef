use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_PATH: &str = "config/app.json";

fn default_story_duration() -> f32 {
    5.0
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Optional JSON file to seed the store from instead of the built-in
    /// fixtures (`telechat fixtures` prints a template).
    #[serde(default)]
    pub fixtures_path: Option<String>,
    /// Seconds each story frame stays on screen before auto-advancing.
    #[serde(default = "default_story_duration")]
    pub story_duration_secs: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            fixtures_path: None,
            story_duration_secs: default_story_duration(),
        }
    }
}

pub fn load_config(path: &str) -> AppConfig {
    let path = Path::new(path);
    match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<AppConfig>(&content) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Failed to parse config file {}: {err}", path.display());
                AppConfig::default()
            }
        },
        Err(err) => {
            log::info!(
                "Config file {} not found ({err}); using defaults",
                path.display()
            );
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_uses_defaults() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.fixtures_path, None);
        assert_eq!(config.story_duration_secs, 5.0);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = load_config("does/not/exist.json");
        assert!(config.fixtures_path.is_none());
    }

    #[test]
    fn partial_config_keeps_remaining_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"fixtures_path": "demo.json"}"#).unwrap();
        assert_eq!(config.fixtures_path.as_deref(), Some("demo.json"));
        assert_eq!(config.story_duration_secs, 5.0);
    }
}
