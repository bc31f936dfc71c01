use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ConfigError;

pub const APP_DIR_NAME: &str = "hacker-stories";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub theme: ThemeConfig,
    pub search: SearchConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub background_color: [u8; 3],
    pub panel_color: [u8; 3],
    pub accent_color: [u8; 3],
    pub text_color: [u8; 3],
    pub secondary_text_color: [u8; 3],
    pub border_color: [u8; 3],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Key the search query is stored under.
    pub storage_key: String,
    /// Query used when nothing has been stored yet.
    pub default_query: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub font_size: f32,
    pub window_width: f32,
    pub window_height: f32,
    /// Optional JSON dataset replacing the built-in stories.
    pub stories_file: Option<PathBuf>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            // VS Code Dark theme colors
            background_color: [30, 30, 30],
            panel_color: [37, 37, 38],
            accent_color: [0, 122, 204],
            text_color: [204, 204, 204],
            secondary_text_color: [150, 150, 150],
            border_color: [60, 60, 60],
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            storage_key: "search".to_owned(),
            default_query: "React".to_owned(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            font_size: 14.0,
            window_width: 640.0,
            window_height: 480.0,
            stories_file: None,
        }
    }
}

/// `<platform config dir>/hacker-stories`, created if needed.
pub fn app_config_dir() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    let app_config_dir = config_dir.join(APP_DIR_NAME);
    std::fs::create_dir_all(&app_config_dir)?;
    Ok(app_config_dir)
}

impl AppConfig {
    pub fn config_file_path() -> Result<PathBuf, ConfigError> {
        Ok(app_config_dir()?.join("config.json"))
    }

    /// Loads the configuration file, or writes and returns the defaults.
    pub fn load() -> Self {
        match Self::config_file_path() {
            Ok(path) => Self::load_or_init(&path),
            Err(e) => {
                warn!(error = %e, "no configuration location, using defaults");
                Self::default()
            }
        }
    }

    /// Same as [`AppConfig::load`] for an explicit path.
    pub fn load_or_init(path: &Path) -> Self {
        match Self::load_from_file(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, path = %path.display(), "failed to load configuration, using defaults");
                let default_config = Self::default();
                if let Err(save_err) = default_config.save_to(path) {
                    warn!(error = %save_err, "failed to save default configuration");
                }
                default_config
            }
        }
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let config_content = std::fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&config_content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let config_json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, config_json)?;
        Ok(())
    }
}

fn rgb([r, g, b]: [u8; 3]) -> egui::Color32 {
    egui::Color32::from_rgb(r, g, b)
}

impl ThemeConfig {
    pub fn background_color32(&self) -> egui::Color32 {
        rgb(self.background_color)
    }

    pub fn panel_color32(&self) -> egui::Color32 {
        rgb(self.panel_color)
    }

    pub fn accent_color32(&self) -> egui::Color32 {
        rgb(self.accent_color)
    }

    pub fn text_color32(&self) -> egui::Color32 {
        rgb(self.text_color)
    }

    pub fn secondary_text_color32(&self) -> egui::Color32 {
        rgb(self.secondary_text_color)
    }

    pub fn border_color32(&self) -> egui::Color32 {
        rgb(self.border_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_search_box() {
        let config = AppConfig::default();
        assert_eq!(config.search.storage_key, "search");
        assert_eq!(config.search.default_query, "React");
        assert!(config.ui.stories_file.is_none());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{ "search": { "default_query": "Rust" } }"#).unwrap();
        assert_eq!(config.search.default_query, "Rust");
        assert_eq!(config.search.storage_key, "search");
        assert_eq!(config.ui, UiConfig::default());
    }

    #[test]
    fn theme_colors_convert() {
        let theme = ThemeConfig::default();
        assert_eq!(theme.accent_color32(), egui::Color32::from_rgb(0, 122, 204));
    }
}
