//! Application configuration: data-directory paths plus the user-facing
//! settings file (`config.toml`). Every field has a default so a missing or
//! partial file always yields a usable configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Locations of everything the app persists inside its data directory.
#[derive(Clone)]
pub struct Config {
    pub base_path: PathBuf,
}

impl Config {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// The JSON document holding the organizer and its content.
    pub fn document_path(&self) -> PathBuf {
        self.base_path.join("organizer.json")
    }

    /// Plain-text layout used to build a fresh organizer when no document
    /// exists yet.
    pub fn layout_conf_path(&self) -> PathBuf {
        self.base_path.join("organizer.conf")
    }

    /// Store written by releases that predate the JSON document.
    pub fn legacy_db_path(&self) -> PathBuf {
        self.base_path.join("organizer.db")
    }

    pub fn app_config_path(&self) -> PathBuf {
        self.base_path.join("config.toml")
    }
}

/// User-facing application configuration, persisted as config.toml.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub colors: ColorsConfig,
}

impl AppConfig {
    /// Loads config from a TOML file. Returns default config if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, AppConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Saves config to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), AppConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validates config values and returns list of validation errors.
    /// Returns empty vec if config is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if !(0.0..0.5).contains(&self.layout.window_margin) {
            errors.push("window_margin must be in [0, 0.5)".to_string());
        }

        let fractions = [
            ("list_offset", self.layout.list_offset),
            ("box_margin", self.layout.box_margin),
            ("drawer_margin", self.layout.drawer_margin),
            ("handle_width", self.layout.handle_width),
            ("handle_height", self.layout.handle_height),
            ("handle_thickness", self.layout.handle_thickness),
            ("text_field_margin", self.layout.text_field_margin),
        ];
        for (name, value) in fractions {
            if value < 0.0 {
                errors.push(format!("{name} must not be negative"));
            }
        }

        if self.window.font_size <= 0.0 {
            errors.push("font_size must be positive".to_string());
        }

        if self.search.min_query_len == 0 {
            errors.push("min_query_len must be at least 1".to_string());
        }

        errors
    }
}

/// Window and font settings, applied by the platform shell.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WindowConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_window_width")]
    pub width: u32,
    #[serde(default = "default_window_height")]
    pub height: u32,
    #[serde(default)]
    pub fullscreen: bool,
    #[serde(default = "default_font_name")]
    pub font_name: String,
    #[serde(default = "default_font_size")]
    pub font_size: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            width: default_window_width(),
            height: default_window_height(),
            fullscreen: false,
            font_name: default_font_name(),
            font_size: default_font_size(),
        }
    }
}

fn default_title() -> String {
    "Organizer".to_string()
}

fn default_window_width() -> u32 {
    1920 * 4 / 2
}

fn default_window_height() -> u32 {
    1080 * 4 / 2
}

fn default_font_name() -> String {
    "Arial".to_string()
}

fn default_font_size() -> f32 {
    35.0
}

/// Geometry fractions consumed by the layout engine.
///
/// Margins and offsets are fractions of the window; box and drawer margins
/// and the handle height/thickness are fractions of one grid unit; the
/// handle width is a fraction of the drawer width; the text field margin is
/// a fraction of the font height.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct LayoutConfig {
    #[serde(default = "default_window_margin")]
    pub window_margin: f32,
    #[serde(default = "default_list_offset")]
    pub list_offset: f32,
    #[serde(default = "default_box_margin")]
    pub box_margin: f32,
    #[serde(default = "default_drawer_margin")]
    pub drawer_margin: f32,
    #[serde(default = "default_handle_width")]
    pub handle_width: f32,
    #[serde(default = "default_handle_height")]
    pub handle_height: f32,
    #[serde(default = "default_handle_thickness")]
    pub handle_thickness: f32,
    #[serde(default = "default_text_field_margin")]
    pub text_field_margin: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            window_margin: default_window_margin(),
            list_offset: default_list_offset(),
            box_margin: default_box_margin(),
            drawer_margin: default_drawer_margin(),
            handle_width: default_handle_width(),
            handle_height: default_handle_height(),
            handle_thickness: default_handle_thickness(),
            text_field_margin: default_text_field_margin(),
        }
    }
}

fn default_window_margin() -> f32 {
    0.05
}

fn default_list_offset() -> f32 {
    0.01
}

fn default_box_margin() -> f32 {
    0.03
}

fn default_drawer_margin() -> f32 {
    0.015
}

fn default_handle_width() -> f32 {
    0.3
}

fn default_handle_height() -> f32 {
    0.05
}

fn default_handle_thickness() -> f32 {
    0.03
}

fn default_text_field_margin() -> f32 {
    0.5
}

/// Search settings.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Queries shorter than this (after trimming) clear results instead of
    /// matching.
    #[serde(default = "default_min_query_len")]
    pub min_query_len: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_query_len: default_min_query_len(),
        }
    }
}

fn default_min_query_len() -> usize {
    3
}

/// RGB(A) palette; the highlight masks are added onto drawer and handle
/// colors rather than replacing them.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ColorsConfig {
    #[serde(default = "default_font_color")]
    pub font: [u8; 4],
    #[serde(default = "default_item_font_color")]
    pub item_font: [u8; 4],
    #[serde(default = "default_text_input_color")]
    pub text_input: [u8; 3],
    #[serde(default = "default_item_list_color")]
    pub item_list: [u8; 3],
    #[serde(default = "default_item_select_color")]
    pub item_select: [u8; 3],
    #[serde(default = "default_background_color")]
    pub background: [u8; 3],
    #[serde(default = "default_cabinet_color")]
    pub cabinet: [u8; 3],
    #[serde(default = "default_drawer_color")]
    pub drawer: [u8; 3],
    #[serde(default = "default_handle_color")]
    pub handle: [u8; 3],
    #[serde(default = "default_highlight_mask")]
    pub highlight_mask: [u8; 3],
    #[serde(default = "default_select_mask")]
    pub select_mask: [u8; 3],
}

impl Default for ColorsConfig {
    fn default() -> Self {
        Self {
            font: default_font_color(),
            item_font: default_item_font_color(),
            text_input: default_text_input_color(),
            item_list: default_item_list_color(),
            item_select: default_item_select_color(),
            background: default_background_color(),
            cabinet: default_cabinet_color(),
            drawer: default_drawer_color(),
            handle: default_handle_color(),
            highlight_mask: default_highlight_mask(),
            select_mask: default_select_mask(),
        }
    }
}

fn default_font_color() -> [u8; 4] {
    [255, 255, 255, 255]
}

fn default_item_font_color() -> [u8; 4] {
    [0, 0, 0, 255]
}

fn default_text_input_color() -> [u8; 3] {
    [15, 15, 15]
}

fn default_item_list_color() -> [u8; 3] {
    [180, 180, 180]
}

fn default_item_select_color() -> [u8; 3] {
    [150, 150, 150]
}

fn default_background_color() -> [u8; 3] {
    [50, 50, 50]
}

fn default_cabinet_color() -> [u8; 3] {
    [15, 15, 15]
}

fn default_drawer_color() -> [u8; 3] {
    [130, 130, 130]
}

fn default_handle_color() -> [u8; 3] {
    [90, 90, 90]
}

fn default_highlight_mask() -> [u8; 3] {
    [0, 100, 0]
}

fn default_select_mask() -> [u8; 3] {
    [0, 50, 100]
}

/// Errors that can occur when loading or saving config.
#[derive(Debug, Error)]
pub enum AppConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();

        let config = AppConfig::load(&dir.path().join("config.toml")).unwrap();

        assert_eq!(config.layout.window_margin, 0.05);
        assert_eq!(config.search.min_query_len, 3);
        assert_eq!(config.window.title, "Organizer");
    }

    #[test]
    fn test_partial_file_fills_missing_fields() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[layout]\nwindow_margin = 0.1\n\n[search]\nmin_query_len = 2\n",
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();

        assert_eq!(config.layout.window_margin, 0.1);
        assert_eq!(config.layout.box_margin, 0.03);
        assert_eq!(config.search.min_query_len, 2);
        assert_eq!(config.colors.drawer, [130, 130, 130]);
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = AppConfig::default();
        config.window.fullscreen = true;
        config.colors.background = [1, 2, 3];

        config.save(&path).unwrap();
        let back = AppConfig::load(&path).unwrap();

        assert!(back.window.fullscreen);
        assert_eq!(back.colors.background, [1, 2, 3]);
        assert_eq!(back.layout.drawer_margin, 0.015);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[layout\nwindow_margin = ").unwrap();

        assert!(matches!(
            AppConfig::load(&path),
            Err(AppConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_validate_flags_bad_values() {
        let mut config = AppConfig::default();
        config.layout.window_margin = 0.5;
        config.search.min_query_len = 0;

        let errors = config.validate();

        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("window_margin"));
    }

    #[test]
    fn test_config_paths() {
        let config = Config::new("/tmp/gaveta");

        assert!(config.document_path().ends_with("organizer.json"));
        assert!(config.layout_conf_path().ends_with("organizer.conf"));
        assert!(config.legacy_db_path().ends_with("organizer.db"));
        assert!(config.app_config_path().ends_with("config.toml"));
    }
}
