//! Configuration file support for mathpad.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/mathpad/config.toml`. Settings include pen defaults, eraser
//! reach, board growth, capture size, the generative model connection and the subject
//! catalog.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{
    CanvasConfig, CatalogConfig, DrawingConfig, EraserConfig, ScrollConfig, TutorConfig,
};

use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// pen_color = "#000000"
/// stroke_width = 3.0
///
/// [eraser]
/// threshold = 15.0
///
/// [scroll]
/// extend_margin = 80.0
/// growth_viewports = 2.0
///
/// [tutor]
/// model = "gemini-2.0-flash-exp"
/// api_key_env = "GEMINI_API_KEY"
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Pen defaults (color, width)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Eraser reach
    #[serde(default)]
    pub eraser: EraserConfig,

    /// Extendable board behaviour
    #[serde(default)]
    pub scroll: ScrollConfig,

    /// Viewport and capture settings
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Generative model connection
    #[serde(default)]
    pub tutor: TutorConfig,

    /// Subjects and classes
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value (or replaced by the
    /// default) and a warning is logged.
    ///
    /// Validated ranges:
    /// - `stroke_width`: 0.5 - 50.0
    /// - `eraser.threshold`: 0.0 - 200.0
    /// - `scroll.extend_margin`: 0.0 - 1000.0
    /// - `scroll.growth_viewports`: 0.5 - 10.0
    /// - `scroll.initial_viewports`: 1.0 - 20.0
    /// - `canvas.width` / `canvas.height`: 64 - 4096
    /// - `tutor.timeout_secs`: 5 - 300
    fn validate_and_clamp(&mut self) {
        if !(0.5..=50.0).contains(&self.drawing.stroke_width) {
            warn!(
                "Invalid stroke_width {:.1}, clamping to 0.5-50.0 range",
                self.drawing.stroke_width
            );
            self.drawing.stroke_width = clamp_or(self.drawing.stroke_width, 0.5, 50.0, 3.0);
        }

        if !self.drawing.pen_color.is_valid() {
            warn!(
                "Invalid pen_color {:?}, falling back to black",
                self.drawing.pen_color
            );
            self.drawing.pen_color = ColorSpec::Name("#000000".to_string());
        }

        if !(0.0..=200.0).contains(&self.eraser.threshold) {
            warn!(
                "Invalid eraser threshold {:.1}, clamping to 0.0-200.0 range",
                self.eraser.threshold
            );
            self.eraser.threshold = clamp_or(
                self.eraser.threshold,
                0.0,
                200.0,
                crate::draw::DEFAULT_ERASE_THRESHOLD,
            );
        }

        if !(0.0..=1000.0).contains(&self.scroll.extend_margin) {
            warn!(
                "Invalid extend_margin {:.1}, clamping to 0.0-1000.0 range",
                self.scroll.extend_margin
            );
            self.scroll.extend_margin = clamp_or(self.scroll.extend_margin, 0.0, 1000.0, 80.0);
        }

        if !(0.5..=10.0).contains(&self.scroll.growth_viewports) {
            warn!(
                "Invalid growth_viewports {:.2}, clamping to 0.5-10.0 range",
                self.scroll.growth_viewports
            );
            self.scroll.growth_viewports = clamp_or(self.scroll.growth_viewports, 0.5, 10.0, 2.0);
        }

        if !(1.0..=20.0).contains(&self.scroll.initial_viewports) {
            warn!(
                "Invalid initial_viewports {:.2}, clamping to 1.0-20.0 range",
                self.scroll.initial_viewports
            );
            self.scroll.initial_viewports = clamp_or(self.scroll.initial_viewports, 1.0, 20.0, 1.0);
        }

        if !(64..=4096).contains(&self.canvas.width) {
            warn!(
                "Invalid canvas width {}, clamping to 64-4096 range",
                self.canvas.width
            );
            self.canvas.width = self.canvas.width.clamp(64, 4096);
        }

        if !(64..=4096).contains(&self.canvas.height) {
            warn!(
                "Invalid canvas height {}, clamping to 64-4096 range",
                self.canvas.height
            );
            self.canvas.height = self.canvas.height.clamp(64, 4096);
        }

        if !self.canvas.background.is_valid() {
            warn!(
                "Invalid canvas background {:?}, falling back to white",
                self.canvas.background
            );
            self.canvas.background = ColorSpec::Name("white".to_string());
        }

        if !(5..=300).contains(&self.tutor.timeout_secs) {
            warn!(
                "Invalid tutor timeout_secs {}, clamping to 5-300 range",
                self.tutor.timeout_secs
            );
            self.tutor.timeout_secs = self.tutor.timeout_secs.clamp(5, 300);
        }

        if self.catalog.classes.is_empty() {
            warn!("Catalog has no classes, restoring defaults");
            self.catalog.classes = CatalogConfig::default().classes;
        }

        let subjects = &self.catalog.subjects;
        let before = self.catalog.active_subjects.len();
        self.catalog
            .active_subjects
            .retain(|active| subjects.iter().any(|s| s.eq_ignore_ascii_case(active)));
        if self.catalog.active_subjects.len() != before {
            warn!("Dropped active subjects that are not listed in catalog.subjects");
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/mathpad/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("mathpad");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        // Validate and clamp values to acceptable ranges
        config.validate_and_clamp();

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Saves the current configuration to the default location.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory cannot be created
    /// - The config cannot be serialized to TOML
    /// - The file cannot be written
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;

        // Create directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// Writes a default configuration file to the user's config directory.
    ///
    /// # Errors
    /// Returns an error if:
    /// - A config file already exists at the target path
    /// - The config directory cannot be created
    /// - The file cannot be written
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        // Create directory
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let default_config =
            toml::to_string_pretty(&Self::default()).context("Failed to serialize config")?;
        fs::write(&config_path, default_config)?;

        info!("Created default config at {}", config_path.display());
        Ok(config_path)
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

fn clamp_or(value: f64, min: f64, max: f64, fallback: f64) -> f64 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.drawing.stroke_width, 3.0);
        assert_eq!(config.eraser.threshold, 15.0);
        assert_eq!(config.scroll.extend_margin, 80.0);
        assert_eq!(config.scroll.growth_viewports, 2.0);
        assert_eq!(config.tutor.model, "gemini-2.0-flash-exp");
        assert_eq!(config.catalog.classes, vec![8, 9, 10]);
        assert_eq!(config.catalog.active_subjects, vec!["Maths".to_string()]);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let mut config: Config = toml::from_str(
            r#"
            [drawing]
            stroke_width = 0.0
            pen_color = "not-a-color"

            [eraser]
            threshold = 900.0

            [canvas]
            width = 10
            height = 10000

            [tutor]
            timeout_secs = 1

            [catalog]
            subjects = ["Maths"]
            active_subjects = ["Maths", "Biology"]
            "#,
        )
        .unwrap();
        config.validate_and_clamp();

        assert_eq!(config.drawing.stroke_width, 0.5);
        assert_eq!(config.drawing.pen_color, ColorSpec::Name("#000000".into()));
        assert_eq!(config.eraser.threshold, 200.0);
        assert_eq!(config.canvas.width, 64);
        assert_eq!(config.canvas.height, 4096);
        assert_eq!(config.tutor.timeout_secs, 5);
        assert_eq!(config.catalog.active_subjects, vec!["Maths".to_string()]);
    }

    #[test]
    fn load_from_reads_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[drawing]\npen_color = [0, 0, 255]\nstroke_width = 4.0\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.drawing.stroke_width, 4.0);
        assert_eq!(config.drawing.pen_color, ColorSpec::Rgb([0, 0, 255]));
    }

    #[test]
    fn load_from_reports_parse_errors() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[drawing\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn load_from_replaces_non_ascii_colors() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[drawing]\npen_color = \"#1é234\"\n\n[canvas]\nbackground = \"#€\"\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.drawing.pen_color, ColorSpec::Name("#000000".to_string()));
        assert_eq!(config.canvas.background, ColorSpec::Name("white".to_string()));
    }

    #[test]
    fn default_config_round_trips_through_toml() {
        let text = toml::to_string_pretty(&Config::default()).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed.canvas.height, 600);
    }

    #[test]
    fn schema_mentions_sections() {
        let schema = serde_json::to_string(&Config::json_schema()).unwrap();
        assert!(schema.contains("drawing"));
        assert!(schema.contains("tutor"));
    }
}
