//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::input::ScrollSettings;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Pen settings for new strokes.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Ink color - a named color (red, green, blue, white, black), a hex string
    /// like `"#000000"`, or an RGB array like `[0, 0, 0]`
    #[serde(default = "default_pen_color")]
    pub pen_color: ColorSpec,

    /// Stroke width in surface units (valid range: 0.5 - 50.0)
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            pen_color: default_pen_color(),
            stroke_width: default_stroke_width(),
        }
    }
}

/// Eraser reach.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct EraserConfig {
    /// Distance past a stroke's bounding box that still erases it
    /// (valid range: 0.0 - 200.0)
    #[serde(default = "default_erase_threshold")]
    pub threshold: f64,
}

impl Default for EraserConfig {
    fn default() -> Self {
        Self {
            threshold: default_erase_threshold(),
        }
    }
}

/// Extendable board settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ScrollConfig {
    /// Distance from the bottom of the board that triggers growth
    #[serde(default = "default_extend_margin")]
    pub extend_margin: f64,

    /// How many viewport heights are added each time the board grows
    #[serde(default = "default_growth_viewports")]
    pub growth_viewports: f64,

    /// Initial board height in viewport heights (at least 1.0)
    #[serde(default = "default_initial_viewports")]
    pub initial_viewports: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            extend_margin: default_extend_margin(),
            growth_viewports: default_growth_viewports(),
            initial_viewports: default_initial_viewports(),
        }
    }
}

impl ScrollConfig {
    pub fn settings(&self) -> ScrollSettings {
        ScrollSettings {
            extend_margin: self.extend_margin,
            growth_viewports: self.growth_viewports,
            initial_viewports: self.initial_viewports,
        }
    }
}

/// Visible whiteboard area and capture size.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Viewport width in pixels (valid range: 64 - 4096)
    #[serde(default = "default_canvas_width")]
    pub width: u32,

    /// Viewport height in pixels (valid range: 64 - 4096)
    #[serde(default = "default_canvas_height")]
    pub height: u32,

    /// Board background color
    #[serde(default = "default_background")]
    pub background: ColorSpec,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_width(),
            height: default_canvas_height(),
            background: default_background(),
        }
    }
}

/// Generative model connection settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct TutorConfig {
    /// API root, without the trailing `/models/...` path
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model name used for questions, hints and grading
    #[serde(default = "default_model")]
    pub model: String,

    /// Name of the environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Per-request timeout in seconds (valid range: 5 - 300)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for TutorConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            api_key_env: default_api_key_env(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Subjects and classes offered on the selection screen.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CatalogConfig {
    /// Subjects shown to the student
    #[serde(default = "default_subjects")]
    pub subjects: Vec<String>,

    /// Class levels shown to the student
    #[serde(default = "default_classes")]
    pub classes: Vec<u8>,

    /// Subjects that can actually be practised; others are shown as coming soon
    #[serde(default = "default_active_subjects")]
    pub active_subjects: Vec<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            subjects: default_subjects(),
            classes: default_classes(),
            active_subjects: default_active_subjects(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_pen_color() -> ColorSpec {
    ColorSpec::Name("#000000".to_string())
}

fn default_stroke_width() -> f64 {
    3.0
}

fn default_erase_threshold() -> f64 {
    crate::draw::DEFAULT_ERASE_THRESHOLD
}

fn default_extend_margin() -> f64 {
    80.0
}

fn default_growth_viewports() -> f64 {
    2.0
}

fn default_initial_viewports() -> f64 {
    1.0
}

fn default_canvas_width() -> u32 {
    800
}

fn default_canvas_height() -> u32 {
    600
}

fn default_background() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_model() -> String {
    "gemini-2.0-flash-exp".to_string()
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_subjects() -> Vec<String> {
    vec![
        "Maths".to_string(),
        "Physics".to_string(),
        "Chemistry".to_string(),
    ]
}

fn default_classes() -> Vec<u8> {
    vec![8, 9, 10]
}

fn default_active_subjects() -> Vec<String> {
    vec!["Maths".to_string()]
}
