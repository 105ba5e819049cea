//! Data types for whiteboard capture.

use crate::draw::{Color, color::WHITE};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use thiserror::Error;

/// Which part of the board ends up in the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaptureRegion {
    /// Only what is currently scrolled into view
    Viewport,
    /// From the top of the board down to the lowest ink (at least one viewport)
    #[default]
    FullBoard,
}

/// Raster settings for a capture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaptureOptions {
    /// Image width in pixels
    pub width: u32,
    /// Viewport height in pixels
    pub height: u32,
    /// Board background fill
    pub background: Color,
    /// Portion of the board to capture
    pub region: CaptureRegion,
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            background: WHITE,
            region: CaptureRegion::FullBoard,
        }
    }
}

impl CaptureOptions {
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self {
            width: config.canvas.width,
            height: config.canvas.height,
            background: config.canvas.background.to_color(),
            region: CaptureRegion::FullBoard,
        }
    }
}

/// A PNG-encoded snapshot of the whiteboard.
#[derive(Debug, Clone)]
pub struct CapturedImage {
    /// PNG bytes
    pub png: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl CapturedImage {
    /// Base64 (standard alphabet, padded) of the PNG bytes.
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.png)
    }

    /// `data:image/png;base64,...` form of the image.
    pub fn to_data_url(&self) -> String {
        format!("data:image/png;base64,{}", self.to_base64())
    }
}

/// Errors that can occur while capturing the whiteboard.
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("Capture size {width}x{height} is not drawable")]
    InvalidSize { width: u32, height: u32 },

    #[error("Cairo surface error: {0}")]
    Surface(#[from] cairo::Error),

    #[error("PNG encoding failed: {0}")]
    Encode(#[from] cairo::IoError),

    #[error("Failed to save capture: {0}")]
    SaveError(#[from] std::io::Error),
}
