//! Whiteboard drawing primitives (Cairo-based).
//!
//! This module defines the stroke model used by the whiteboard:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`Point`] and [`Stroke`]: one freehand ink path
//! - [`PathCollection`]: all committed strokes in z-order
//! - Eraser hit-testing and rendering functions for Cairo-based output

pub mod color;
pub mod paths;
pub mod render;
pub mod stroke;

// Re-export commonly used types at module level
pub use color::Color;
pub use hit_test::{DEFAULT_ERASE_THRESHOLD, hits_stroke};
pub use paths::PathCollection;
pub use render::{render_background, render_stroke, render_strokes, render_whiteboard};
pub use stroke::{Bounds, Point, Stroke};
