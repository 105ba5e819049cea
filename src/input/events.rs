//! Surface events delivered to the whiteboard by the host.

use super::mode::Mode;
use serde::{Deserialize, Serialize};

/// One event on the whiteboard's single logical event stream.
///
/// Touch events for a finger arrive strictly ordered: start, zero or more
/// moves, then end or cancel. Toolbar actions and scroll-position updates are
/// interleaved on the same stream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SurfaceEvent {
    /// Finger down at surface-local coordinates
    TouchStart { x: f64, y: f64 },
    /// Finger moved while down
    TouchMove { x: f64, y: f64 },
    /// Finger lifted
    TouchEnd,
    /// Platform took the gesture away
    TouchCancel,
    /// Toolbar switched between draw and erase
    SetMode { mode: Mode },
    /// Toolbar clear button
    Clear,
    /// Toolbar scroll/draw toggle
    ToggleScrollMode,
    /// Scroll position reported by the scrolling surface
    Scroll { offset: f64 },
}

impl SurfaceEvent {
    /// Returns true for the four touch phases.
    pub fn is_touch(&self) -> bool {
        matches!(
            self,
            Self::TouchStart { .. } | Self::TouchMove { .. } | Self::TouchEnd | Self::TouchCancel
        )
    }
}
