//! Surface scroll coordination for the extendable whiteboard.
//!
//! A manual toggle decides whether touches draw or scroll. While scrolling is
//! enabled the drawable height grows ahead of the viewport so the user never
//! reaches the bottom of the board.

use serde::{Deserialize, Serialize};

/// Tunables for auto-extension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSettings {
    /// Distance from the content bottom at which growth is triggered
    pub extend_margin: f64,
    /// Growth per trigger, in viewport heights
    pub growth_viewports: f64,
    /// Initial content height, in viewport heights
    pub initial_viewports: f64,
}

impl Default for ScrollSettings {
    fn default() -> Self {
        Self {
            extend_margin: 80.0,
            growth_viewports: 2.0,
            initial_viewports: 1.0,
        }
    }
}

/// Snapshot of the scroll gate and current drawable height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollState {
    pub scroll_mode_enabled: bool,
    pub content_height: f64,
}

/// Arbitrates between drawing touches and page scrolling.
#[derive(Debug, Clone)]
pub struct ScrollCoordinator {
    settings: ScrollSettings,
    enabled: bool,
    viewport_height: f64,
    content_height: f64,
    offset: f64,
}

impl ScrollCoordinator {
    /// Creates a coordinator with scrolling disabled.
    pub fn new(viewport_height: f64, settings: ScrollSettings) -> Self {
        let viewport_height = viewport_height.max(0.0);
        Self {
            settings,
            enabled: false,
            viewport_height,
            content_height: viewport_height * settings.initial_viewports.max(1.0),
            offset: 0.0,
        }
    }

    pub fn scroll_mode_enabled(&self) -> bool {
        self.enabled
    }

    /// Sets the scroll gate. Returns the previous value.
    pub fn set_scroll_mode(&mut self, enabled: bool) -> bool {
        let previous = self.enabled;
        self.enabled = enabled;
        if previous != enabled {
            log::debug!("Scroll mode {}", if enabled { "enabled" } else { "disabled" });
        }
        previous
    }

    /// Flips the scroll gate and returns the new value.
    pub fn toggle_scroll_mode(&mut self) -> bool {
        let enabled = !self.enabled;
        self.set_scroll_mode(enabled);
        enabled
    }

    /// Handles a scroll-position update from the scrolling surface.
    ///
    /// Ignored while scroll mode is disabled (scrolling is locked). Returns true
    /// when the content height grew.
    pub fn on_scroll(&mut self, offset: f64) -> bool {
        if !self.enabled || !offset.is_finite() {
            return false;
        }

        let max_offset = (self.content_height - self.viewport_height).max(0.0);
        self.offset = offset.clamp(0.0, max_offset);
        self.maybe_extend()
    }

    /// Scrolls by a finger drag of `dy` (positive = finger moved down).
    pub fn pan_by(&mut self, dy: f64) -> bool {
        self.on_scroll(self.offset - dy)
    }

    fn maybe_extend(&mut self) -> bool {
        let threshold = self.content_height - self.settings.extend_margin;
        if self.offset + self.viewport_height > threshold {
            let growth = self.viewport_height * self.settings.growth_viewports;
            if growth > 0.0 {
                self.content_height += growth;
                log::debug!(
                    "Extended drawable height to {:.0} (offset {:.0})",
                    self.content_height,
                    self.offset
                );
                return true;
            }
        }
        false
    }

    /// Updates the viewport size after layout. Content never shrinks.
    pub fn set_viewport_height(&mut self, height: f64) {
        if !height.is_finite() || height < 0.0 {
            return;
        }
        self.viewport_height = height;
        let minimum = height * self.settings.initial_viewports.max(1.0);
        self.content_height = self.content_height.max(minimum);
    }

    pub fn content_height(&self) -> f64 {
        self.content_height
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    pub fn state(&self) -> ScrollState {
        ScrollState {
            scroll_mode_enabled: self.enabled,
            content_height: self.content_height,
        }
    }
}
