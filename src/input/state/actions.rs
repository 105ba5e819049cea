use crate::draw::Point;
use crate::input::events::SurfaceEvent;
use crate::input::mode::Mode;
use log::{debug, info};

use super::{InputState, SessionState};

impl InputState {
    /// Empties the board unconditionally.
    ///
    /// Valid from any state. A stroke still being drawn is discarded, not
    /// committed, and the session returns to `Idle`.
    pub fn clear(&mut self) {
        let had_strokes = self.paths.len();
        self.paths.clear();
        self.state = SessionState::Idle;
        self.needs_redraw = true;
        info!("Cleared whiteboard ({} stroke(s) removed)", had_strokes);
    }

    /// Selects draw or erase for subsequent touches.
    pub fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            self.mode = mode;
            self.needs_redraw = true;
            debug!("Whiteboard mode set to {}", mode.label());
        }
    }

    /// Switches between draw and erase; returns the new mode.
    pub fn toggle_mode(&mut self) -> Mode {
        let mode = self.mode.toggled();
        self.set_mode(mode);
        mode
    }

    /// Turns the scroll gate on or off.
    ///
    /// Any gesture still open is finished first so a half-drawn stroke is
    /// committed rather than stranded behind the gate.
    pub fn set_scroll_mode(&mut self, enabled: bool) {
        if self.scroll.scroll_mode_enabled() == enabled {
            return;
        }
        self.finish_session();
        self.scroll.set_scroll_mode(enabled);
        self.needs_redraw = true;
    }

    /// Flips the scroll gate; returns the new value.
    pub fn toggle_scroll_mode(&mut self) -> bool {
        let enabled = !self.scroll.scroll_mode_enabled();
        self.set_scroll_mode(enabled);
        enabled
    }

    /// Forwards a scroll-position update to the scroll coordinator.
    pub fn on_scroll(&mut self, offset: f64) {
        if self.scroll.on_scroll(offset) {
            self.needs_redraw = true;
        }
    }

    /// Dispatches one event from the host's event stream.
    pub fn handle_event(&mut self, event: SurfaceEvent) {
        match event {
            SurfaceEvent::TouchStart { x, y } => self.on_touch_start(Point::new(x, y)),
            SurfaceEvent::TouchMove { x, y } => self.on_touch_move(Point::new(x, y)),
            SurfaceEvent::TouchEnd => self.on_touch_end(),
            SurfaceEvent::TouchCancel => self.on_touch_cancel(),
            SurfaceEvent::SetMode { mode } => self.set_mode(mode),
            SurfaceEvent::Clear => self.clear(),
            SurfaceEvent::ToggleScrollMode => {
                self.toggle_scroll_mode();
            }
            SurfaceEvent::Scroll { offset } => self.on_scroll(offset),
        }
    }
}
