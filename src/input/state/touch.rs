use crate::draw::{Point, Stroke};
use crate::input::mode::Mode;
use log::debug;

use super::{InputState, SessionState};

impl InputState {
    /// Processes a finger-down event.
    ///
    /// # Behavior
    /// - Scroll mode on: the touch belongs to the scroll surface (`Panning`);
    ///   strokes are never touched.
    /// - Erase mode: removes every stroke the eraser reaches at `point`
    ///   and enters `Erasing`.
    /// - Draw mode: opens a new stroke seeded with `point` and enters `Drawing`.
    ///
    /// A start that arrives while a previous gesture is still open finishes
    /// that gesture first, as if it had ended.
    pub fn on_touch_start(&mut self, point: Point) {
        if !matches!(self.state, SessionState::Idle) {
            debug!("Touch start during {} session; finishing it first", self.state.name());
            self.finish_session();
        }

        if self.scroll.scroll_mode_enabled() {
            self.state = SessionState::Panning { last_y: point.y };
            return;
        }

        match self.mode {
            Mode::Erase => {
                self.erase_at(point);
                self.state = SessionState::Erasing;
            }
            Mode::Draw => {
                self.state = SessionState::Drawing {
                    stroke: Stroke::begin(point, self.pen_color, self.pen_width),
                };
                self.needs_redraw = true;
            }
        }
    }

    /// Processes a finger-move event.
    ///
    /// # Behavior
    /// - `Drawing`: appends `point` to the active stroke
    /// - `Erasing`: removes any further strokes reached at `point`
    /// - `Panning`: scrolls the surface by the vertical drag distance
    /// - `Idle`: no-op
    pub fn on_touch_move(&mut self, point: Point) {
        match &mut self.state {
            SessionState::Drawing { stroke } => {
                stroke.push(point);
                self.needs_redraw = true;
            }
            SessionState::Erasing => self.erase_at(point),
            SessionState::Panning { last_y } => {
                let dy = point.y - *last_y;
                *last_y = point.y;
                if self.scroll.pan_by(dy) {
                    self.needs_redraw = true;
                }
            }
            SessionState::Idle => {}
        }
    }

    /// Processes a finger-up event, committing any stroke in progress.
    pub fn on_touch_end(&mut self) {
        self.finish_session();
    }

    /// Processes a cancelled touch.
    ///
    /// Identical to [`on_touch_end`](Self::on_touch_end): a stroke being drawn
    /// is still committed so the student's ink is kept.
    pub fn on_touch_cancel(&mut self) {
        self.finish_session();
    }

    /// Ends the current session and returns to `Idle`.
    pub(crate) fn finish_session(&mut self) {
        match std::mem::replace(&mut self.state, SessionState::Idle) {
            SessionState::Drawing { stroke } => {
                if !stroke.points.is_empty() {
                    debug!(
                        "Committing stroke with {} point(s); {} stroke(s) on board",
                        stroke.points.len(),
                        self.paths.len() + 1
                    );
                    self.paths.commit(stroke);
                }
                self.needs_redraw = true;
            }
            SessionState::Erasing | SessionState::Panning { .. } | SessionState::Idle => {}
        }
    }

    fn erase_at(&mut self, point: Point) {
        let removed = self.paths.erase_at(point, self.erase_threshold);
        if removed > 0 {
            debug!(
                "Eraser at ({:.1}, {:.1}) removed {} stroke(s); {} remaining",
                point.x,
                point.y,
                removed,
                self.paths.len()
            );
            self.needs_redraw = true;
        }
    }
}
