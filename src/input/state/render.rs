use crate::draw::{Color, render_background, render_whiteboard};

use super::InputState;

impl InputState {
    /// Paints the whole board: background, committed strokes, then the stroke
    /// still being drawn so the student sees ink before lifting the finger.
    ///
    /// Clears the redraw flag.
    pub fn render(&mut self, ctx: &cairo::Context, background: Color) {
        render_background(ctx, background);
        render_whiteboard(ctx, &self.paths, self.active_stroke());
        self.needs_redraw = false;
    }
}
