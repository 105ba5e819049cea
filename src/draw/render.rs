//! Cairo-based rendering of whiteboard strokes.
//!
//! The renderer holds no state: callers hand it the committed collection and
//! the in-progress stroke (if any) every time they repaint.

use super::color::Color;
use super::paths::PathCollection;
use super::stroke::{Point, Stroke};

/// Fills the whole target with the board background color.
///
/// Should be called after clearing the canvas but before rendering strokes.
pub fn render_background(ctx: &cairo::Context, color: Color) {
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    let _ = ctx.paint(); // If paint fails the capture keeps a transparent background
}

/// Renders the committed strokes followed by the active stroke on top.
pub fn render_whiteboard(ctx: &cairo::Context, paths: &PathCollection, active: Option<&Stroke>) {
    render_strokes(ctx, paths);
    if let Some(stroke) = active {
        render_stroke(ctx, stroke);
    }
}

/// Renders all strokes in z-order (first stroke = bottom layer).
pub fn render_strokes(ctx: &cairo::Context, paths: &PathCollection) {
    for stroke in paths {
        render_stroke(ctx, stroke);
    }
}

/// Renders a single stroke with round caps and joins.
pub fn render_stroke(ctx: &cairo::Context, stroke: &Stroke) {
    render_polyline(ctx, &stroke.points, stroke.color, stroke.width);
}

/// Strokes a polyline through `points`.
///
/// A single point is drawn as a zero-length segment so the round cap leaves a
/// visible dot.
pub fn render_polyline(ctx: &cairo::Context, points: &[Point], color: Color, width: f64) {
    let Some((first, rest)) = points.split_first() else {
        return;
    };

    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(width);
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);

    ctx.move_to(first.x, first.y);
    if rest.is_empty() {
        ctx.line_to(first.x, first.y);
    }
    for p in rest {
        ctx.line_to(p.x, p.y);
    }

    let _ = ctx.stroke();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, WHITE};
    use cairo::{Context, Format, ImageSurface};

    fn pixel_at(surface: &mut ImageSurface, x: usize, y: usize) -> [u8; 4] {
        let stride = surface.stride() as usize;
        let data = surface.data().unwrap();
        let offset = y * stride + x * 4;
        [data[offset], data[offset + 1], data[offset + 2], data[offset + 3]]
    }

    #[test]
    fn dot_stroke_leaves_ink() {
        let mut surface = ImageSurface::create(Format::ARgb32, 20, 20).unwrap();
        {
            let ctx = Context::new(&surface).unwrap();
            render_background(&ctx, WHITE);
            let stroke = Stroke::begin(Point::new(10.0, 10.0), BLACK, 6.0);
            render_stroke(&ctx, &stroke);
        }
        surface.flush();
        let px = pixel_at(&mut surface, 10, 10);
        assert_eq!(&px[..3], &[0, 0, 0]);
    }

    #[test]
    fn active_stroke_drawn_over_collection() {
        let mut surface = ImageSurface::create(Format::ARgb32, 40, 40).unwrap();
        {
            let ctx = Context::new(&surface).unwrap();
            render_background(&ctx, WHITE);
            let mut paths = PathCollection::new();
            let mut under = Stroke::begin(Point::new(0.0, 20.0), BLACK, 8.0);
            under.push(Point::new(40.0, 20.0));
            paths.commit(under);

            let mut over = Stroke::begin(Point::new(20.0, 0.0), WHITE, 8.0);
            over.push(Point::new(20.0, 40.0));
            render_whiteboard(&ctx, &paths, Some(&over));
        }
        surface.flush();
        // Crossing point shows the top (white) stroke, elsewhere the black one.
        assert_eq!(&pixel_at(&mut surface, 20, 20)[..3], &[255, 255, 255]);
        assert_eq!(&pixel_at(&mut surface, 5, 20)[..3], &[0, 0, 0]);
    }
}
