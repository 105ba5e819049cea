//! Freehand stroke definitions.

use super::color::Color;
use serde::{Deserialize, Serialize};

/// A single sampled location in the surface's local coordinate space.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// One continuous ink path from touch-down to touch-up.
///
/// While a stroke is being drawn its points only ever grow at the end. Once it
/// has been committed to a [`PathCollection`](super::PathCollection) it is
/// treated as immutable value data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    /// Sampled points in the order they were received
    pub points: Vec<Point>,
    /// Ink color
    pub color: Color,
    /// Line width in surface units
    pub width: f64,
}

impl Stroke {
    /// Starts a stroke seeded with a single point.
    pub fn begin(start: Point, color: Color, width: f64) -> Self {
        Self {
            points: vec![start],
            color,
            width,
        }
    }

    /// Appends a sampled point to the end of the stroke.
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Returns true when the stroke is a single tap (one point).
    pub fn is_dot(&self) -> bool {
        self.points.len() == 1
    }

    /// Returns the axis-aligned bounding box of the stroke's points.
    ///
    /// Stroke width is not included. Returns `None` for an empty stroke or one
    /// containing non-finite coordinates.
    pub fn bounding_box(&self) -> Option<Bounds> {
        bounding_box_for_points(&self.points)
    }
}

/// Axis-aligned bounding box in surface coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Grows the box by `margin` on all four sides.
    pub fn expanded(&self, margin: f64) -> Self {
        Self {
            min_x: self.min_x - margin,
            min_y: self.min_y - margin,
            max_x: self.max_x + margin,
            max_y: self.max_y + margin,
        }
    }

    /// Inclusive containment test.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min_x
            && point.x <= self.max_x
            && point.y >= self.min_y
            && point.y <= self.max_y
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

pub(crate) fn bounding_box_for_points(points: &[Point]) -> Option<Bounds> {
    let (first, rest) = points.split_first()?;
    if !first.x.is_finite() || !first.y.is_finite() {
        return None;
    }

    let mut bounds = Bounds {
        min_x: first.x,
        min_y: first.y,
        max_x: first.x,
        max_y: first.y,
    };

    for p in rest {
        if !p.x.is_finite() || !p.y.is_finite() {
            return None;
        }
        bounds.min_x = bounds.min_x.min(p.x);
        bounds.max_x = bounds.max_x.max(p.x);
        bounds.min_y = bounds.min_y.min(p.y);
        bounds.max_y = bounds.max_y.max(p.y);
    }

    Some(bounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::BLACK;

    #[test]
    fn bounding_box_covers_all_points() {
        let mut stroke = Stroke::begin(Point::new(5.0, 8.0), BLACK, 3.0);
        stroke.push(Point::new(-2.0, 10.0));
        stroke.push(Point::new(7.5, -1.0));

        let bounds = stroke.bounding_box().unwrap();
        assert_eq!(bounds.min_x, -2.0);
        assert_eq!(bounds.max_x, 7.5);
        assert_eq!(bounds.min_y, -1.0);
        assert_eq!(bounds.max_y, 10.0);
        assert_eq!(bounds.width(), 9.5);
    }

    #[test]
    fn single_point_has_zero_area_box() {
        let stroke = Stroke::begin(Point::new(3.0, 4.0), BLACK, 3.0);
        let bounds = stroke.bounding_box().unwrap();
        assert_eq!(bounds.width(), 0.0);
        assert_eq!(bounds.height(), 0.0);
        assert!(bounds.contains(Point::new(3.0, 4.0)));
        assert!(stroke.is_dot());
    }

    #[test]
    fn malformed_strokes_have_no_box() {
        let empty = Stroke {
            points: Vec::new(),
            color: BLACK,
            width: 3.0,
        };
        assert!(empty.bounding_box().is_none());

        let mut nan = Stroke::begin(Point::new(0.0, 0.0), BLACK, 3.0);
        nan.push(Point::new(f64::NAN, 1.0));
        assert!(nan.bounding_box().is_none());
    }
}
