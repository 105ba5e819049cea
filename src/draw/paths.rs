//! Ordered collection of committed strokes.

use super::hit_test::hits_stroke;
use super::stroke::{Point, Stroke};
use serde::{Deserialize, Serialize};

/// All committed strokes on the whiteboard.
///
/// Insertion order is z-order (first = bottom layer, last = top layer).
/// Strokes have no identity of their own; they are addressed by position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathCollection {
    strokes: Vec<Stroke>,
}

impl PathCollection {
    /// Creates a new empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a finished stroke on top of the existing ones.
    pub fn commit(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
    }

    /// Removes every stroke the eraser at `point` reaches.
    ///
    /// Returns the number of strokes removed. Relative order of the survivors
    /// is preserved.
    pub fn erase_at(&mut self, point: Point, threshold: f64) -> usize {
        let before = self.strokes.len();
        self.strokes.retain(|stroke| !hits_stroke(point, stroke, threshold));
        before - self.strokes.len()
    }

    /// Removes all strokes.
    pub fn clear(&mut self) {
        self.strokes.clear();
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Strokes in draw order.
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Stroke> {
        self.strokes.iter()
    }
}

impl<'a> IntoIterator for &'a PathCollection {
    type Item = &'a Stroke;
    type IntoIter = std::slice::Iter<'a, Stroke>;

    fn into_iter(self) -> Self::IntoIter {
        self.strokes.iter()
    }
}
