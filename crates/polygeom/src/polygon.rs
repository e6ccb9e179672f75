//! Polygon boundary as an ordered, circular point sequence.
//!
//! Invariants
//! - Positions are 1-based and always exactly `1..=len`: `append` adds at
//!   `len + 1`, `remove_at` shifts every later point down by one.
//! - Traversal is circular; the successor of the last point is the first.
//! - The polygon owns its points; `clone` copies them.
//! - Any length (including 0, 1, 2) is a legal value. Validity as a simple
//!   polygon is a separate predicate (`predicates::is_valid_polygon`).

use crate::error::{GeomError, Result};
use crate::point::Point;
use crate::primitives::{cross, distance, points_equal};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ordered point sequence describing a polygon boundary.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    #[inline]
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Self {
        Self {
            points: points.into_iter().collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Append `point` at position `len + 1`.
    #[inline]
    pub fn append(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Remove and return the point at 1-based position `index`.
    ///
    /// Out-of-range positions leave the polygon untouched and return
    /// `GeomError::InvalidIndex`.
    pub fn remove_at(&mut self, index: usize) -> Result<Point> {
        if index == 0 || index > self.points.len() {
            return Err(GeomError::InvalidIndex {
                index,
                len: self.points.len(),
            });
        }
        Ok(self.points.remove(index - 1))
    }

    #[inline]
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Point at 1-based position `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Point> {
        index.checked_sub(1).and_then(|i| self.points.get(i))
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// `(position, point)` pairs in traversal order, positions starting at 1.
    pub fn indexed(&self) -> impl Iterator<Item = (usize, &Point)> + '_ {
        self.points.iter().enumerate().map(|(i, p)| (i + 1, p))
    }

    /// Boundary edges `(p_i, p_{i+1})`, closing with `(p_n, p_1)`.
    ///
    /// A single point yields one zero-length edge; an empty polygon yields none.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    /// Circular successor of 1-based `index` (`len` wraps to 1).
    #[inline]
    pub fn next_index(&self, index: usize) -> usize {
        if index >= self.points.len() {
            1
        } else {
            index + 1
        }
    }

    /// Circular predecessor of 1-based `index` (1 wraps to `len`).
    #[inline]
    pub fn prev_index(&self, index: usize) -> usize {
        if index <= 1 {
            self.points.len()
        } else {
            index - 1
        }
    }

    /// Same boundary traversed in the opposite direction, starting at the
    /// same first point.
    pub fn reversed(&self) -> Polygon {
        let mut points = self.points.clone();
        if points.len() > 1 {
            points[1..].reverse();
        }
        Polygon { points }
    }

    /// Same cyclic sequence started at 1-based position `start`.
    pub fn rotated_to(&self, start: usize) -> Polygon {
        let mut points = self.points.clone();
        if !points.is_empty() {
            points.rotate_left((start.max(1) - 1) % self.points.len());
        }
        Polygon { points }
    }

    /// Shoelace area; positive for counter-clockwise traversal.
    pub fn signed_area(&self) -> f64 {
        0.5 * self
            .edges()
            .map(|(a, b)| cross(a.to_vector(), b.to_vector()))
            .sum::<f64>()
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    #[inline]
    pub fn is_ccw(&self) -> bool {
        self.signed_area() > 0.0
    }

    pub fn perimeter(&self) -> f64 {
        if self.points.len() < 2 {
            return 0.0;
        }
        self.edges().map(|(a, b)| distance(a, b)).sum()
    }

    /// Mean of the vertices; `None` for an empty polygon.
    pub fn centroid(&self) -> Option<Point> {
        if self.points.is_empty() {
            return None;
        }
        let sum = self
            .points
            .iter()
            .fold(nalgebra::Vector2::<f64>::zeros(), |acc, p| acc + p.to_vector());
        Some(Point::from(sum / self.points.len() as f64))
    }

    /// Apply `f` to every vertex, keeping order.
    pub fn map_points<F>(&self, f: F) -> Polygon
    where
        F: FnMut(&Point) -> Point,
    {
        Polygon {
            points: self.points.iter().map(f).collect(),
        }
    }

    /// Order-and-value equality up to the choice of starting position.
    ///
    /// Both sequences must have the same length and, for some cyclic shift,
    /// agree point by point (within `EPS`) in the same traversal direction.
    pub fn same_sequence(&self, other: &Polygon) -> bool {
        let n = self.points.len();
        if n != other.points.len() {
            return false;
        }
        if n == 0 {
            return true;
        }
        (0..n).any(|shift| {
            (0..n).all(|i| points_equal(self.points[i], other.points[(i + shift) % n]))
        })
    }
}

impl PartialEq for Polygon {
    fn eq(&self, other: &Self) -> bool {
        self.same_sequence(other)
    }
}

impl FromIterator<Point> for Polygon {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Polygon::from_points(iter)
    }
}

impl From<Vec<Point>> for Polygon {
    fn from(points: Vec<Point>) -> Self {
        Polygon { points }
    }
}

impl<'a> IntoIterator for &'a Polygon {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;
    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
