//! Affine transforms of polygons.
//!
//! Every transform returns a new polygon with the same vertex order; the
//! input is never modified.

use nalgebra::{Matrix2, Rotation2, Vector2};

use crate::point::Point;
use crate::polygon::Polygon;

/// 2D affine map: `x ↦ M x + t`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Affine2 {
    pub m: Matrix2<f64>,
    pub t: Vector2<f64>,
}

impl Affine2 {
    #[inline]
    pub fn identity() -> Self {
        Self {
            m: Matrix2::identity(),
            t: Vector2::zeros(),
        }
    }

    #[inline]
    pub fn translation(v: Vector2<f64>) -> Self {
        Self {
            m: Matrix2::identity(),
            t: v,
        }
    }

    /// Counter-clockwise rotation by `angle` radians about `center`.
    pub fn rotation_about(center: Point, angle: f64) -> Self {
        let m = Rotation2::new(angle).into_inner();
        let c = center.to_vector();
        Self { m, t: c - m * c }
    }

    /// Uniform scaling by `factor` about `center`.
    pub fn scaling_about(center: Point, factor: f64) -> Self {
        let m = Matrix2::identity() * factor;
        let c = center.to_vector();
        Self { m, t: c - m * c }
    }

    /// Point reflection through `s`: `v ↦ 2s − v`.
    #[inline]
    pub fn point_reflection(s: Point) -> Self {
        Self {
            m: -Matrix2::identity(),
            t: s.to_vector() * 2.0,
        }
    }

    /// `next ∘ self`: apply `self` first.
    #[inline]
    pub fn then(&self, next: &Affine2) -> Affine2 {
        Affine2 {
            m: next.m * self.m,
            t: next.m * self.t + next.t,
        }
    }

    #[inline]
    pub fn inverse(&self) -> Option<Self> {
        self.m.try_inverse().map(|minv| Self {
            m: minv,
            t: -minv * self.t,
        })
    }

    #[inline]
    pub fn apply_point(&self, p: Point) -> Point {
        Point::from(self.m * p.to_vector() + self.t)
    }

    pub fn apply(&self, polygon: &Polygon) -> Polygon {
        polygon.map_points(|p| self.apply_point(*p))
    }
}

/// Translate by the vector `b − a`.
pub fn translate(polygon: &Polygon, a: Point, b: Point) -> Polygon {
    Affine2::translation(b - a).apply(polygon)
}

/// Rotate about `center` by `angle` radians, counter-clockwise.
pub fn rotate(polygon: &Polygon, center: Point, angle: f64) -> Polygon {
    Affine2::rotation_about(center, angle).apply(polygon)
}

/// Scale every vertex's offset from the vertex centroid by `factor`.
///
/// The centroid is the mean of the vertices, so it is fixed by the map. An
/// empty polygon stays empty.
pub fn scale(polygon: &Polygon, factor: f64) -> Polygon {
    match polygon.centroid() {
        Some(c) => Affine2::scaling_about(c, factor).apply(polygon),
        None => Polygon::new(),
    }
}

/// Reflect every vertex through `s`.
pub fn central_symmetry(polygon: &Polygon, s: Point) -> Polygon {
    Affine2::point_reflection(s).apply(polygon)
}
