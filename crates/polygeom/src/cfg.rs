//! Tolerance defaults for 2D predicates.
//!
//! Policy
//! - One tolerance governs point equality, point-on-segment, collinearity and
//!   intersection clamping, so an intersection point computed from two edges
//!   is always judged to lie on both of them.
//! - Plain predicates use `EPS`; the `_eps` variants take it from `GeomCfg`
//!   or an explicit argument.

use crate::point::Point;
use crate::primitives::{
    point_on_segment_eps, points_equal_eps, segment_intersection_eps, SegmentIntersection,
};

/// Shared absolute tolerance (coordinate units).
pub const EPS: f64 = 1e-9;

/// Sentinel returned by `angle` when one of its rays has zero length.
///
/// Lies outside `[0, π]`, so callers can test for it without an error path.
pub const ANGLE_UNDEFINED: f64 = 4.0;

/// Geometry configuration (tolerances).
///
/// Carries a tolerance other than `EPS` into the tolerance-sensitive
/// primitives.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    pub eps: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self { eps: EPS }
    }
}

impl GeomCfg {
    #[inline]
    pub fn with_eps(eps: f64) -> Self {
        Self { eps }
    }

    #[inline]
    pub fn points_equal(&self, p: Point, q: Point) -> bool {
        points_equal_eps(p, q, self.eps)
    }

    #[inline]
    pub fn point_on_segment(&self, a: Point, b: Point, p: Point) -> bool {
        point_on_segment_eps(a, b, p, self.eps)
    }

    #[inline]
    pub fn segment_intersection(
        &self,
        a1: Point,
        a2: Point,
        b1: Point,
        b2: Point,
    ) -> SegmentIntersection {
        segment_intersection_eps(a1, a2, b1, b2, self.eps)
    }
}
