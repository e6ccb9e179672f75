//! Stateless point/segment primitives.
//!
//! Conventions
//! - All functions are total: degenerate input produces a defined value
//!   (`ANGLE_UNDEFINED`, `SegmentIntersection::Disjoint`), never a panic.
//! - Segments are closed. Touching endpoints and collinear overlaps count as
//!   intersections.
//! - The tolerance is the shared `cfg::EPS` unless an `_eps` variant is used.
//!   An intersection point is clamped onto the first segment and snapped to a
//!   nearby endpoint, so `point_on_segment` accepts it for both inputs.

use nalgebra::Vector2;

use crate::cfg::{ANGLE_UNDEFINED, EPS};
use crate::point::Point;

/// z-component of `u × v`.
#[inline]
pub fn cross(u: Vector2<f64>, v: Vector2<f64>) -> f64 {
    u.x * v.y - u.y * v.x
}

/// Twice the signed area of triangle `(a, b, c)`; positive when `c` lies to
/// the left of the directed line `a → b`.
#[inline]
pub fn orient(a: Point, b: Point, c: Point) -> f64 {
    cross(b - a, c - a)
}

/// Euclidean length of segment `ab`.
#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    (b - a).norm()
}

#[inline]
pub fn points_equal(p: Point, q: Point) -> bool {
    points_equal_eps(p, q, EPS)
}

#[inline]
pub fn points_equal_eps(p: Point, q: Point, eps: f64) -> bool {
    distance(p, q) <= eps
}

/// Angle at `p2` between the rays `p2 → p1` and `p2 → p3`, in `[0, π]`.
///
/// Returns `ANGLE_UNDEFINED` (4.0) when `p1` or `p2` coincides with `p3`, or
/// when `p1` coincides with `p2` (a ray of zero length).
pub fn angle(p1: Point, p2: Point, p3: Point) -> f64 {
    if points_equal(p1, p3) || points_equal(p2, p3) || points_equal(p1, p2) {
        return ANGLE_UNDEFINED;
    }
    let u = p1 - p2;
    let v = p3 - p2;
    cross(u, v).abs().atan2(u.dot(&v))
}

/// True iff `p` lies on the closed segment `[a, b]`.
#[inline]
pub fn point_on_segment(a: Point, b: Point, p: Point) -> bool {
    point_on_segment_eps(a, b, p, EPS)
}

/// `point_on_segment` with an explicit tolerance (distance from `p` to the
/// segment must be at most `eps`).
pub fn point_on_segment_eps(a: Point, b: Point, p: Point, eps: f64) -> bool {
    let ab = b - a;
    let len2 = ab.norm_squared();
    if len2 <= eps * eps {
        return points_equal_eps(a, p, eps);
    }
    let t = ((p - a).dot(&ab) / len2).clamp(0.0, 1.0);
    points_equal_eps(a + ab * t, p, eps)
}

/// Meeting set of two closed segments.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SegmentIntersection {
    Disjoint,
    /// Proper crossing, touching endpoint, or zero-length overlap.
    Single(Point),
    /// Collinear overlap of positive length; ends ordered along the first segment.
    Overlap(Point, Point),
}

impl SegmentIntersection {
    #[inline]
    pub fn is_disjoint(&self) -> bool {
        matches!(self, SegmentIntersection::Disjoint)
    }

    /// Representative point: the crossing, or the overlap end nearest the
    /// first segment's start.
    #[inline]
    pub fn first(&self) -> Option<Point> {
        match *self {
            SegmentIntersection::Disjoint => None,
            SegmentIntersection::Single(p) | SegmentIntersection::Overlap(p, _) => Some(p),
        }
    }
}

/// Do segments `a1a2` and `b1b2` meet? Yields the meeting point if so.
#[inline]
pub fn segments_intersect(a1: Point, a2: Point, b1: Point, b2: Point) -> Option<Point> {
    segment_intersection(a1, a2, b1, b2).first()
}

#[inline]
pub fn segment_intersection(a1: Point, a2: Point, b1: Point, b2: Point) -> SegmentIntersection {
    segment_intersection_eps(a1, a2, b1, b2, EPS)
}

pub fn segment_intersection_eps(
    a1: Point,
    a2: Point,
    b1: Point,
    b2: Point,
    eps: f64,
) -> SegmentIntersection {
    let r = a2 - a1;
    let s = b2 - b1;
    let r_len = r.norm();
    let s_len = s.norm();
    let ends = [a1, a2, b1, b2];

    // Zero-length segments degrade to point-on-segment tests.
    if r_len <= eps {
        return if point_on_segment_eps(b1, b2, a1, eps) {
            SegmentIntersection::Single(a1)
        } else {
            SegmentIntersection::Disjoint
        };
    }
    if s_len <= eps {
        return if point_on_segment_eps(a1, a2, b1, eps) {
            SegmentIntersection::Single(b1)
        } else {
            SegmentIntersection::Disjoint
        };
    }

    let qp = b1 - a1;
    let denom = cross(r, s);
    if denom.abs() <= eps * r_len * s_len {
        // Parallel: only collinear segments can meet.
        if cross(qp, r).abs() > eps * r_len {
            return SegmentIntersection::Disjoint;
        }
        let rr = r_len * r_len;
        let t0 = qp.dot(&r) / rr;
        let t1 = (b2 - a1).dot(&r) / rr;
        let lo = t0.min(t1).max(0.0);
        let hi = t0.max(t1).min(1.0);
        if lo > hi + eps / r_len {
            return SegmentIntersection::Disjoint;
        }
        let p = snap(a1 + r * lo, &ends, eps);
        if (hi - lo) * r_len <= eps {
            return SegmentIntersection::Single(p);
        }
        let q = snap(a1 + r * hi, &ends, eps);
        return SegmentIntersection::Overlap(p, q);
    }

    let t = cross(qp, s) / denom;
    let u = cross(qp, r) / denom;
    let (tol_t, tol_u) = (eps / r_len, eps / s_len);
    if t < -tol_t || t > 1.0 + tol_t || u < -tol_u || u > 1.0 + tol_u {
        return SegmentIntersection::Disjoint;
    }
    let p = a1 + r * t.clamp(0.0, 1.0);
    SegmentIntersection::Single(snap(p, &ends, eps))
}

#[inline]
fn snap(p: Point, ends: &[Point], eps: f64) -> Point {
    ends.iter()
        .copied()
        .find(|e| points_equal_eps(*e, p, eps))
        .unwrap_or(p)
}
