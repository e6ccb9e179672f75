//! Polygon predicates: validity, containment, equality, shape equality and
//! topological classification.
//!
//! Boundary semantics are inclusive throughout: a point on an edge is
//! contained, and two polygons whose edges merely touch are `Intersecting`.

use crate::cfg::EPS;
use crate::point::Point;
use crate::polygon::Polygon;
use crate::primitives::{
    cross, distance, orient, point_on_segment, segment_intersection, segments_intersect,
    SegmentIntersection,
};
use crate::status::Status;

/// At least three points, not all on one line.
pub fn is_valid_polygon(polygon: &Polygon) -> bool {
    let pts = polygon.points();
    if pts.len() < 3 {
        return false;
    }
    let p0 = pts[0];
    let Some(&a) = pts.iter().find(|p| distance(p0, **p) > EPS) else {
        return false;
    };
    let base = distance(p0, a);
    pts.iter().any(|&c| orient(p0, a, c).abs() / base > EPS)
}

/// Valid, and no two edges meet except adjacent edges at their shared vertex.
pub fn is_simple_polygon(polygon: &Polygon) -> bool {
    if !is_valid_polygon(polygon) {
        return false;
    }
    let edges: Vec<(Point, Point)> = polygon.edges().collect();
    let n = edges.len();
    for i in 0..n {
        for j in (i + 1)..n {
            let (a1, a2) = edges[i];
            let (b1, b2) = edges[j];
            let adjacent = j == i + 1 || (i == 0 && j == n - 1);
            match segment_intersection(a1, a2, b1, b2) {
                SegmentIntersection::Disjoint => {}
                SegmentIntersection::Overlap(..) => return false,
                SegmentIntersection::Single(_) if adjacent => {}
                SegmentIntersection::Single(_) => return false,
            }
        }
    }
    true
}

/// True iff `point` lies on some edge of `polygon`.
pub fn on_boundary(polygon: &Polygon, point: Point) -> bool {
    polygon
        .edges()
        .any(|(a, b)| point_on_segment(a, b, point))
}

/// Even-odd ray casting with an inclusive boundary.
pub fn contains_point(polygon: &Polygon, point: Point) -> bool {
    if polygon.is_empty() {
        return false;
    }
    if on_boundary(polygon, point) {
        return true;
    }
    if polygon.len() < 3 {
        return false;
    }
    let mut inside = false;
    for (a, b) in polygon.edges() {
        if (a.y > point.y) != (b.y > point.y) {
            let x_cross = a.x + (point.y - a.y) * (b.x - a.x) / (b.y - a.y);
            if point.x < x_cross {
                inside = !inside;
            }
        }
    }
    inside
}

/// Same vertex sequence up to the starting position (no reversal).
#[inline]
pub fn are_equal_polygons(p1: &Polygon, p2: &Polygon) -> bool {
    p1.same_sequence(p2)
}

/// Congruence up to starting position, traversal direction, rigid motion and
/// reflection.
///
/// Compares the circular sequences of side lengths and signed turning angles.
pub fn have_same_shape(p1: &Polygon, p2: &Polygon) -> bool {
    if p1.len() != p2.len() {
        return false;
    }
    if p1.same_sequence(p2) || p1.same_sequence(&p2.reversed()) {
        return true;
    }
    let target = shape_signature(p1);
    let forward = shape_signature(p2);
    let backward = shape_signature(&p2.reversed());
    let (forward_m, backward_m) = (mirror(&forward), mirror(&backward));
    let candidates = [&forward, &forward_m, &backward, &backward_m];
    let matched = candidates.into_iter().any(|sig| cyclic_match(&target, sig));
    matched
}

/// `(side length, signed turn)` at each vertex: side `p_i → p_{i+1}`, turn
/// from the incoming to the outgoing edge at `p_i`.
fn shape_signature(polygon: &Polygon) -> Vec<(f64, f64)> {
    let pts = polygon.points();
    let n = pts.len();
    (0..n)
        .map(|i| {
            let prev = pts[(i + n - 1) % n];
            let cur = pts[i];
            let next = pts[(i + 1) % n];
            let e_in = cur - prev;
            let e_out = next - cur;
            let turn = cross(e_in, e_out).atan2(e_in.dot(&e_out));
            (distance(cur, next), turn)
        })
        .collect()
}

fn mirror(sig: &[(f64, f64)]) -> Vec<(f64, f64)> {
    sig.iter().map(|&(len, turn)| (len, -turn)).collect()
}

fn cyclic_match(a: &[(f64, f64)], b: &[(f64, f64)]) -> bool {
    let n = a.len();
    if n != b.len() {
        return false;
    }
    if n == 0 {
        return true;
    }
    let close = |x: f64, y: f64| (x - y).abs() <= EPS * (1.0 + x.abs().max(y.abs()));
    (0..n).any(|shift| {
        (0..n).all(|i| {
            let (la, ta) = a[i];
            let (lb, tb) = b[(i + shift) % n];
            close(la, lb) && close(ta, tb)
        })
    })
}

/// Classify `p1` relative to `p2`.
///
/// Order of tests: validity (`Error`), sequence equality (`Equal`), any edge
/// contact (`Intersecting`), then vertex containment (`Inside`, `Enclosing`,
/// otherwise `Outside`). Edge contact wins over containment, so a concave
/// polygon whose vertices all lie inside another but whose edges leave it is
/// `Intersecting`.
pub fn classify_polygons(p1: &Polygon, p2: &Polygon) -> Status {
    if !is_valid_polygon(p1) || !is_valid_polygon(p2) {
        tracing::debug!(len1 = p1.len(), len2 = p2.len(), "classify: invalid input");
        return Status::Error;
    }
    let status = if are_equal_polygons(p1, p2) {
        Status::Equal
    } else if edges_meet(p1, p2) {
        Status::Intersecting
    } else if p1.iter().all(|&v| contains_point(p2, v)) {
        Status::Inside
    } else if p2.iter().all(|&v| contains_point(p1, v)) {
        Status::Enclosing
    } else {
        Status::Outside
    };
    tracing::debug!(?status, len1 = p1.len(), len2 = p2.len(), "classify");
    status
}

/// Any edge of `p1` meets any edge of `p2`.
pub(crate) fn edges_meet(p1: &Polygon, p2: &Polygon) -> bool {
    p1.edges().any(|(a1, a2)| {
        p2.edges()
            .any(|(b1, b2)| segments_intersect(a1, a2, b1, b2).is_some())
    })
}

/// `p1` is inside or equal to `p2`.
#[inline]
pub fn is_inside(p1: &Polygon, p2: &Polygon) -> bool {
    matches!(classify_polygons(p1, p2), Status::Inside | Status::Equal)
}

/// `p1` and `p2` are apart.
#[inline]
pub fn is_outside(p1: &Polygon, p2: &Polygon) -> bool {
    classify_polygons(p1, p2) == Status::Outside
}
