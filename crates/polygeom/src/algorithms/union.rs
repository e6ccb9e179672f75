//! Set union of two simple polygons.
//!
//! Method
//! - Orient both inputs counter-clockwise and split every edge at its meeting
//!   points with the other polygon's edges.
//! - Keep a piece when its midpoint lies strictly outside the other polygon.
//!   A piece running along the other boundary is kept once (from the first
//!   polygon) when both traverse it in the same direction, and dropped when
//!   the directions are opposite (the two interiors meet across it).
//! - Chain the kept pieces from the lowest point, taking the right-most turn
//!   at every junction, which follows the outer boundary. Holes of the union
//!   are not reported.
//! - Split points that end up collinear between their neighbours are
//!   removed; input vertices are kept.

use nalgebra::Vector2;

use crate::cfg::EPS;
use crate::error::{GeomError, Result};
use crate::point::Point;
use crate::polygon::Polygon;
use crate::predicates::{classify_polygons, contains_point, is_valid_polygon, on_boundary};
use crate::primitives::{
    cross, distance, orient, point_on_segment, points_equal, segment_intersection,
    SegmentIntersection,
};
use crate::status::Status;

/// Boundary piece between two consecutive split points of one input edge.
#[derive(Clone, Copy, Debug)]
struct Piece {
    start: Point,
    end: Point,
    /// `start` is a vertex of the input polygon the piece came from.
    start_is_vertex: bool,
}

impl Piece {
    #[inline]
    fn dir(&self) -> Vector2<f64> {
        self.end - self.start
    }
}

/// Boundary of the union of `p1` and `p2`.
///
/// Both inputs must be valid polygons that are not disjoint. The result is
/// always counter-clockwise. Nested and equal inputs return the larger one;
/// a traced boundary starts at its lowest (then leftmost) point.
pub fn union(p1: &Polygon, p2: &Polygon) -> Result<Polygon> {
    for p in [p1, p2] {
        if !is_valid_polygon(p) {
            return Err(GeomError::InvalidPolygon { len: p.len() });
        }
    }
    let status = classify_polygons(p1, p2);
    tracing::debug!(?status, "union");
    match status {
        Status::Equal | Status::Enclosing => return Ok(counter_clockwise(p1)),
        Status::Inside => return Ok(counter_clockwise(p2)),
        Status::Outside => return Err(GeomError::Disjoint),
        Status::Error => {
            return Err(GeomError::InvalidPolygon {
                len: p1.len().min(p2.len()),
            })
        }
        Status::Intersecting => {}
    }

    let a = counter_clockwise(p1);
    let b = counter_clockwise(p2);
    let mut pieces = split_and_select(&a, &b, true);
    pieces.extend(split_and_select(&b, &a, false));
    tracing::debug!(pieces = pieces.len(), "union: kept boundary pieces");

    let ring = trace_outer(&pieces)?;
    Ok(drop_collinear_splits(ring))
}

fn counter_clockwise(p: &Polygon) -> Polygon {
    if p.signed_area() < 0.0 {
        p.reversed()
    } else {
        p.clone()
    }
}

/// Split the edges of `own` at every meeting point with `other` and keep the
/// pieces that lie on the union boundary.
fn split_and_select(own: &Polygon, other: &Polygon, keep_shared: bool) -> Vec<Piece> {
    let mut kept = Vec::new();
    for (a, b) in own.edges() {
        let ab = b - a;
        let len2 = ab.norm_squared();
        if len2 <= EPS * EPS {
            continue;
        }
        let param = |p: Point| (p - a).dot(&ab) / len2;

        let mut cuts: Vec<(f64, Point)> = vec![(0.0, a), (1.0, b)];
        for (c, d) in other.edges() {
            match segment_intersection(a, b, c, d) {
                SegmentIntersection::Disjoint => {}
                SegmentIntersection::Single(p) => cuts.push((param(p), p)),
                SegmentIntersection::Overlap(p, q) => {
                    cuts.push((param(p), p));
                    cuts.push((param(q), q));
                }
            }
        }
        cuts.sort_by(|x, y| x.0.total_cmp(&y.0));
        cuts.dedup_by(|x, y| points_equal(x.1, y.1));
        // The edge end may have been dropped as a duplicate of a nearby cut.
        if let Some(last) = cuts.last_mut() {
            last.1 = b;
        }

        for (k, w) in cuts.windows(2).enumerate() {
            let (s, e) = (w[0].1, w[1].1);
            if points_equal(s, e) {
                continue;
            }
            let mid = Point::from((s.to_vector() + e.to_vector()) * 0.5);
            let keep = if on_boundary(other, mid) {
                keep_shared && runs_along(other, mid, e - s)
            } else {
                !contains_point(other, mid)
            };
            if keep {
                kept.push(Piece {
                    start: s,
                    end: e,
                    start_is_vertex: k == 0,
                });
            }
        }
    }
    kept
}

/// Some edge of `polygon` through `p` points the same way as `dir`.
fn runs_along(polygon: &Polygon, p: Point, dir: Vector2<f64>) -> bool {
    polygon
        .edges()
        .any(|(c, d)| point_on_segment(c, d, p) && (d - c).dot(&dir) > 0.0)
}

/// Signed turn from `d_in` to `d_out`; negative turns right.
#[inline]
fn turn(d_in: Vector2<f64>, d_out: Vector2<f64>) -> f64 {
    cross(d_in, d_out).atan2(d_in.dot(&d_out))
}

fn trace_outer(pieces: &[Piece]) -> Result<Vec<Piece>> {
    let n = pieces.len();
    let Some(first) = (0..n).min_by(|&i, &j| {
        let (pi, pj) = (pieces[i].start, pieces[j].start);
        pi.y.total_cmp(&pj.y).then(pi.x.total_cmp(&pj.x)).then_with(|| {
            let (di, dj) = (pieces[i].dir(), pieces[j].dir());
            di.y.atan2(di.x).total_cmp(&dj.y.atan2(dj.x))
        })
    }) else {
        return Err(GeomError::OpenBoundary { steps: 0 });
    };
    let origin = pieces[first].start;
    let mut used = vec![false; n];
    let mut ring = Vec::with_capacity(n);
    let mut cur = first;
    for step in 0..n {
        used[cur] = true;
        ring.push(pieces[cur]);
        let end = pieces[cur].end;
        if points_equal(end, origin) {
            return Ok(ring);
        }
        let d_in = pieces[cur].dir();
        let next = (0..n)
            .filter(|&k| !used[k] && points_equal(pieces[k].start, end))
            .min_by(|&i, &j| turn(d_in, pieces[i].dir()).total_cmp(&turn(d_in, pieces[j].dir())));
        match next {
            Some(k) => cur = k,
            None => {
                tracing::debug!(step, ?end, "union: boundary walk stuck");
                return Err(GeomError::OpenBoundary { steps: step + 1 });
            }
        }
    }
    Err(GeomError::OpenBoundary { steps: n })
}

/// Ring of piece starts, minus split points that are straight pass-throughs.
fn drop_collinear_splits(ring: Vec<Piece>) -> Polygon {
    let mut nodes: Vec<(Point, bool)> = ring
        .into_iter()
        .map(|p| (p.start, p.start_is_vertex))
        .collect();
    let mut i = 0;
    while nodes.len() > 3 && i < nodes.len() {
        let n = nodes.len();
        let prev = nodes[(i + n - 1) % n].0;
        let (cur, is_vertex) = nodes[i];
        let next = nodes[(i + 1) % n].0;
        let straight = orient(prev, cur, next).abs() <= EPS * distance(prev, next)
            && (cur - prev).dot(&(next - cur)) > 0.0;
        if !is_vertex && straight {
            nodes.remove(i);
        } else {
            i += 1;
        }
    }
    nodes.into_iter().map(|(p, _)| p).collect()
}
