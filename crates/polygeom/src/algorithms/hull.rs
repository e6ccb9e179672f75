use std::f64::consts::PI;

use crate::cfg::EPS;
use crate::point::Point;
use crate::polygon::Polygon;
use crate::primitives::{distance, orient, points_equal};

/// Sort key of `p` around `pivot`: signed angle from the upward vertical,
/// counter-clockwise positive, in `(-π, π]`. Points on the pivot sort first.
#[inline]
fn sort_angle(pivot: Point, p: Point) -> f64 {
    if points_equal(pivot, p) {
        return f64::NEG_INFINITY;
    }
    let v = p - pivot;
    // atan2 yields -π or π straight below depending on the sign of zero.
    let a = (-v.x).atan2(v.y);
    if a <= -PI {
        PI
    } else {
        a + 0.0
    }
}

/// `a` and `b` lie on the same ray out of `pivot` (within `EPS`).
fn same_ray(pivot: Point, a: Point, b: Point) -> bool {
    let da = distance(pivot, a);
    if da <= EPS || distance(pivot, b) <= EPS {
        return false;
    }
    orient(pivot, a, b).abs() / da <= EPS && (a - pivot).dot(&(b - pivot)) > 0.0
}

/// Reorder points by ascending angle around `pivot`, measured from the
/// upward vertical through `pivot` (counter-clockwise positive); points on a
/// common ray are ordered by ascending distance from `pivot`.
///
/// For a pivot with the lowest `y` (then lowest `x`) this is the
/// counter-clockwise sweep starting at the horizontal to the right.
pub fn angle_sort(polygon: &Polygon, pivot: Point) -> Polygon {
    let mut keyed: Vec<(f64, f64, Point)> = polygon
        .iter()
        .map(|&p| (sort_angle(pivot, p), distance(pivot, p), p))
        .collect();
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.total_cmp(&b.1)));
    // Rounding can split a ray's angle into slightly different keys; regroup
    // each collinear run so the distance tie-break still holds.
    let mut i = 0;
    while i < keyed.len() {
        let mut j = i + 1;
        while j < keyed.len() && same_ray(pivot, keyed[i].2, keyed[j].2) {
            j += 1;
        }
        keyed[i..j].sort_by(|a, b| a.1.total_cmp(&b.1));
        i = j;
    }
    keyed.into_iter().map(|(_, _, p)| p).collect()
}

/// Graham scan convex hull.
///
/// Output is counter-clockwise, starts at the lowest (then leftmost) point,
/// lists each hull vertex once and drops points on hull edges. Collinear
/// input yields the two extreme points; a single distinct point yields one.
pub fn convex_hull(points: &[Point]) -> Polygon {
    let mut pts: Vec<Point> = points.iter().copied().filter(|p| p.is_finite()).collect();
    pts.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    pts.dedup_by(|a, b| points_equal(*a, *b));

    let Some(pivot_idx) = (0..pts.len()).min_by(|&i, &j| {
        pts[i]
            .y
            .total_cmp(&pts[j].y)
            .then(pts[i].x.total_cmp(&pts[j].x))
    }) else {
        return Polygon::new();
    };
    let pivot = pts.swap_remove(pivot_idx);
    let sorted = angle_sort(&Polygon::from(pts), pivot);

    let mut stack: Vec<Point> = Vec::with_capacity(sorted.len() + 1);
    stack.push(pivot);
    for &p in sorted.iter() {
        if points_equal(p, pivot) {
            continue;
        }
        while stack.len() >= 2 {
            let a = stack[stack.len() - 2];
            let b = stack[stack.len() - 1];
            // Keep `b` only on a strict left turn.
            if orient(a, b, p) > EPS * distance(a, p) {
                break;
            }
            stack.pop();
        }
        stack.push(p);
    }
    tracing::trace!(input = points.len(), hull = stack.len(), "convex_hull");
    Polygon::from(stack)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn angle_sort_sweeps_counter_clockwise_from_vertical() {
        let pivot = Point::new(0.0, 0.0);
        let input = Polygon::from(pts(&[(-1.0, 1.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0)]));
        let sorted = angle_sort(&input, pivot);
        assert_eq!(
            sorted.points(),
            pts(&[(1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (-1.0, 1.0)]).as_slice()
        );
    }

    #[test]
    fn angle_sort_puts_points_straight_below_last() {
        let pivot = Point::new(0.0, 0.0);
        let expected = pts(&[(1.0, 0.0), (-1.0, -1.0), (0.0, -1.0)]);
        let input = Polygon::from(pts(&[(1.0, 0.0), (0.0, -1.0), (-1.0, -1.0)]));
        assert_eq!(angle_sort(&input, pivot).points(), &expected[..]);

        // Same answer whatever the sign of the zero offset.
        let neg_zero = Polygon::from(pts(&[(1.0, 0.0), (-0.0, -1.0), (-1.0, -1.0)]));
        let sorted = angle_sort(&neg_zero, pivot);
        assert_eq!(sorted.points()[2].x.to_bits(), (-0.0f64).to_bits());
        assert_eq!(sorted.points()[1], Point::new(-1.0, -1.0));
    }

    #[test]
    fn angle_sort_pivot_above_all_points() {
        let pivot = Point::new(0.0, 2.0);
        let input = Polygon::from(pts(&[(0.0, 0.0), (-1.0, 0.0), (1.0, 0.0), (0.0, 1.0)]));
        let sorted = angle_sort(&input, pivot);
        assert_eq!(
            sorted.points(),
            &pts(&[(1.0, 0.0), (-1.0, 0.0), (0.0, 1.0), (0.0, 0.0)])[..]
        );
    }

    #[test]
    fn angle_sort_breaks_ties_by_distance() {
        let pivot = Point::new(1.0, 1.0);
        let input = Polygon::from(pts(&[(4.0, 4.0), (2.0, 2.0), (1.0, 1.0), (3.0, 3.0)]));
        let sorted = angle_sort(&input, pivot);
        assert_eq!(
            sorted.points(),
            pts(&[(1.0, 1.0), (2.0, 2.0), (3.0, 3.0), (4.0, 4.0)]).as_slice()
        );
        // Ray with an irrational slope, where keys may differ in the last bit.
        let s = 0.1f64;
        let far = Point::new(7.0 * s, 3.0 * s);
        let near = Point::new(0.7 * s, 0.3 * s);
        let sorted = angle_sort(&Polygon::from(vec![far, near]), Point::origin());
        assert_eq!(sorted.points(), &[near, far]);
    }

    #[test]
    fn hull_drops_interior_point() {
        let hull = convex_hull(&pts(&[(0.0, 0.0), (4.0, 0.0), (2.0, 4.0), (2.0, 1.0)]));
        let triangle = Polygon::from(pts(&[(0.0, 0.0), (4.0, 0.0), (2.0, 4.0)]));
        assert_eq!(hull, triangle);
        assert_eq!(hull.len(), 3);
    }

    #[test]
    fn hull_drops_points_on_edges_and_duplicates() {
        let input = pts(&[
            (0.0, 0.0),
            (1.0, 0.0),
            (2.0, 0.0),
            (2.0, 1.0),
            (2.0, 2.0),
            (1.0, 2.0),
            (0.0, 2.0),
            (0.0, 1.0),
            (1.0, 1.0),
            (2.0, 2.0),
        ]);
        let hull = convex_hull(&input);
        assert_eq!(
            hull.points(),
            pts(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]).as_slice()
        );
        assert!(hull.is_ccw());
    }

    #[test]
    fn hull_of_degenerate_input() {
        assert!(convex_hull(&[]).is_empty());
        let one = convex_hull(&pts(&[(3.0, 3.0), (3.0, 3.0)]));
        assert_eq!(one.points(), pts(&[(3.0, 3.0)]).as_slice());
        let line = convex_hull(&pts(&[(2.0, 2.0), (0.0, 0.0), (1.0, 1.0), (3.0, 3.0)]));
        assert_eq!(line.points(), pts(&[(0.0, 0.0), (3.0, 3.0)]).as_slice());
        let flat = convex_hull(&pts(&[(5.0, 1.0), (1.0, 1.0), (3.0, 1.0)]));
        assert_eq!(flat.points(), pts(&[(1.0, 1.0), (5.0, 1.0)]).as_slice());
    }

    #[test]
    fn hull_is_idempotent() {
        let input = pts(&[
            (0.3, -1.2),
            (2.5, 0.4),
            (1.1, 3.3),
            (-2.0, 1.0),
            (0.0, 0.0),
            (-1.5, -0.7),
            (1.0, 1.0),
        ]);
        let once = convex_hull(&input);
        let twice = convex_hull(once.points());
        assert_eq!(once.points(), twice.points());
    }
}
