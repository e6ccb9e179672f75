//! Property tests for the kernel's algebraic guarantees.

use polygeom::prelude::*;
use polygeom::primitives::point_on_segment;
use polygeom::sample::{draw_convex_polygon, draw_star_polygon, ReplayToken, StarCfg};
use polygeom::{are_equal_polygons, ANGLE_UNDEFINED};
use proptest::prelude::*;

fn point() -> impl Strategy<Value = Point> {
    (-100.0..100.0f64, -100.0..100.0f64).prop_map(Point::from)
}

fn points(max: usize) -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec(point(), 1..max)
}

#[derive(Clone, Debug)]
enum Edit {
    Append(Point),
    Remove(usize),
    Clear,
}

fn edit() -> impl Strategy<Value = Edit> {
    prop_oneof![
        4 => point().prop_map(Edit::Append),
        3 => (0usize..12).prop_map(Edit::Remove),
        1 => Just(Edit::Clear),
    ]
}

fn star(seed: u64, dx: f64, dy: f64) -> Polygon {
    let p = draw_star_polygon(StarCfg::default(), ReplayToken { seed, index: 0 });
    translate(&p, Point::origin(), Point::new(dx, dy))
}

proptest! {
    #[test]
    fn translate_round_trip(pts in points(20), a in point(), b in point()) {
        let p = Polygon::from(pts);
        let back = translate(&translate(&p, a, b), b, a);
        prop_assert!(are_equal_polygons(&back, &p));
    }

    #[test]
    fn rotate_round_trip(pts in points(20), c in point(), th in -6.3..6.3f64) {
        let p = Polygon::from(pts);
        let back = rotate(&rotate(&p, c, th), c, -th);
        for (u, v) in back.iter().zip(p.iter()) {
            prop_assert!(distance(*u, *v) < 1e-9);
        }
    }

    #[test]
    fn convex_hull_is_idempotent(pts in points(40)) {
        let once = convex_hull(&pts);
        let twice = convex_hull(once.points());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn convex_hull_contains_its_input(pts in points(40)) {
        let hull = convex_hull(&pts);
        if is_valid_polygon(&hull) {
            for p in &pts {
                prop_assert!(contains_point(&hull, *p));
            }
        }
    }

    #[test]
    fn positions_stay_contiguous(edits in prop::collection::vec(edit(), 0..60)) {
        let mut p = Polygon::new();
        for e in edits {
            let before = p.len();
            match e {
                Edit::Append(q) => {
                    p.append(q);
                    prop_assert_eq!(p.len(), before + 1);
                    prop_assert_eq!(p.get(p.len()), Some(&q));
                }
                Edit::Remove(i) => {
                    let res = p.remove_at(i);
                    if (1..=before).contains(&i) {
                        prop_assert!(res.is_ok());
                        prop_assert_eq!(p.len(), before - 1);
                    } else {
                        prop_assert_eq!(
                            res,
                            Err(GeomError::InvalidIndex { index: i, len: before })
                        );
                        prop_assert_eq!(p.len(), before);
                    }
                }
                Edit::Clear => {
                    p.clear();
                    prop_assert!(p.is_empty());
                }
            }
            let positions: Vec<usize> = p.indexed().map(|(i, _)| i).collect();
            prop_assert_eq!(positions, (1..=p.len()).collect::<Vec<_>>());
        }
    }

    #[test]
    fn classification_is_converse_symmetric(
        s1 in 0u64..1000,
        s2 in 0u64..1000,
        dx in -3.0..3.0f64,
        dy in -3.0..3.0f64,
    ) {
        let a = star(s1, 0.0, 0.0);
        let b = star(s2, dx, dy);
        let ab = classify_polygons(&a, &b);
        let ba = classify_polygons(&b, &a);
        prop_assert_eq!(ab.converse(), ba);
        prop_assert_eq!(ab == Status::Intersecting, ba == Status::Intersecting);
        prop_assert_eq!(classify_polygons(&a, &a), Status::Equal);
        if ab == Status::Inside {
            for v in a.iter() {
                prop_assert!(contains_point(&b, *v));
            }
        }
    }

    #[test]
    fn shrunken_convex_polygon_is_inside(seed in 0u64..1000, f in 0.1..0.9f64) {
        let outer = draw_convex_polygon(StarCfg::default(), ReplayToken { seed, index: 1 });
        let inner = scale(&outer, f);
        prop_assert_eq!(classify_polygons(&inner, &outer), Status::Inside);
        prop_assert_eq!(classify_polygons(&outer, &inner), Status::Enclosing);
        prop_assert!(inner.iter().all(|v| contains_point(&outer, *v)));
        prop_assert_eq!(union(&outer, &inner), Ok(outer.clone()));
    }

    #[test]
    fn angle_is_in_range_or_sentinel(a in point(), b in point(), c in point()) {
        let th = angle(a, b, c);
        prop_assert!((0.0..=std::f64::consts::PI).contains(&th) || th == ANGLE_UNDEFINED);
        prop_assert_eq!(angle(b, b, c), ANGLE_UNDEFINED);
    }

    #[test]
    fn intersections_lie_on_both_segments(a1 in point(), a2 in point(), b1 in point(), b2 in point()) {
        let hit = segments_intersect(a1, a2, b1, b2);
        prop_assert_eq!(hit.is_some(), segments_intersect(b1, b2, a1, a2).is_some());
        if let Some(p) = hit {
            prop_assert!(point_on_segment(a1, a2, p));
            prop_assert!(point_on_segment(b1, b2, p));
        }
    }

    #[test]
    fn union_contains_both_inputs(s1 in 0u64..1000, s2 in 0u64..1000, dx in -0.5..0.5f64) {
        let a = star(s1, 0.0, 0.0);
        let b = star(s2, dx, 0.0);
        let u = union(&a, &b).expect("stars around nearby centers overlap");
        prop_assert!(u.area() + 1e-9 >= a.area().max(b.area()));
        for v in a.iter().chain(b.iter()) {
            prop_assert!(contains_point(&u, *v));
        }
    }
}
