//! Reproducible random point clouds and polygons (tests, benchmarks).
//!
//! Model
//! - Star polygons: `n` angles spaced evenly on `[0, 2π)` with bounded
//!   angular jitter, each at a jittered radius. Angles stay strictly
//!   increasing, so the result is simple; from four vertices on every gap is
//!   below π, so it is also counter-clockwise and contains the origin.
//! - Point clouds: uniform in the square `[-h, h]²`.
//! - Determinism uses a replay token `(seed, index)` mixed into one RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::algorithms::convex_hull;
use crate::point::Point;
use crate::polygon::Polygon;

/// Star polygon sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct StarCfg {
    /// Vertex count is drawn from `min_vertices..=max_vertices`; both are
    /// raised to at least 4 so every draw is counter-clockwise.
    pub min_vertices: usize,
    pub max_vertices: usize,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radii are `base_radius * (1 + u)` with `u ∈ [-radial_jitter, radial_jitter]`.
    /// Clamped to [0, 0.95] so every radius stays positive.
    pub radial_jitter: f64,
    pub base_radius: f64,
    pub random_phase: bool,
}

impl StarCfg {
    /// Default draw with exactly `n` vertices.
    pub fn with_vertices(n: usize) -> Self {
        Self {
            min_vertices: n,
            max_vertices: n,
            ..Self::default()
        }
    }
}

impl Default for StarCfg {
    fn default() -> Self {
        Self {
            min_vertices: 12,
            max_vertices: 12,
            angle_jitter_frac: 0.3,
            radial_jitter: 0.5,
            base_radius: 1.0,
            random_phase: true,
        }
    }
}

/// Replay token: draw `index` of the stream named by `seed`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    fn rng(self) -> StdRng {
        let index = self.index.wrapping_mul(0x9e37_79b9_7f4a_7c15).rotate_left(29);
        StdRng::seed_from_u64(self.seed ^ index)
    }
}

/// Simple polygon with vertices in angular order around the origin.
pub fn draw_star_polygon(cfg: StarCfg, tok: ReplayToken) -> Polygon {
    let mut rng = tok.rng();
    let lo = cfg.min_vertices.max(4);
    let n = rng.gen_range(lo..=cfg.max_vertices.max(lo));
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.95);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = std::f64::consts::TAU / (n as f64);
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * std::f64::consts::TAU
    } else {
        0.0
    };
    (0..n)
        .map(|k| {
            let th = phase + (k as f64 + (rng.gen::<f64>() * 2.0 - 1.0) * aj) * delta;
            let r = r0 * (1.0 + (rng.gen::<f64>() * 2.0 - 1.0) * rj);
            Point::new(th.cos() * r, th.sin() * r)
        })
        .collect()
}

/// Convex polygon: hull of a star draw.
pub fn draw_convex_polygon(cfg: StarCfg, tok: ReplayToken) -> Polygon {
    convex_hull(draw_star_polygon(cfg, tok).points())
}

/// `n` points uniform in `[-half_width, half_width]²`.
pub fn draw_point_cloud(n: usize, half_width: f64, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.rng();
    let h = half_width.abs().max(1e-9);
    (0..n)
        .map(|_| Point::new(rng.gen_range(-h..=h), rng.gen_range(-h..=h)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicates::{contains_point, is_simple_polygon};

    #[test]
    fn reproducible_draw() {
        let tok = ReplayToken { seed: 42, index: 7 };
        let p1 = draw_star_polygon(StarCfg::default(), tok);
        let p2 = draw_star_polygon(StarCfg::default(), tok);
        assert_eq!(p1.points(), p2.points());
        let other = draw_star_polygon(StarCfg::default(), ReplayToken { seed: 42, index: 8 });
        assert_ne!(p1.points(), other.points());
    }

    #[test]
    fn star_polygons_are_simple_and_ccw() {
        let cfg = StarCfg {
            min_vertices: 3,
            max_vertices: 30,
            ..StarCfg::default()
        };
        for index in 0..50 {
            let p = draw_star_polygon(cfg, ReplayToken { seed: 1, index });
            assert!((4..=30).contains(&p.len()));
            assert!(p.is_ccw());
            assert!(is_simple_polygon(&p));
            assert!(contains_point(&p, Point::origin()));
        }
    }

    #[test]
    fn fixed_vertex_count() {
        for n in [4, 9, 64] {
            let tok = ReplayToken { seed: 3, index: n as u64 };
            let p = draw_star_polygon(StarCfg::with_vertices(n), tok);
            assert_eq!(p.len(), n);
        }
        let tiny = draw_star_polygon(StarCfg::with_vertices(2), ReplayToken { seed: 3, index: 0 });
        assert_eq!(tiny.len(), 4);
    }

    #[test]
    fn point_cloud_stays_in_box() {
        let pts = draw_point_cloud(100, 2.5, ReplayToken { seed: 0, index: 0 });
        assert_eq!(pts.len(), 100);
        assert!(pts.iter().all(|p| p.x.abs() <= 2.5 && p.y.abs() <= 2.5));
    }

    #[test]
    fn convex_draw_is_convex() {
        let p = draw_convex_polygon(StarCfg::default(), ReplayToken { seed: 2, index: 3 });
        let n = p.len();
        assert!(n >= 3);
        for i in 0..n {
            let (a, b, c) = (p.points()[i], p.points()[(i + 1) % n], p.points()[(i + 2) % n]);
            assert!(crate::primitives::orient(a, b, c) > 0.0);
        }
    }
}
