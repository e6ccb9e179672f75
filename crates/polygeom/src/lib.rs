//! 2D polygon kernel: point sequences, primitives, predicates and algorithms.
//!
//! Layers (each depends only on the ones above it)
//! - `point`, `polygon`: value types. A `Polygon` is an ordered, circular
//!   sequence of points with 1-based positions.
//! - `primitives`: distance, angle, segment intersection, point-on-segment.
//! - `predicates`: validity, containment, equality, shape equality and
//!   topological classification (`Status`).
//! - `algorithms`: convex hull, angle sort, affine transforms, union.
//!
//! Conventions
//! - One absolute tolerance, `cfg::EPS`, is shared by every predicate.
//! - All operations are pure: inputs are borrowed, results are new values.
//! - Classification reports invalid input as `Status::Error`; sequence edits
//!   and `union` return `Result<_, GeomError>`.

pub mod algorithms;
pub mod cfg;
pub mod error;
pub mod point;
pub mod polygon;
pub mod predicates;
pub mod primitives;
mod render;
pub mod sample;
pub mod status;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use algorithms::{
    angle_sort, central_symmetry, convex_hull, rotate, scale, translate, union, Affine2,
};
pub use cfg::{GeomCfg, ANGLE_UNDEFINED, EPS};
pub use error::{GeomError, Result};
pub use point::Point;
pub use polygon::Polygon;
pub use predicates::{
    are_equal_polygons, classify_polygons, contains_point, have_same_shape, is_inside,
    is_outside, is_simple_polygon, is_valid_polygon, on_boundary,
};
pub use primitives::{
    angle, distance, point_on_segment, points_equal, segment_intersection, segments_intersect,
    SegmentIntersection,
};
pub use status::Status;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::algorithms::{
        angle_sort, central_symmetry, convex_hull, rotate, scale, translate, union,
    };
    pub use crate::predicates::{classify_polygons, contains_point, is_valid_polygon};
    pub use crate::primitives::{angle, distance, segments_intersect};
    pub use crate::{GeomError, Point, Polygon, Status};
}
