//! Polygon algorithms: convex hull, angle sort, affine transforms and union.
//!
//! Every function reads its inputs and returns a freshly built `Polygon`
//! (or `Result<Polygon>` for `union`); nothing is modified in place.

mod hull;
mod transform;
mod union;

pub use hull::{angle_sort, convex_hull};
pub use transform::{central_symmetry, rotate, scale, translate, Affine2};
pub use union::union;
