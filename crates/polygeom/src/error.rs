//! Error taxonomy for operations that can refuse their input.
//!
//! Classification never fails (it reports `Status::Error`), and the geometric
//! primitives are total; only sequence edits and `union` return `Result`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeomError {
    /// 1-based index outside `1..=len`.
    #[error("index {index} out of range for polygon of {len} points")]
    InvalidIndex { index: usize, len: usize },

    /// Input has fewer than three points or all of them are collinear.
    #[error("not a valid polygon ({len} points)")]
    InvalidPolygon { len: usize },

    /// The two inputs share no point, so their union is not one boundary.
    #[error("polygons are disjoint; union has no single boundary")]
    Disjoint,

    /// Boundary walk did not return to its starting point.
    #[error("union boundary did not close after {steps} steps")]
    OpenBoundary { steps: usize },
}

pub type Result<T> = std::result::Result<T, GeomError>;
