//! Topological relation between two polygons, as reported by
//! `classify_polygons(p1, p2)` (read: "p1 is <status> p2").

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Status {
    /// Every vertex of p1 lies in p2 and no edges meet.
    Inside,
    /// Neither contains the other and no edges meet.
    Outside,
    /// Same vertex sequence up to the starting index.
    Equal,
    /// Some edge of p1 meets some edge of p2.
    Intersecting,
    /// Every vertex of p2 lies in p1 and no edges meet.
    Enclosing,
    /// One of the inputs is not a valid polygon.
    Error,
}

impl Status {
    /// Status of `(p2, p1)` given the status of `(p1, p2)`.
    #[inline]
    pub fn converse(self) -> Status {
        match self {
            Status::Inside => Status::Enclosing,
            Status::Enclosing => Status::Inside,
            s => s,
        }
    }
}
