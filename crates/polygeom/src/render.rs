//! Text rendering through `std::fmt::Display`.
//!
//! - `Point`: `(x, y)`.
//! - `Polygon`: points in traversal order, `[(x1, y1), (x2, y2), ...]`.
//!   The alternate flag (`{:#}`) writes one `index: (x, y)` line per point.
//! - `Status`: upper-case name.
//!
//! Float formatting follows the caller's precision, e.g. `{:.2}`.

use std::fmt;

use crate::point::Point;
use crate::polygon::Polygon;
use crate::status::Status;

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(prec) => write!(f, "({:.*}, {:.*})", prec, self.x, prec, self.y),
            None => write!(f, "({}, {})", self.x, self.y),
        }
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            for (i, p) in self.indexed() {
                write!(f, "{i}: ")?;
                fmt::Display::fmt(p, f)?;
                writeln!(f)?;
            }
            return Ok(());
        }
        f.write_str("[")?;
        for (k, p) in self.iter().enumerate() {
            if k > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(p, f)?;
        }
        f.write_str("]")
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Status::Inside => "INSIDE",
            Status::Outside => "OUTSIDE",
            Status::Equal => "EQUAL",
            Status::Intersecting => "INTERSECTING",
            Status::Enclosing => "ENCLOSING",
            Status::Error => "ERROR",
        };
        f.write_str(name)
    }
}
