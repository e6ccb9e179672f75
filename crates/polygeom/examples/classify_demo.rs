//! Classify, hull and merge a few polygons, printing the results.
//!
//! The fmt subscriber also prints the library's debug events:
//!   cargo run -p polygeom --example classify_demo

use anyhow::Result;
use polygeom::prelude::*;
use tracing_subscriber::fmt::SubscriberBuilder;

fn square(x0: f64, y0: f64, side: f64) -> Polygon {
    [
        (x0, y0),
        (x0 + side, y0),
        (x0 + side, y0 + side),
        (x0, y0 + side),
    ]
    .into_iter()
    .map(Point::from)
    .collect()
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_max_level(tracing::Level::DEBUG)
        .with_target(false)
        .init();

    let outer = square(0.0, 0.0, 4.0);
    let inner = square(1.0, 1.0, 2.0);
    let apart = square(5.0, 5.0, 1.0);
    let overlap = square(2.0, 2.0, 4.0);

    for (name, p) in [("inner", &inner), ("apart", &apart), ("overlap", &overlap)] {
        println!("{name} vs outer: {}", classify_polygons(p, &outer));
    }

    let cloud: Vec<Point> = [(0.0, 0.0), (4.0, 0.0), (2.0, 4.0), (2.0, 1.0)]
        .into_iter()
        .map(Point::from)
        .collect();
    println!("hull: {}", convex_hull(&cloud));

    let merged = union(&outer, &overlap)?;
    println!("union ({} points, area {:.1}):\n{merged:#}", merged.len(), merged.area());

    match union(&outer, &apart) {
        Ok(p) => println!("unexpected union: {p}"),
        Err(e) => tracing::info!(%e, "disjoint union rejected"),
    }
    Ok(())
}
