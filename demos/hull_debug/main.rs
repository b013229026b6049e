//! Hull debug runner — prints the convex hull of a point list.
//!
//! Usage:
//! ```text
//! cargo run --example hull_debug                          # built-in sample
//! cargo run --example hull_debug -- 0,0 4,0 4,3 0,3 2,1   # explicit points
//! RUST_LOG=hullkit=trace cargo run --example hull_debug   # per-vertex trace
//! ```

use hullkit::{convex_hull, HullkitError, OperationError, Point2};

fn parse_point(arg: &str) -> Result<Point2, HullkitError> {
    let invalid = || OperationError::InvalidInput(format!("expected `x,y`, got `{arg}`"));
    let (x, y) = arg.split_once(',').ok_or_else(invalid)?;
    let x: f64 = x.trim().parse().map_err(|_| invalid())?;
    let y: f64 = y.trim().parse().map_err(|_| invalid())?;
    Ok(Point2::new(x, y))
}

fn sample_points() -> Vec<Point2> {
    vec![
        Point2::new(0.0, 0.0),
        Point2::new(0.0, 1.0),
        Point2::new(1.0, 0.0),
        Point2::new(1.0, 1.0),
        Point2::new(0.5, 0.5),
        Point2::new(0.25, 0.75),
        Point2::new(0.5, 0.0),
    ]
}

fn main() -> Result<(), HullkitError> {
    // Default: WARN for everything, INFO for hullkit.
    // Override with RUST_LOG env var (e.g. RUST_LOG=hullkit=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("hullkit=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let points = if args.is_empty() {
        sample_points()
    } else {
        args.iter()
            .map(|a| parse_point(a))
            .collect::<Result<Vec<_>, _>>()?
    };

    let hull = convex_hull(&points)?;
    tracing::info!(
        input = points.len(),
        vertices = hull.len(),
        degenerate = hull.is_degenerate(),
        "hull computed"
    );
    for v in hull.vertices() {
        println!("{:>12.6} {:>12.6}", v.x, v.y);
    }
    println!("area {:.6}", hull.signed_area());
    Ok(())
}
