//! Planar convex hulls by gift wrapping, plus small 2D geometry helpers.

pub mod error;
pub mod math;
pub mod operations;

pub use error::{HullError, HullkitError, OperationError, Result};
pub use math::{Point2, Vector2};
pub use operations::hull::{convex_hull, ConvexHull, Hull, HullParams};
