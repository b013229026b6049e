pub mod angle_2d;
pub mod bounds_2d;
pub mod distance_2d;
pub mod kinematics_2d;
pub mod polygon_2d;
pub mod pseudo_angle;
pub mod scalar;
pub mod search_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
///
/// Only the validation helpers use it; the hull core compares exactly.
pub const TOLERANCE: f64 = 1e-10;
