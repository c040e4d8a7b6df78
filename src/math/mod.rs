pub mod antimeridian;
pub mod orientation;

/// 2D point type; x is longitude and y is latitude.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Longitude of the antimeridian, in degrees.
pub const ANTIMERIDIAN: f64 = 180.0;

/// Tolerance for degenerate longitude spans.
pub const TOLERANCE: f64 = 1e-10;
