pub mod intersect_2d;
pub mod polygon_2d;
pub mod segment_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
///
/// Absolute, so it assumes coordinates in a consistent unit scale where
/// a millionth of a unit is negligible.
pub const TOLERANCE: f64 = 1e-6;
