pub mod distance_2d;
pub mod intersect_2d;
pub mod rect_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// Global geometric tolerance for floating-point comparisons.
///
/// Line equality, the parallel test and segment membership all compare
/// against this one value. Coincident-edge detection relies on them agreeing.
pub const TOLERANCE: f64 = 1e-9;

/// Returns `true` if both coordinates of `p` are finite.
#[must_use]
pub fn is_finite(p: &Point2) -> bool {
    p.x.is_finite() && p.y.is_finite()
}
