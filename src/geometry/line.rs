use crate::error::{GeometryError, Result};
use crate::math::intersect_2d::line_line_intersect;
use crate::math::{is_finite, Point2, TOLERANCE};

/// An infinite 2D line in implicit form: `a*x + b*y + c = 0`.
///
/// The coefficients are normalized so that `b` is exactly `0.0` (vertical
/// line, with `a = 1`) or exactly `1.0`. Two lines built from different point
/// pairs on the same geometric line therefore carry near-identical
/// coefficients, which is what makes [`ImplicitLine::same_as`] meaningful.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImplicitLine {
    a: f64,
    b: f64,
    c: f64,
}

impl ImplicitLine {
    /// Creates the line through `p1` and `p2`.
    ///
    /// Inputs are not validated. Coincident points take the vertical branch
    /// and non-finite coordinates propagate into the coefficients. See
    /// [`ImplicitLine::try_through`] for a checked variant.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn through(p1: &Point2, p2: &Point2) -> Self {
        if p1.x == p2.x {
            Self {
                a: 1.0,
                b: 0.0,
                c: -p1.x,
            }
        } else {
            let a = -(p1.y - p2.y) / (p1.x - p2.x);
            Self {
                a,
                b: 1.0,
                c: -(a * p1.x) - p1.y,
            }
        }
    }

    /// Creates the line through `p1` and `p2`, rejecting degenerate input.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::NonFinite` if a coordinate is NaN or infinite,
    /// and `GeometryError::CoincidentPoints` if `p1 == p2`.
    pub fn try_through(p1: &Point2, p2: &Point2) -> Result<Self> {
        for p in [p1, p2] {
            if !is_finite(p) {
                return Err(GeometryError::NonFinite { x: p.x, y: p.y }.into());
            }
        }
        if p1 == p2 {
            return Err(GeometryError::CoincidentPoints { x: p1.x, y: p1.y }.into());
        }
        Ok(Self::through(p1, p2))
    }

    /// Returns the `x` coefficient.
    #[must_use]
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Returns the `y` coefficient (`0.0` or `1.0`).
    #[must_use]
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Returns the constant term.
    #[must_use]
    pub fn c(&self) -> f64 {
        self.c
    }

    /// Returns whether this line is vertical (`b == 0`).
    #[must_use]
    pub fn is_vertical(&self) -> bool {
        self.b.abs() < TOLERANCE
    }

    /// Returns whether both lines describe the same geometric line.
    ///
    /// Each coefficient pair is compared by absolute difference against
    /// [`TOLERANCE`], with no relative scaling.
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        (self.a - other.a).abs() < TOLERANCE
            && (self.b - other.b).abs() < TOLERANCE
            && (self.c - other.c).abs() < TOLERANCE
    }

    /// Returns the point where this line meets `other`, or `None` if parallel.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Option<Point2> {
        line_line_intersect(self, other)
    }
}
