use super::{Point2, TOLERANCE};
use crate::geometry::ImplicitLine;

/// Intersection of two infinite lines in implicit form.
///
/// Returns `None` when the lines are parallel, which includes coincident
/// lines: only `a` and `b` are compared, `c` is ignored. Use
/// [`ImplicitLine::same_as`] to tell the coincident case apart.
///
/// Near-parallel lines that slip past the tolerance test divide by a tiny
/// determinant and yield a far-away (or non-finite) point.
#[must_use]
pub fn line_line_intersect(l1: &ImplicitLine, l2: &ImplicitLine) -> Option<Point2> {
    if (l1.a() - l2.a()).abs() < TOLERANCE && (l1.b() - l2.b()).abs() < TOLERANCE {
        return None;
    }

    let x = (l2.b() * l1.c() - l1.b() * l2.c()) / (l2.a() * l1.b() - l1.a() * l2.b());

    // Back-substitute into whichever line is not vertical.
    let y = if l1.b().abs() > TOLERANCE {
        -(l1.a() * x + l1.c())
    } else {
        -(l2.a() * x + l2.c())
    };
    Some(Point2::new(x, y))
}
