use super::Point2;

/// Returns `true` if `p3` lies inside the axis-aligned box spanned by the
/// opposite corners `p1` and `p2`, boundary included.
///
/// The corners may be given in any order. Unlike segment membership, this
/// comparison is exact.
#[must_use]
pub fn is_inside_rectangle(p1: &Point2, p2: &Point2, p3: &Point2) -> bool {
    p3.x <= p1.x.max(p2.x)
        && p3.x >= p1.x.min(p2.x)
        && p3.y <= p1.y.max(p2.y)
        && p3.y >= p1.y.min(p2.y)
}
