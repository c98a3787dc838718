use crate::math::rect_2d::is_inside_rectangle;
use crate::math::Point2;

/// An axis-aligned rectangle given by two opposite corners.
///
/// Either diagonal may be used and the corners may come in any order; `p1`
/// need not be the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    p1: Point2,
    p2: Point2,
}

impl Rect {
    /// Creates a rectangle from two opposite corners.
    #[must_use]
    pub fn new(p1: Point2, p2: Point2) -> Self {
        Self { p1, p2 }
    }

    /// Returns the first corner as given.
    #[must_use]
    pub fn p1(&self) -> &Point2 {
        &self.p1
    }

    /// Returns the second corner as given.
    #[must_use]
    pub fn p2(&self) -> &Point2 {
        &self.p2
    }

    /// Returns the corner with the smallest coordinates.
    #[must_use]
    pub fn min(&self) -> Point2 {
        Point2::new(self.p1.x.min(self.p2.x), self.p1.y.min(self.p2.y))
    }

    /// Returns the corner with the largest coordinates.
    #[must_use]
    pub fn max(&self) -> Point2 {
        Point2::new(self.p1.x.max(self.p2.x), self.p1.y.max(self.p2.y))
    }

    /// Returns the four corners in boundary order.
    ///
    /// `[p1, (p1.x, p2.y), p2, (p2.x, p1.y)]`: entries 0 and 2 are the stored
    /// corners, entries 1 and 3 swap one `y` each.
    #[must_use]
    pub fn corners(&self) -> [Point2; 4] {
        [
            self.p1,
            Point2::new(self.p1.x, self.p2.y),
            self.p2,
            Point2::new(self.p2.x, self.p1.y),
        ]
    }

    /// Returns the four boundary edges as consecutive corner pairs,
    /// wrapping from the last corner back to the first.
    #[must_use]
    pub fn edges(&self) -> [(Point2, Point2); 4] {
        let c = self.corners();
        [(c[0], c[1]), (c[1], c[2]), (c[2], c[3]), (c[3], c[0])]
    }

    /// Returns whether `p` lies inside the rectangle, boundary included.
    ///
    /// The comparison is exact.
    #[must_use]
    pub fn contains(&self, p: &Point2) -> bool {
        is_inside_rectangle(&self.p1, &self.p2, p)
    }
}
