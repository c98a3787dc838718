use tracing::{debug, trace};

use crate::error::{OperationError, Result};
use crate::geometry::{ImplicitLine, Rect};
use crate::math::distance_2d::is_on_segment;
use crate::math::intersect_2d::line_line_intersect;
use crate::math::rect_2d::is_inside_rectangle;
use crate::math::{is_finite, Point2};

/// Why a segment was found to intersect a rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RectHit {
    /// A segment endpoint (0 = start, 1 = end) lies inside the rectangle.
    Contained { endpoint: usize },
    /// The segment runs along edge `edge` and covers one of its corners.
    AlongEdge { edge: usize },
    /// The segment crosses edge `edge` at `point`.
    Crossing { edge: usize, point: Point2 },
}

/// Tests whether a line segment intersects an axis-aligned rectangle.
///
/// A segment touching the boundary, or with an endpoint inside, counts as
/// intersecting. Edges are indexed as in [`Rect::edges`].
pub struct SegmentRectIntersect {
    start: Point2,
    end: Point2,
    rect: Rect,
}

impl SegmentRectIntersect {
    /// Creates a new `SegmentRectIntersect` query.
    #[must_use]
    pub fn new(start: Point2, end: Point2, rect: Rect) -> Self {
        Self { start, end, rect }
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self) -> bool {
        self.first_hit().is_some()
    }

    /// Executes the query after checking that every coordinate is finite.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if a segment endpoint or a
    /// rectangle corner has a NaN or infinite coordinate.
    pub fn try_execute(&self) -> Result<bool> {
        let inputs = [
            ("segment start", &self.start),
            ("segment end", &self.end),
            ("rectangle corner p1", self.rect.p1()),
            ("rectangle corner p2", self.rect.p2()),
        ];
        for (name, p) in inputs {
            if !is_finite(p) {
                return Err(OperationError::InvalidInput(format!(
                    "{name} ({}, {}) is not finite",
                    p.x, p.y
                ))
                .into());
            }
        }
        Ok(self.execute())
    }

    /// Returns the first reason found for the segment to intersect the
    /// rectangle, or `None` if it does not.
    ///
    /// Endpoint containment is checked first, then the edges in order.
    #[must_use]
    pub fn first_hit(&self) -> Option<RectHit> {
        let (pt1, pt2) = (&self.start, &self.end);
        let corners = self.rect.corners();

        for (endpoint, pt) in [pt1, pt2].into_iter().enumerate() {
            if is_inside_rectangle(&corners[0], &corners[2], pt) {
                debug!(endpoint, x = pt.x, y = pt.y, "segment endpoint inside rectangle");
                return Some(RectHit::Contained { endpoint });
            }
        }

        let line = ImplicitLine::through(pt1, pt2);

        for (edge, (c0, c1)) in self.rect.edges().iter().enumerate() {
            let edge_line = ImplicitLine::through(c0, c1);

            if line.same_as(&edge_line) {
                // Overlap is only detected through the edge's corners.
                if is_on_segment(pt1, pt2, c0) || is_on_segment(pt1, pt2, c1) {
                    debug!(edge, "segment runs along rectangle edge");
                    return Some(RectHit::AlongEdge { edge });
                }
                trace!(edge, "collinear with edge, no corner covered");
                continue;
            }

            match line_line_intersect(&line, &edge_line) {
                Some(point) if is_on_segment(pt1, pt2, &point) && is_on_segment(c0, c1, &point) => {
                    debug!(edge, x = point.x, y = point.y, "segment crosses rectangle edge");
                    return Some(RectHit::Crossing { edge, point });
                }
                Some(point) => {
                    trace!(edge, x = point.x, y = point.y, "line crossing outside segment or edge");
                }
                None => trace!(edge, "parallel to edge"),
            }
        }

        None
    }
}

/// Returns whether the segment from `start` to `end` intersects `rect`.
#[must_use]
pub fn intersects(start: Point2, end: Point2, rect: &Rect) -> bool {
    SegmentRectIntersect::new(start, end, *rect).execute()
}
