mod segment_rect;

pub use segment_rect::{intersects, RectHit, SegmentRectIntersect};
