//! Segment versus axis-aligned rectangle intersection in 2D.
//!
//! ```
//! use segrect::{intersects, Point2, Rect};
//!
//! let rect = Rect::new(Point2::new(-1.0, 0.0), Point2::new(2.0, -3.0));
//! assert!(intersects(Point2::new(2.0, -5.0), Point2::new(-10.0, 3.0), &rect));
//! ```

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{Result, SegrectError};
pub use geometry::{ImplicitLine, Rect};
pub use math::{Point2, TOLERANCE};
pub use operations::query::{intersects, RectHit, SegmentRectIntersect};
