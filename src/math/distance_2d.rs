use super::{Point2, TOLERANCE};

/// Returns the Euclidean distance between `p1` and `p2`.
#[must_use]
pub fn distance(p1: &Point2, p2: &Point2) -> f64 {
    ((p1.x - p2.x).powi(2) + (p1.y - p2.y).powi(2)).sqrt()
}

/// Returns `true` if `p3` lies on the segment from `p1` to `p2`.
///
/// `p3` must already be known to lie on the infinite line through `p1` and
/// `p2` (for example because it was produced by a line-line intersection).
/// Collinearity is not checked: the test only compares the distances from
/// each endpoint to `p3` against the segment length, widened by
/// [`TOLERANCE`]. For an off-line point the answer is meaningless.
#[must_use]
pub fn is_on_segment(p1: &Point2, p2: &Point2, p3: &Point2) -> bool {
    let len = distance(p1, p2);
    distance(p1, p3) - TOLERANCE <= len && distance(p2, p3) - TOLERANCE <= len
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    // ── distance tests ──

    #[test]
    fn distance_pythagorean() {
        let d = distance(&Point2::new(0.0, 0.0), &Point2::new(3.0, 4.0));
        assert_abs_diff_eq!(d, 5.0, epsilon = TOLERANCE);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Point2::new(-1.5, 2.0);
        let b = Point2::new(4.0, -7.25);
        assert_abs_diff_eq!(distance(&a, &b), distance(&b, &a));
    }

    #[test]
    fn distance_to_self_is_zero() {
        let p = Point2::new(12.5, -3.0);
        assert!(distance(&p, &p).abs() < f64::EPSILON);
    }

    // ── is_on_segment tests ──

    #[test]
    fn on_segment_interior() {
        let p1 = Point2::new(0.0, 0.0);
        let p2 = Point2::new(4.0, 4.0);
        assert!(is_on_segment(&p1, &p2, &Point2::new(1.0, 1.0)));
    }

    #[test]
    fn on_segment_endpoints() {
        let p1 = Point2::new(-2.0, 1.0);
        let p2 = Point2::new(6.0, 1.0);
        assert!(is_on_segment(&p1, &p2, &p1));
        assert!(is_on_segment(&p1, &p2, &p2));
    }

    #[test]
    fn on_segment_beyond_end() {
        let p1 = Point2::new(0.0, 0.0);
        let p2 = Point2::new(2.0, 0.0);
        assert!(!is_on_segment(&p1, &p2, &Point2::new(3.0, 0.0)));
        assert!(!is_on_segment(&p1, &p2, &Point2::new(-0.5, 0.0)));
    }

    #[test]
    fn on_segment_within_tolerance_past_endpoint() {
        let p1 = Point2::new(0.0, 0.0);
        let p2 = Point2::new(2.0, 0.0);
        let just_past = Point2::new(2.0 + TOLERANCE * 0.5, 0.0);
        assert!(is_on_segment(&p1, &p2, &just_past));
        let too_far = Point2::new(2.0 + TOLERANCE * 10.0, 0.0);
        assert!(!is_on_segment(&p1, &p2, &too_far));
    }

    #[test]
    fn on_segment_does_not_check_collinearity() {
        // Off-line points close to the midpoint still pass.
        let p1 = Point2::new(0.0, 0.0);
        let p2 = Point2::new(10.0, 0.0);
        assert!(is_on_segment(&p1, &p2, &Point2::new(5.0, 1.0)));
    }
}
