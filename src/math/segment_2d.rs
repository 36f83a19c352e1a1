use super::Point2;

/// A directed line segment, built only to run intersection tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge2 {
    pub start: Point2,
    pub end: Point2,
}

impl Edge2 {
    /// Creates a new edge from `start` to `end`.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Returns `true` if the edge has no horizontal extent.
    #[allow(clippy::float_cmp)]
    fn is_vertical(&self) -> bool {
        self.start.x == self.end.x
    }

    /// Slope `dy / dx` of the supporting line. Infinite for vertical edges.
    fn slope(&self) -> f64 {
        (self.end.y - self.start.y) / (self.end.x - self.start.x)
    }

    /// Evaluates the supporting line at abscissa `x`.
    fn y_at(&self, x: f64) -> f64 {
        self.slope() * (x - self.start.x) + self.start.y
    }
}

/// Returns `true` if `point` lies on `edge`.
///
/// The point must be colinear with the edge (absolute cross product below
/// `tol`) and its projection parameter onto the edge must lie in `[0, 1]`.
/// A zero-length edge contains only its start point.
#[must_use]
pub fn point_on_segment(point: &Point2, edge: &Edge2, tol: f64) -> bool {
    let sp = *point - edge.start;
    let se = edge.end - edge.start;

    let cross = sp.y * se.x - sp.x * se.y;
    if cross.abs() >= tol {
        return false;
    }

    let len_sq = se.norm_squared();
    if len_sq < tol * tol {
        return sp.norm() < tol;
    }

    let t = sp.dot(&se) / len_sq;
    (0.0..=1.0).contains(&t)
}

/// Returns `true` if the two segments share a point.
///
/// Slopes are compared exactly: parallel segments, including two vertical
/// ones, never intersect even when they overlap.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn segments_intersect(a: &Edge2, b: &Edge2, tol: f64) -> bool {
    let crossing = match (a.is_vertical(), b.is_vertical()) {
        (true, true) => return false,
        (true, false) => {
            let x = a.start.x;
            Point2::new(x, b.y_at(x))
        }
        (false, true) => {
            let x = b.start.x;
            Point2::new(x, a.y_at(x))
        }
        (false, false) => {
            let ka = a.slope();
            let kb = b.slope();
            if ka == kb {
                return false;
            }
            let x = (b.start.y - a.start.y - kb * b.start.x + ka * a.start.x) / (ka - kb);
            Point2::new(x, a.y_at(x))
        }
    };

    point_on_segment(&crossing, a, tol) && point_on_segment(&crossing, b, tol)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    fn edge(x0: f64, y0: f64, x1: f64, y1: f64) -> Edge2 {
        Edge2::new(Point2::new(x0, y0), Point2::new(x1, y1))
    }

    // ── point_on_segment ──

    #[test]
    fn point_inside_diagonal_segment() {
        let e = edge(0.0, 0.0, 4.0, -2.0);
        assert!(point_on_segment(&Point2::new(2.0, -1.0), &e, TOLERANCE));
    }

    #[test]
    fn point_off_the_line() {
        let e = edge(0.0, 0.0, 4.0, -2.0);
        assert!(!point_on_segment(&Point2::new(2.0, 0.0), &e, TOLERANCE));
    }

    #[test]
    fn colinear_point_outside_range() {
        let e = edge(0.0, 0.0, 4.0, -2.0);
        assert!(!point_on_segment(&Point2::new(6.0, -3.0), &e, TOLERANCE));
        assert!(!point_on_segment(&Point2::new(-2.0, 1.0), &e, TOLERANCE));
    }

    #[test]
    fn endpoints_are_on_segment() {
        let e = edge(0.0, 0.0, 4.0, -2.0);
        assert!(point_on_segment(&e.start, &e, TOLERANCE));
        assert!(point_on_segment(&e.end, &e, TOLERANCE));
    }

    #[test]
    fn zero_length_segment_contains_only_its_point() {
        let e = edge(1.0, 1.0, 1.0, 1.0);
        assert!(point_on_segment(&Point2::new(1.0, 1.0), &e, TOLERANCE));
        assert!(!point_on_segment(&Point2::new(1.5, 1.0), &e, TOLERANCE));
    }

    // ── segments_intersect ──

    #[test]
    fn axis_cross() {
        let a = edge(-1.0, 0.0, 1.0, 0.0);
        let b = edge(0.0, -1.0, 0.0, 1.0);
        assert!(segments_intersect(&a, &b, TOLERANCE));
        assert!(segments_intersect(&b, &a, TOLERANCE));
    }

    #[test]
    fn horizontal_against_steep() {
        let a = edge(0.0, 0.0, 6.0, 0.0);
        let b = edge(-0.128, 5.142, 1.772, -4.6755);
        assert!(segments_intersect(&a, &b, TOLERANCE));
    }

    #[test]
    fn general_crossing() {
        let a = edge(0.0, 0.0, 2.0, 2.0);
        let b = edge(0.0, 2.0, 2.0, 0.0);
        assert!(segments_intersect(&a, &b, TOLERANCE));
    }

    #[test]
    fn lines_cross_outside_segments() {
        let a = edge(0.0, 0.0, 1.0, 1.0);
        let b = edge(3.0, 0.0, 4.0, -2.0);
        assert!(!segments_intersect(&a, &b, TOLERANCE));
    }

    #[test]
    fn vertical_misses_short_segment() {
        let a = edge(5.0, -1.0, 5.0, 1.0);
        let b = edge(0.0, 0.0, 2.0, 0.5);
        assert!(!segments_intersect(&a, &b, TOLERANCE));
        assert!(!segments_intersect(&b, &a, TOLERANCE));
    }

    #[test]
    fn parallel_segments_never_intersect() {
        assert!(!segments_intersect(
            &edge(0.0, 0.0, 1.0, 0.0),
            &edge(0.0, 1.0, 1.0, 1.0),
            TOLERANCE
        ));
        assert!(!segments_intersect(
            &edge(0.0, 0.0, 0.0, 1.0),
            &edge(0.0, 0.5, 0.0, 2.0),
            TOLERANCE
        ));
        // Overlapping colinear segments count as parallel.
        assert!(!segments_intersect(
            &edge(0.0, 0.0, 2.0, 1.0),
            &edge(1.0, 0.5, 3.0, 1.5),
            TOLERANCE
        ));
    }

    #[test]
    fn shared_endpoint_counts() {
        let a = edge(0.0, 0.0, 1.0, 0.0);
        let b = edge(1.0, 0.0, 1.0, 1.0);
        assert!(segments_intersect(&a, &b, TOLERANCE));
    }
}
