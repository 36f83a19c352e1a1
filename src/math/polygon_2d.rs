use super::{Point2, Vector2, TOLERANCE};

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise (y-up).
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    let mut sum = 0.0;
    for i in 0..n {
        let prev = &points[(i + n - 1) % n];
        let next = &points[(i + 1) % n];
        sum += points[i].y * (prev.x - next.x);
    }
    sum / 2.0
}

/// Traversal direction of a closed vertex sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    CounterClockwise,
    Clockwise,
    /// Zero area within tolerance (collinear or fewer than 3 vertices).
    Degenerate,
}

impl Winding {
    /// Classifies the winding order of `points` from the sign of its area.
    #[must_use]
    pub fn of(points: &[Point2]) -> Self {
        let area = signed_area_2d(points);
        if area > TOLERANCE {
            Self::CounterClockwise
        } else if area < -TOLERANCE {
            Self::Clockwise
        } else {
            Self::Degenerate
        }
    }
}

/// Counter-clockwise angle from `from` to `to`, in degrees within `[0, 360)`.
#[must_use]
pub fn ccw_angle_deg(from: &Vector2, to: &Vector2) -> f64 {
    let phi = to.y.atan2(to.x) - from.y.atan2(from.x);
    (phi.to_degrees() + 360.0) % 360.0
}

/// Interior angle at `pivot` between its neighbours, in degrees within `[0, 360)`.
///
/// Measured counter-clockwise from the outgoing edge (towards `next`) to
/// the incoming edge (back towards `prev`). For a counter-clockwise
/// polygon this is below 180 at convex corners and above 180 at reflex ones.
#[must_use]
pub fn interior_angle(prev: &Point2, pivot: &Point2, next: &Point2) -> f64 {
    ccw_angle_deg(&(next - pivot), &(prev - pivot))
}

/// Interior angle at every vertex of a closed polygon.
///
/// Entry `i` is the angle at vertex `i`, with neighbours `i - 1` and
/// `i + 1` taken cyclically. Returns an empty vector for fewer than 3 vertices.
#[must_use]
pub fn interior_angles(points: &[Point2]) -> Vec<f64> {
    let n = points.len();
    if n < 3 {
        return Vec::new();
    }
    (0..n)
        .map(|i| interior_angle(&points[(i + n - 1) % n], &points[i], &points[(i + 1) % n]))
        .collect()
}

/// Interior angle of a regular polygon with `n` sides, in degrees.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn regular_polygon_angle(n: usize) -> f64 {
    let n = n as f64;
    (n - 2.0) * 180.0 / n
}
