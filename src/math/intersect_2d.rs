use super::{Point2, Vector2};

/// Result of intersecting two circles in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CircleIntersection {
    /// The circles do not meet, or coincide so no finite set of points exists.
    None,
    /// The circles touch at a single point (internally or externally).
    Tangent(Point2),
    /// The circles cross at two points.
    ///
    /// The first point lies to the right of the directed line from the
    /// first center to the second (y-up), the second point to its left.
    Secant(Point2, Point2),
}

impl CircleIntersection {
    /// Returns the intersection points as a vector of length 0, 1 or 2.
    #[must_use]
    pub fn points(&self) -> Vec<Point2> {
        match *self {
            Self::None => Vec::new(),
            Self::Tangent(p) => vec![p],
            Self::Secant(p, q) => vec![p, q],
        }
    }

    /// Returns the number of intersection points.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::None => 0,
            Self::Tangent(_) => 1,
            Self::Secant(..) => 2,
        }
    }

    /// Returns `true` if the circles have no usable intersection.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// Intersection of two circles in 2D.
///
/// Circle 1 has center `c1` and radius `r1`, circle 2 has center `c2` and
/// radius `r2`. `tol` is an absolute distance tolerance used for the
/// separation and tangency tests.
///
/// - Separated or nested circles give [`CircleIntersection::None`].
/// - Concentric circles also give `None`: either there is no intersection
///   or, for equal radii, infinitely many.
/// - Touching circles give a single point on the center line at distance
///   `r1` from `c1`.
/// - Otherwise the two points of the common chord are returned.
#[must_use]
pub fn circle_circle_intersect_2d(
    c1: &Point2,
    r1: f64,
    c2: &Point2,
    r2: f64,
    tol: f64,
) -> CircleIntersection {
    let dc = c2 - c1;
    let dist_sq = dc.norm_squared();
    let dist = dist_sq.sqrt();

    let diff = (r1 - r2).abs();
    if diff > dist + tol || dist > r1 + r2 + tol {
        return CircleIntersection::None;
    }
    if dist < tol {
        return CircleIntersection::None;
    }

    let u = dc / dist;

    // Distance from c1 along the center line to the radical line.
    let a = (dist_sq + r1 * r1 - r2 * r2) / (2.0 * dist);

    if (diff - dist).abs() < tol || (dist - r1 - r2).abs() < tol {
        // Internal tangency with the smaller circle first puts the point
        // behind c1, which the sign of `a` tells apart.
        let along = if a < 0.0 { -r1 } else { r1 };
        return CircleIntersection::Tangent(*c1 + u * along);
    }

    let h = (r1 * r1 - a * a).max(0.0).sqrt();
    let mid = *c1 + u * a;
    let offset = Vector2::new(h * u.y, -h * u.x);

    CircleIntersection::Secant(mid + offset, mid - offset)
}
