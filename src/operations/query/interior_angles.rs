use crate::math::polygon_2d::{interior_angles, signed_area_2d, Winding};
use crate::math::Point2;

/// Derives per-vertex interior angles, signed area and winding of a
/// finished vertex sequence.
pub struct InteriorAngles<'a> {
    points: &'a [Point2],
}

impl<'a> InteriorAngles<'a> {
    /// Creates a new `InteriorAngles` query.
    #[must_use]
    pub fn new(points: &'a [Point2]) -> Self {
        Self { points }
    }

    /// Angle at every vertex, in degrees within `[0, 360)`.
    #[must_use]
    pub fn execute(&self) -> Vec<f64> {
        interior_angles(self.points)
    }

    /// Signed area, positive for counter-clockwise order.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area_2d(self.points)
    }

    /// Winding order of the sequence.
    #[must_use]
    pub fn winding(&self) -> Winding {
        Winding::of(self.points)
    }
}
