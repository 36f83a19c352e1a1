use crate::math::Point2;

use super::bounding_box::Aabb2;

/// Uniform scaling that fits a vertex sequence into a viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FitScaling {
    /// Midpoint of the bounding box of the fitted vertices.
    pub center: Point2,
    /// Factor to scale by about `center`.
    pub scale_factor: f64,
}

impl FitScaling {
    /// Maps `point` into viewport space, with the box center landing on
    /// `viewport_center`.
    #[must_use]
    pub fn apply(&self, point: &Point2, viewport_center: &Point2) -> Point2 {
        *viewport_center + (*point - self.center) * self.scale_factor
    }
}

impl Default for FitScaling {
    fn default() -> Self {
        Self {
            center: Point2::origin(),
            scale_factor: 1.0,
        }
    }
}

/// Computes the largest uniform scale that fits `points` into a
/// `max_width` by `max_height` viewport, preserving aspect ratio.
///
/// An axis along which the points have no extent does not constrain the
/// scale. With no extent at all (or no points) the scale is 1.
pub struct FitInViewport<'a> {
    points: &'a [Point2],
    max_width: f64,
    max_height: f64,
}

impl<'a> FitInViewport<'a> {
    /// Creates a new `FitInViewport` query.
    #[must_use]
    pub fn new(points: &'a [Point2], max_width: f64, max_height: f64) -> Self {
        Self {
            points,
            max_width,
            max_height,
        }
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self) -> FitScaling {
        let Some(bb) = Aabb2::from_points(self.points) else {
            return FitScaling::default();
        };

        let extent = bb.extent();
        let horizontal = (extent.x > 0.0).then_some(self.max_width / extent.x);
        let vertical = (extent.y > 0.0).then_some(self.max_height / extent.y);
        let scale_factor = match (horizontal, vertical) {
            (Some(h), Some(v)) => h.min(v),
            (Some(k), None) | (None, Some(k)) => k,
            (None, None) => 1.0,
        };

        FitScaling {
            center: bb.center(),
            scale_factor,
        }
    }
}
