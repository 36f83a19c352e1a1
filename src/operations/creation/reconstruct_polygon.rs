use nalgebra::Rotation2;
use tracing::{debug, trace, warn};

use crate::error::{Result, UnsolvableError};
use crate::geometry::PolygonDescriptor;
use crate::math::intersect_2d::{circle_circle_intersect_2d, CircleIntersection};
use crate::math::polygon_2d::interior_angle;
use crate::math::segment_2d::{segments_intersect, Edge2};
use crate::math::{Point2, TOLERANCE};

/// How the closing vertex of a reconstruction was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Closure {
    /// Fewer than three sides: there is no closing vertex.
    Degenerate,
    /// The first and penultimate vertices coincide and the first vertex is repeated.
    Coincident,
    /// The closing circles touch at a single point.
    Tangent,
    /// The left candidate is crossing-free and convex at the seam.
    Convex,
    /// The left candidate is reflex at the seam, but the right one crosses the chain.
    ReflexFallback,
    /// The left candidate is reflex at the seam and the right one is crossing-free.
    AlternateSimple,
    /// The left candidate crosses the chain. The right candidate is taken
    /// without a crossing test of its own, so the result may self-intersect.
    CrossingFallback,
}

/// A reconstructed polygon together with how it was closed.
#[derive(Debug, Clone, PartialEq)]
pub struct Reconstruction {
    pub vertices: Vec<Point2>,
    pub closure: Closure,
}

/// Reconstructs the vertices of a closed polygon from a [`PolygonDescriptor`].
///
/// # Algorithm
///
/// 1. Place vertex 0 at the origin and vertex 1 at `(sides[0], 0)`.
/// 2. Walk the known angles: vertex `i + 2` is vertex `i + 1` plus the
///    vector back to vertex `i`, rotated by `-angles[i]` and rescaled to
///    `sides[i + 1]`.
/// 3. Close the polygon: the last vertex lies at `sides[n - 1]` from
///    vertex 0 and at `sides[n - 2]` from vertex `n - 2`, found by
///    intersecting two circles.
/// 4. With two candidates, prefer the one left of the line from vertex 0
///    to vertex `n - 2` if it does not cross the chain and keeps the
///    seam convex; otherwise fall back as described on [`Closure`].
///
/// # Orientation
///
/// Angles turn clockwise in a y-up frame (counter-clockwise on a y-down
/// screen). A descriptor whose corners are all below 180 degrees yields a
/// counter-clockwise polygon in y-up coordinates.
#[derive(Debug, Clone)]
pub struct ReconstructPolygon {
    descriptor: PolygonDescriptor,
    tolerance: f64,
}

impl ReconstructPolygon {
    /// Creates a new reconstruction of `descriptor` with the default tolerance.
    #[must_use]
    pub fn new(descriptor: PolygonDescriptor) -> Self {
        Self {
            descriptor,
            tolerance: TOLERANCE,
        }
    }

    /// Overrides the absolute distance tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Executes the reconstruction, returning one vertex per side.
    ///
    /// # Errors
    ///
    /// - `PolycloseError::InvalidDescriptor` if the descriptor fails validation
    /// - `PolycloseError::Unsolvable` if no closing vertex satisfies both
    ///   distance constraints
    pub fn execute(&self) -> Result<Vec<Point2>> {
        self.execute_detailed().map(|r| r.vertices)
    }

    /// Executes the reconstruction and reports which closure was used.
    ///
    /// # Errors
    ///
    /// Same as [`execute`](Self::execute).
    pub fn execute_detailed(&self) -> Result<Reconstruction> {
        self.descriptor.validate()?;

        let sides = &self.descriptor.sides;
        let n = sides.len();
        match n {
            0 => {
                return Ok(Reconstruction {
                    vertices: Vec::new(),
                    closure: Closure::Degenerate,
                })
            }
            1 => {
                return Ok(Reconstruction {
                    vertices: vec![Point2::origin()],
                    closure: Closure::Degenerate,
                })
            }
            2 => {
                return Ok(Reconstruction {
                    vertices: vec![Point2::origin(), Point2::new(sides[0], 0.0)],
                    closure: Closure::Degenerate,
                })
            }
            _ => {}
        }

        let mut vertices = self.walk_chain()?;
        let closure = self.close(&mut vertices)?;
        debug!(sides = n, ?closure, "polygon reconstructed");

        Ok(Reconstruction { vertices, closure })
    }

    /// Places vertices `0..n - 1` from the first side and the known angles.
    fn walk_chain(&self) -> Result<Vec<Point2>> {
        let sides = &self.descriptor.sides;
        let mut vertices = Vec::with_capacity(sides.len());
        vertices.push(Point2::origin());
        vertices.push(Point2::new(sides[0], 0.0));

        for (i, &angle) in self.descriptor.angles.iter().enumerate() {
            let pivot = vertices[i + 1];
            let back = vertices[i] - pivot;
            let back_len = back.norm();
            let side = sides[i + 1];

            let next = if back_len < self.tolerance {
                if side >= self.tolerance {
                    return Err(UnsolvableError::UndefinedDirection { vertex: i + 1 }.into());
                }
                pivot
            } else {
                let rotation = Rotation2::new(-angle.to_radians());
                pivot + rotation * back * (side / back_len)
            };

            trace!(index = i + 2, x = next.x, y = next.y, "vertex placed");
            vertices.push(next);
        }

        Ok(vertices)
    }

    /// Appends the closing vertex to the chain.
    fn close(&self, vertices: &mut Vec<Point2>) -> Result<Closure> {
        let sides = &self.descriptor.sides;
        let n = sides.len();
        let first = vertices[0];
        let penultimate = vertices[n - 2];
        let r_first = sides[n - 1];
        let r_penultimate = sides[n - 2];

        let gap = (penultimate - first).norm();
        if gap < self.tolerance {
            if (r_first - r_penultimate).abs() < self.tolerance {
                vertices.push(first);
                return Ok(Closure::Coincident);
            }
            return Err(UnsolvableError::ContradictoryRadii {
                first: r_first,
                penultimate: r_penultimate,
            }
            .into());
        }

        match circle_circle_intersect_2d(&first, r_first, &penultimate, r_penultimate, self.tolerance)
        {
            CircleIntersection::None => Err(UnsolvableError::NoClosure {
                distance: gap,
                first: r_first,
                penultimate: r_penultimate,
            }
            .into()),
            CircleIntersection::Tangent(p) => {
                vertices.push(p);
                Ok(Closure::Tangent)
            }
            CircleIntersection::Secant(right, left) => {
                let (chosen, closure) = self.choose_closing(vertices, right, left);
                vertices.push(chosen);
                Ok(closure)
            }
        }
    }

    /// Picks between the two closing candidates.
    fn choose_closing(&self, chain: &[Point2], right: Point2, left: Point2) -> (Point2, Closure) {
        if self.crosses_chain(chain, &left) {
            // `right` is not tested here; the result may self-intersect.
            warn!(
                x = right.x,
                y = right.y,
                "left closing candidate crosses the chain, taking the right one unchecked"
            );
            return (right, Closure::CrossingFallback);
        }

        if convex_at_seam(chain, &left) {
            return (left, Closure::Convex);
        }

        if self.crosses_chain(chain, &right) {
            debug!("left closing candidate is reflex, right one crosses the chain");
            (left, Closure::ReflexFallback)
        } else {
            debug!("left closing candidate is reflex, switching to the right one");
            (right, Closure::AlternateSimple)
        }
    }

    /// Returns `true` if closing the chain through `candidate` crosses a
    /// non-adjacent chain edge.
    fn crosses_chain(&self, chain: &[Point2], candidate: &Point2) -> bool {
        let n = chain.len() + 1;
        let closing = Edge2::new(*candidate, chain[0]);
        let joining = Edge2::new(chain[n - 2], *candidate);
        let edge = |i: usize| Edge2::new(chain[i], chain[i + 1]);

        (1..n - 2).any(|i| segments_intersect(&closing, &edge(i), self.tolerance))
            || (0..n - 3).any(|i| segments_intersect(&joining, &edge(i), self.tolerance))
    }
}

/// Returns `true` if the corners at vertex 0, at `candidate` and at the
/// penultimate vertex are all at most 180 degrees.
fn convex_at_seam(chain: &[Point2], candidate: &Point2) -> bool {
    let n = chain.len() + 1;
    let first = &chain[0];
    let penultimate = &chain[n - 2];

    [
        interior_angle(candidate, first, &chain[1]),
        interior_angle(penultimate, candidate, first),
        interior_angle(&chain[n - 3], penultimate, candidate),
    ]
    .iter()
    .all(|&angle| angle <= 180.0)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{DescriptorError, PolycloseError};
    use approx::assert_abs_diff_eq;

    fn reconstruct(sides: &[f64], angles: &[f64]) -> Result<Reconstruction> {
        ReconstructPolygon::new(PolygonDescriptor::new(sides.to_vec(), angles.to_vec()))
            .execute_detailed()
    }

    fn assert_vertices(actual: &[Point2], expected: &[(f64, f64)]) {
        assert_eq!(actual.len(), expected.len(), "actual={actual:?}");
        for (a, &(x, y)) in actual.iter().zip(expected) {
            assert_abs_diff_eq!(a.x, x, epsilon = 1e-9);
            assert_abs_diff_eq!(a.y, y, epsilon = 1e-9);
        }
    }

    #[test]
    fn short_descriptors() {
        let r = reconstruct(&[], &[]).unwrap();
        assert!(r.vertices.is_empty());
        assert_eq!(r.closure, Closure::Degenerate);

        let r = reconstruct(&[4.0], &[]).unwrap();
        assert_vertices(&r.vertices, &[(0.0, 0.0)]);

        let r = reconstruct(&[4.0, 4.0], &[]).unwrap();
        assert_vertices(&r.vertices, &[(0.0, 0.0), (4.0, 0.0)]);
    }

    #[test]
    fn invalid_descriptor_rejected_up_front() {
        let err = reconstruct(&[1.0, 1.0, 1.0, 1.0], &[]).unwrap_err();
        assert_eq!(
            err,
            PolycloseError::InvalidDescriptor(DescriptorError::AngleCount {
                sides: 4,
                expected: 1,
                found: 0
            })
        );
    }

    #[test]
    fn right_triangle_closes_counter_clockwise() {
        let r = reconstruct(&[3.0, 4.0, 5.0], &[]).unwrap();
        assert_eq!(r.closure, Closure::Convex);
        assert_vertices(&r.vertices, &[(0.0, 0.0), (3.0, 0.0), (3.0, 4.0)]);
    }

    #[test]
    fn unit_square() {
        let r = reconstruct(&[1.0; 4], &[90.0]).unwrap();
        assert_eq!(r.closure, Closure::Convex);
        assert_vertices(&r.vertices, &[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
    }

    #[test]
    fn flat_triangle_is_tangent() {
        let r = reconstruct(&[1.0, 1.0, 2.0], &[]).unwrap();
        assert_eq!(r.closure, Closure::Tangent);
        assert_vertices(&r.vertices, &[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
    }

    #[test]
    fn folded_chain_repeats_first_vertex() {
        let r = reconstruct(&[1.0; 4], &[0.0]).unwrap();
        assert_eq!(r.closure, Closure::Coincident);
        assert_vertices(&r.vertices, &[(0.0, 0.0), (1.0, 0.0), (0.0, 0.0), (0.0, 0.0)]);
    }

    #[test]
    fn folded_chain_with_different_radii_is_unsolvable() {
        let err = reconstruct(&[1.0, 1.0, 1.0, 2.0], &[0.0]).unwrap_err();
        assert!(matches!(
            err,
            PolycloseError::Unsolvable(UnsolvableError::ContradictoryRadii { .. })
        ));
    }

    #[test]
    fn triangle_inequality_violation_is_unsolvable() {
        let err = reconstruct(&[1.0, 1.0, 5.0], &[]).unwrap_err();
        assert!(matches!(
            err,
            PolycloseError::Unsolvable(UnsolvableError::NoClosure { .. })
        ));
    }

    #[test]
    fn zero_side_followed_by_turn_is_unsolvable() {
        let err = reconstruct(&[0.0, 1.0, 1.0, 1.0], &[90.0]).unwrap_err();
        assert_eq!(
            err,
            PolycloseError::Unsolvable(UnsolvableError::UndefinedDirection { vertex: 1 })
        );
    }

    #[test]
    fn consecutive_zero_sides_collapse() {
        let r = reconstruct(&[0.0, 0.0, 1.0, 1.0], &[45.0]).unwrap();
        assert_eq!(r.closure, Closure::Coincident);
        assert_eq!(r.vertices.len(), 4);
    }

    #[test]
    fn reflex_seam_kept_when_alternative_crosses() {
        let r = reconstruct(&[1.0, 1.0, 2.5, 1.25_f64.sqrt()], &[90.0]).unwrap();
        assert_eq!(r.closure, Closure::ReflexFallback);
        assert_vertices(&r.vertices, &[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (-1.0, -0.5)]);
    }

    #[test]
    fn reflex_seam_replaced_by_simple_alternative() {
        let sides = [3.0, 18.0_f64.sqrt(), 2.0, 26.0_f64.sqrt(), 5.0_f64.sqrt()];
        let r = reconstruct(&sides, &[315.0, 225.0]).unwrap();
        assert_eq!(r.closure, Closure::AlternateSimple);
        assert_vertices(
            &r.vertices,
            &[(0.0, 0.0), (3.0, 0.0), (0.0, -3.0), (-2.0, -3.0), (-1.0, 2.0)],
        );
    }

    #[test]
    fn crossing_candidate_falls_back_unchecked() {
        let r = reconstruct(&[1.0; 4], &[270.0]).unwrap();
        assert_eq!(r.closure, Closure::CrossingFallback);
        assert_vertices(&r.vertices, &[(0.0, 0.0), (1.0, 0.0), (1.0, -1.0), (0.0, -1.0)]);
    }

    #[test]
    fn tolerance_override_is_used() {
        // Sides 1, 1, 2.001 miss tangency by 1e-3, which a loose tolerance accepts.
        let d = PolygonDescriptor::new(vec![1.0, 1.0, 2.001], vec![]);
        assert!(ReconstructPolygon::new(d.clone()).execute().is_err());
        let vertices = ReconstructPolygon::new(d)
            .with_tolerance(1e-2)
            .execute()
            .unwrap();
        assert_eq!(vertices.len(), 3);
    }
}
