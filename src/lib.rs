//! Reconstruction of closed polygons from side lengths and interior angles.
//!
//! A [`PolygonDescriptor`] lists the `n` side lengths of a polygon and the
//! interior angles at vertices `1..n - 2`. [`ReconstructPolygon`] walks the
//! known angles and closes the polygon with a circle-circle intersection.
//! The remaining queries derive angles, area and a display scale from the
//! resulting vertices.

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{DescriptorError, PolycloseError, Result, UnsolvableError};
pub use geometry::PolygonDescriptor;
pub use math::{Point2, Vector2, TOLERANCE};
pub use operations::creation::{Closure, ReconstructPolygon, Reconstruction};
pub use operations::query::{Aabb2, BoundingBox, FitInViewport, FitScaling, InteriorAngles};
