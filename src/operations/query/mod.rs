mod bounding_box;
mod fit_in_viewport;
mod interior_angles;

pub use bounding_box::{Aabb2, BoundingBox};
pub use fit_in_viewport::{FitInViewport, FitScaling};
pub use interior_angles::InteriorAngles;
