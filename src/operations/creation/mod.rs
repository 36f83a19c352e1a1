mod reconstruct_polygon;

pub use reconstruct_polygon::{Closure, ReconstructPolygon, Reconstruction};
