pub mod descriptor;

pub use descriptor::PolygonDescriptor;
