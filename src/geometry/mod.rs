//! Polygon and bounding-box geometry
//!
//! All geometry is expressed in WGS84 longitude/latitude degrees.

pub mod bbox;
pub mod coordinate;
pub mod polygon;

pub use bbox::{BoundingBox, Crs};
pub use coordinate::Coordinate;
pub use polygon::Polygon;
