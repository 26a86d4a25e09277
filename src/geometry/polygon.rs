use crate::error::{Error, Result};
use crate::geometry::bbox::BoundingBox;
use crate::geometry::coordinate::Coordinate;

/// An ordered ring of WGS84 coordinates describing a land parcel.
///
/// The ring must contain at least four points (a closed triangle).
/// Closure of the ring is not enforced here; callers that hand us an
/// open ring get the same envelope either way.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    points: Vec<Coordinate>,
}

impl Polygon {
    /// Minimum number of points for a closed ring
    pub const MIN_POINTS: usize = 4;

    /// Creates a polygon from an ordered coordinate ring
    pub fn new(points: Vec<Coordinate>) -> Result<Self> {
        if points.len() < Self::MIN_POINTS {
            return Err(Error::Geometry(format!(
                "polygon ring needs at least {} points, got {}",
                Self::MIN_POINTS,
                points.len()
            )));
        }
        Ok(Self { points })
    }

    /// Creates a polygon from raw `[lon, lat]` pairs
    pub fn from_pairs(pairs: &[[f64; 2]]) -> Result<Self> {
        Self::new(pairs.iter().map(|&p| Coordinate::from(p)).collect())
    }

    /// Returns the ring points in order
    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    /// Computes the min/max envelope of the ring as a WGS84 bounding box.
    ///
    /// Independent of point ordering: any permutation of the same ring
    /// yields the same envelope.
    pub fn bounding_box(&self) -> BoundingBox {
        let mut min_lon = f64::INFINITY;
        let mut min_lat = f64::INFINITY;
        let mut max_lon = f64::NEG_INFINITY;
        let mut max_lat = f64::NEG_INFINITY;

        for point in &self.points {
            min_lon = min_lon.min(point.lon);
            min_lat = min_lat.min(point.lat);
            max_lon = max_lon.max(point.lon);
            max_lat = max_lat.max(point.lat);
        }

        BoundingBox::wgs84(min_lon, min_lat, max_lon, max_lat)
    }
}
