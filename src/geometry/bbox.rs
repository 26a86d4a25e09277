use serde::{Deserialize, Serialize};

/// Coordinate reference system tag for a bounding box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Crs {
    /// Geographic longitude/latitude, EPSG:4326
    Wgs84,
}

impl Crs {
    /// Returns the EPSG code for this CRS
    pub fn epsg(&self) -> u16 {
        match self {
            Crs::Wgs84 => 4326,
        }
    }

    /// Returns the OGC URI the provider expects in request bodies
    pub fn ogc_uri(&self) -> &'static str {
        match self {
            Crs::Wgs84 => "http://www.opengis.net/def/crs/EPSG/0/4326",
        }
    }
}

/// Axis-aligned geographic bounding box tagged with its CRS
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
    pub crs: Crs,
}

impl BoundingBox {
    /// Creates a WGS84 bounding box from envelope corners
    pub fn wgs84(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> Self {
        Self {
            min_lon,
            min_lat,
            max_lon,
            max_lat,
            crs: Crs::Wgs84,
        }
    }

    /// Returns the envelope as `[min_lon, min_lat, max_lon, max_lat]`,
    /// the ordering the provider expects
    pub fn to_array(&self) -> [f64; 4] {
        [self.min_lon, self.min_lat, self.max_lon, self.max_lat]
    }

    /// Extent as (width, height) in degrees
    pub fn extent(&self) -> (f64, f64) {
        (self.max_lon - self.min_lon, self.max_lat - self.min_lat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crs_epsg() {
        assert_eq!(Crs::Wgs84.epsg(), 4326);
    }

    #[test]
    fn test_to_array_ordering() {
        let bbox = BoundingBox::wgs84(76.9, 24.5, 76.96, 24.53);
        assert_eq!(bbox.to_array(), [76.9, 24.5, 76.96, 24.53]);
    }

    #[test]
    fn test_extent() {
        let bbox = BoundingBox::wgs84(10.0, 20.0, 11.5, 22.0);
        let (w, h) = bbox.extent();
        assert!((w - 1.5).abs() < 1e-12);
        assert!((h - 2.0).abs() < 1e-12);
    }
}
