/// Represents a single longitude/latitude position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lon: f64,
    pub lat: f64,
}

impl Coordinate {
    /// Creates a coordinate from longitude/latitude in degrees (WGS84)
    pub fn from_lonlat(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from(pair: [f64; 2]) -> Self {
        Self::from_lonlat(pair[0], pair[1])
    }
}
