use chrono::NaiveDate;

use crate::geometry::BoundingBox;
use crate::types::{Dimensions, OUTPUT_SIZE};

/// True-color band composite: B04/B03/B02 scaled into RGB.
///
/// The 2.5 gain matches the reflectance stretch commonly used for
/// Sentinel-2 visualization.
pub const EVALSCRIPT_TRUE_COLOR: &str = r#"//VERSION=3
function setup() {
    return {
        input: [{ bands: ["B04", "B03", "B02"] }],
        output: { bands: 3 }
    };
}
function evaluatePixel(sample) {
    return [2.5 * sample.B04, 2.5 * sample.B03, 2.5 * sample.B02];
}
"#;

/// Satellite data collection to sample from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataCollection {
    /// Sentinel-2 Level-1C (top-of-atmosphere reflectance)
    Sentinel2L1c,
}

impl DataCollection {
    /// Collection identifier the provider API expects
    pub fn api_name(&self) -> &'static str {
        match self {
            DataCollection::Sentinel2L1c => "sentinel-2-l1c",
        }
    }
}

/// Scene selection policy when overlapping passes cover a pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MosaickingOrder {
    /// Prefer the scene with the least cloud cover
    LeastCloudCover,
}

impl MosaickingOrder {
    /// Policy name the provider API expects
    pub fn api_name(&self) -> &'static str {
        match self {
            MosaickingOrder::LeastCloudCover => "leastCC",
        }
    }
}

/// Closed date range to sample imagery from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeInterval {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl TimeInterval {
    /// Creates a new interval
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    /// The fixed sampling window: 2024-01-01 through 2024-04-30
    pub fn default_window() -> Self {
        Self {
            from: NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date literal"),
            to: NaiveDate::from_ymd_opt(2024, 4, 30).expect("valid date literal"),
        }
    }

    /// Interval start as the RFC 3339 timestamp the provider expects
    pub fn from_rfc3339(&self) -> String {
        format!("{}T00:00:00Z", self.from)
    }

    /// Interval end as the RFC 3339 timestamp the provider expects
    pub fn to_rfc3339(&self) -> String {
        format!("{}T23:59:59Z", self.to)
    }
}

/// Everything the provider needs to render one composite image.
///
/// Built fresh per request and immutable once built.
#[derive(Debug, Clone)]
pub struct ImageRequest {
    pub bbox: BoundingBox,
    pub size: Dimensions,
    pub interval: TimeInterval,
    pub collection: DataCollection,
    pub mosaicking: MosaickingOrder,
    pub evalscript: &'static str,
}

impl ImageRequest {
    /// Builds the standard true-color request over the fixed time window
    /// at the fixed 512x512 output size.
    pub fn true_color(bbox: BoundingBox) -> Self {
        Self {
            bbox,
            size: OUTPUT_SIZE,
            interval: TimeInterval::default_window(),
            collection: DataCollection::Sentinel2L1c,
            mosaicking: MosaickingOrder::LeastCloudCover,
            evalscript: EVALSCRIPT_TRUE_COLOR,
        }
    }
}
