//! terrascope - satellite imagery relay for land polygons
//!
//! terrascope accepts a user-drawn land polygon, derives its WGS84
//! bounding envelope, fetches a true-color Sentinel-2 composite over a
//! fixed time window from Sentinel Hub, and returns the rendered PNG
//! when the composite holds usable data.
//!
//! # Examples
//!
//! ## Polygon to bounding box
//!
//! ```
//! use terrascope::Polygon;
//!
//! let polygon = Polygon::from_pairs(&[
//!     [76.950903, 24.521356],
//!     [76.947041, 24.5155],
//!     [76.95262, 24.510892],
//!     [76.954508, 24.517608],
//! ])?;
//!
//! let bbox = polygon.bounding_box();
//! let [min_lon, min_lat, max_lon, max_lat] = bbox.to_array();
//! assert!(min_lon < max_lon && min_lat < max_lat);
//! # Ok::<(), terrascope::Error>(())
//! ```
//!
//! ## Fetching a composite
//!
//! ```no_run
//! use terrascope::{Config, ImageRequest, ImageryProvider, Polygon, SentinelHubClient};
//!
//! # async fn fetch() -> terrascope::Result<()> {
//! let config = Config::from_env()?;
//! let client = SentinelHubClient::new(config.credentials, config.endpoints);
//!
//! let polygon = Polygon::from_pairs(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]])?;
//! let request = ImageRequest::true_color(polygon.bounding_box());
//! let image = client.fetch_image(&request).await?;
//! println!("mean brightness: {}", terrascope::mean_brightness(&image));
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod geometry;
pub mod imagery;
pub mod provider;
pub mod types;

pub use config::Config;
pub use error::{Error, Result};
pub use geometry::{BoundingBox, Coordinate, Crs, Polygon};
pub use imagery::{
    encode_png, has_valid_data, mean_brightness, ArtifactStore, VALID_BRIGHTNESS_THRESHOLD,
};
pub use provider::{ImageRequest, ImageryProvider, SentinelHubClient, TimeInterval};
pub use types::{Dimensions, OUTPUT_SIZE};
