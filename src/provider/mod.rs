//! Remote imagery provider access
//!
//! Defines the request descriptor sent to the provider and the
//! [`ImageryProvider`] seam the request handler works against. The
//! production implementation is [`SentinelHubClient`]; tests substitute
//! their own stubs.

pub mod client;
pub mod request;

pub use client::SentinelHubClient;
pub use request::{DataCollection, ImageRequest, MosaickingOrder, TimeInterval};

use async_trait::async_trait;
use ndarray::Array3;

use crate::error::Result;

/// A provider that renders one raster per request.
///
/// One operation: synchronously fetch the composite image described by an
/// [`ImageRequest`]. The returned array has shape (height, width, 3) with
/// 8-bit channels.
#[async_trait]
pub trait ImageryProvider: Send + Sync {
    async fn fetch_image(&self, request: &ImageRequest) -> Result<Array3<u8>>;
}
