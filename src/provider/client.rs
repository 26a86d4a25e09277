use async_trait::async_trait;
use image::ImageFormat;
use ndarray::Array3;
use serde::Deserialize;
use serde_json::json;

use crate::config::{Credentials, ProviderEndpoints};
use crate::error::{Error, Result};
use crate::provider::request::ImageRequest;
use crate::provider::ImageryProvider;

/// Client for the Sentinel Hub process API.
///
/// Each [`fetch_image`](ImageryProvider::fetch_image) call performs its own
/// OAuth2 client-credentials exchange and one process request. Tokens are
/// not cached and requests are not retried.
pub struct SentinelHubClient {
    http: reqwest::Client,
    credentials: Credentials,
    endpoints: ProviderEndpoints,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

impl SentinelHubClient {
    /// Creates a client for the given credentials and endpoints
    pub fn new(credentials: Credentials, endpoints: ProviderEndpoints) -> Self {
        Self {
            http: reqwest::Client::new(),
            credentials,
            endpoints,
        }
    }

    /// Exchanges the client id/secret for a bearer token
    async fn request_token(&self) -> Result<String> {
        let params = [
            ("grant_type", "client_credentials"),
            ("client_id", self.credentials.client_id.as_str()),
            ("client_secret", self.credentials.client_secret.as_str()),
        ];

        let response = self
            .http
            .post(&self.endpoints.token_url)
            .form(&params)
            .send()
            .await
            .map_err(|e| Error::Auth(format!("token request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Auth(format!(
                "token endpoint returned HTTP {}: {}",
                status.as_u16(),
                body
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| Error::Auth(format!("malformed token response: {}", e)))?;

        Ok(token.access_token)
    }

    /// Issues the process request and returns the raw PNG payload
    async fn request_process(&self, token: &str, request: &ImageRequest) -> Result<Vec<u8>> {
        let body = json!({
            "input": {
                "bounds": {
                    "bbox": request.bbox.to_array(),
                    "properties": { "crs": request.bbox.crs.ogc_uri() }
                },
                "data": [{
                    "type": request.collection.api_name(),
                    "dataFilter": {
                        "timeRange": {
                            "from": request.interval.from_rfc3339(),
                            "to": request.interval.to_rfc3339()
                        },
                        "mosaickingOrder": request.mosaicking.api_name()
                    }
                }]
            },
            "output": {
                "width": request.size.width,
                "height": request.size.height,
                "responses": [{
                    "identifier": "default",
                    "format": { "type": "image/png" }
                }]
            },
            "evalscript": request.evalscript
        });

        let response = self
            .http
            .post(&self.endpoints.process_url)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(Error::Fetch {
                status: Some(status.as_u16()),
                detail,
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}

#[async_trait]
impl ImageryProvider for SentinelHubClient {
    async fn fetch_image(&self, request: &ImageRequest) -> Result<Array3<u8>> {
        let token = self.request_token().await?;

        tracing::debug!(
            bbox = ?request.bbox.to_array(),
            width = request.size.width,
            height = request.size.height,
            "requesting composite from provider"
        );

        let payload = self.request_process(&token, request).await?;
        decode_png_rgb(&payload)
    }
}

/// Decodes a PNG payload into an RGB pixel array of shape (height, width, 3)
pub fn decode_png_rgb(payload: &[u8]) -> Result<Array3<u8>> {
    let decoded = image::load_from_memory_with_format(payload, ImageFormat::Png)
        .map_err(|e| Error::Decode(format!("provider payload is not a PNG: {}", e)))?;

    let rgb = decoded.to_rgb8();
    let (width, height) = rgb.dimensions();

    Array3::from_shape_vec((height as usize, width as usize, 3), rgb.into_raw())
        .map_err(|e| Error::Decode(format!("pixel buffer shape mismatch: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32, value: u8) -> Vec<u8> {
        let img = RgbImage::from_pixel(width, height, image::Rgb([value, value, value]));
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, ImageFormat::Png).unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_decode_png_rgb_shape() {
        let payload = png_bytes(8, 4, 200);
        let array = decode_png_rgb(&payload).unwrap();
        assert_eq!(array.shape(), &[4, 8, 3]);
        assert!(array.iter().all(|&v| v == 200));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let result = decode_png_rgb(b"not a png");
        assert!(matches!(result, Err(Error::Decode(_))));
    }
}
