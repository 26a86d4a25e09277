use axum::{
    body::Body,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::geometry::Polygon;
use crate::imagery::{encode_png, mean_brightness, VALID_BRIGHTNESS_THRESHOLD};
use crate::provider::ImageRequest;

use super::models::*;
use super::AppState;

const LIVENESS_MESSAGE: &str = "Backend is running! POST your land polygon to /submit";

const NO_DATA_MESSAGE: &str = "No valid data (area might be dark/cloudy). Try another date.";

pub async fn home() -> &'static str {
    LIVENESS_MESSAGE
}

pub async fn submit(
    State(state): State<AppState>,
    Json(req): Json<SubmitRequest>,
) -> Result<Response, (StatusCode, Json<ErrorResponse>)> {
    let coordinates = req.coordinates.ok_or_else(|| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Missing coordinates".to_string(),
            }),
        )
    })?;

    let polygon = Polygon::from_pairs(&coordinates).map_err(internal_error)?;
    let bbox = polygon.bounding_box();

    let request = ImageRequest::true_color(bbox);
    let image = state
        .provider
        .fetch_image(&request)
        .await
        .map_err(internal_error)?;

    let mean = mean_brightness(&image);
    tracing::info!(?bbox, mean, "composite fetched");

    if mean <= VALID_BRIGHTNESS_THRESHOLD {
        return Ok(Json(MessageResponse {
            message: NO_DATA_MESSAGE.to_string(),
        })
        .into_response());
    }

    let png = encode_png(&image).map_err(internal_error)?;
    let path = state.artifacts.write(&png).map_err(internal_error)?;
    tracing::info!(path = %path.display(), "artifact saved");

    Ok(Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "image/png")
        .body(Body::from(png))
        .map_err(internal_error)?)
}

fn internal_error(e: impl std::fmt::Display) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Result};
    use crate::imagery::ArtifactStore;
    use crate::provider::ImageryProvider;
    use async_trait::async_trait;
    use ndarray::Array3;
    use std::sync::Arc;

    /// Stub provider returning a uniform 512x512 composite
    struct UniformProvider(u8);

    #[async_trait]
    impl ImageryProvider for UniformProvider {
        async fn fetch_image(&self, _request: &ImageRequest) -> Result<Array3<u8>> {
            Ok(Array3::from_elem((512, 512, 3), self.0))
        }
    }

    /// Stub provider that always fails
    struct FailingProvider;

    #[async_trait]
    impl ImageryProvider for FailingProvider {
        async fn fetch_image(&self, _request: &ImageRequest) -> Result<Array3<u8>> {
            Err(Error::Fetch {
                status: Some(503),
                detail: "upstream unavailable".to_string(),
            })
        }
    }

    fn state_with(provider: impl ImageryProvider + 'static, dir: &std::path::Path) -> AppState {
        AppState::new(Arc::new(provider), ArtifactStore::new(dir).unwrap())
    }

    fn square_request() -> SubmitRequest {
        SubmitRequest {
            coordinates: Some(vec![
                [76.950903, 24.521356],
                [76.947041, 24.5155],
                [76.95262, 24.510892],
                [76.954508, 24.517608],
                [76.950903, 24.521356],
            ]),
        }
    }

    async fn body_bytes(response: Response) -> Vec<u8> {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    #[tokio::test]
    async fn test_missing_coordinates_is_400() {
        let tmp = tempfile::tempdir().unwrap();
        let state = state_with(UniformProvider(255), tmp.path());

        let result = submit(
            State(state),
            Json(SubmitRequest { coordinates: None }),
        )
        .await;

        let (status, Json(body)) = result.err().unwrap();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "Missing coordinates");
    }

    #[tokio::test]
    async fn test_bright_composite_returns_png_and_artifact() {
        let tmp = tempfile::tempdir().unwrap();
        let state = state_with(UniformProvider(255), tmp.path());

        let response = submit(State(state), Json(square_request())).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "image/png"
        );

        let body = body_bytes(response).await;
        assert!(!body.is_empty());

        let entries: Vec<_> = std::fs::read_dir(tmp.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
        let artifact = entries[0].as_ref().unwrap();
        assert!(artifact.metadata().unwrap().len() > 0);
    }

    #[tokio::test]
    async fn test_dark_composite_returns_message_without_artifact() {
        let tmp = tempfile::tempdir().unwrap();
        let state = state_with(UniformProvider(0), tmp.path());

        let response = submit(State(state), Json(square_request())).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body: MessageResponse =
            serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert!(body.message.contains("No valid data"));

        assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_threshold_mean_is_invalid() {
        // uniform 10 gives mean exactly 10, which must not pass
        let tmp = tempfile::tempdir().unwrap();
        let state = state_with(UniformProvider(10), tmp.path());

        let response = submit(State(state), Json(square_request())).await.unwrap();
        let body: MessageResponse =
            serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert!(body.message.contains("No valid data"));
    }

    #[tokio::test]
    async fn test_provider_failure_is_500_with_cause() {
        let tmp = tempfile::tempdir().unwrap();
        let state = state_with(FailingProvider, tmp.path());

        let result = submit(State(state), Json(square_request())).await;
        let (status, Json(body)) = result.err().unwrap();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.error.contains("upstream unavailable"));
    }

    #[tokio::test]
    async fn test_short_ring_is_500_geometry_error() {
        let tmp = tempfile::tempdir().unwrap();
        let state = state_with(UniformProvider(255), tmp.path());

        let result = submit(
            State(state),
            Json(SubmitRequest {
                coordinates: Some(vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]),
            }),
        )
        .await;

        let (status, Json(body)) = result.err().unwrap();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.error.contains("geometry") || body.error.contains("polygon"));
    }

    #[tokio::test]
    async fn test_identical_requests_are_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let state = state_with(UniformProvider(255), tmp.path());

        let first = submit(State(state.clone()), Json(square_request()))
            .await
            .unwrap();
        assert_eq!(first.status(), StatusCode::OK);

        let second = submit(State(state), Json(square_request())).await.unwrap();
        assert_eq!(second.status(), StatusCode::OK);

        // same content hash, so still exactly one artifact
        assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 1);
    }

    #[tokio::test]
    async fn test_home_liveness() {
        assert!(home().await.contains("running"));
    }
}
