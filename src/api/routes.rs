use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use super::handlers::*;
use super::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/submit", post(submit))
        .layer(ServiceBuilder::new().layer(CorsLayer::permissive()))
        .with_state(state)
}
