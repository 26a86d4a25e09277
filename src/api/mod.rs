//! HTTP surface for the imagery relay

pub mod handlers;
pub mod models;
pub mod routes;

pub use routes::create_router;

use std::sync::Arc;

use crate::imagery::ArtifactStore;
use crate::provider::ImageryProvider;

/// Shared state injected into request handlers.
///
/// Built once at startup from [`Config`](crate::config::Config); handlers
/// never read ambient globals.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn ImageryProvider>,
    pub artifacts: ArtifactStore,
}

impl AppState {
    /// Creates state around a provider and artifact store
    pub fn new(provider: Arc<dyn ImageryProvider>, artifacts: ArtifactStore) -> Self {
        Self {
            provider,
            artifacts,
        }
    }
}
