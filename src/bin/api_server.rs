use std::sync::Arc;

use terrascope::api::{create_router, AppState};
use terrascope::{ArtifactStore, Config, SentinelHubClient};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = Config::from_env().unwrap_or_else(|e| {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    });

    let provider = SentinelHubClient::new(config.credentials.clone(), config.endpoints.clone());
    let artifacts = ArtifactStore::new(&config.output_dir).unwrap_or_else(|e| {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    });

    let app = create_router(AppState::new(Arc::new(provider), artifacts));

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind port");

    println!("🚀 Terrascope Imagery API Server");
    println!("📡 Listening on http://{}", addr);
    println!();
    println!("📍 Endpoints:");
    println!("  GET  /        liveness check");
    println!("  POST /submit  JSON body: {{\"coordinates\": [[lon, lat], ...]}}");
    println!();

    axum::serve(listener, app)
        .await
        .expect("Server error");
}
