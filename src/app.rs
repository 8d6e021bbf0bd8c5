use axum::{Extension, Router};
use tower_http::cors::CorsLayer;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::llm::ModelClient;
use crate::routes::create_routes;

/// Initialize tracing and logging for the application
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "rs_notes_svc=info,tower_http=debug,axum::rejection=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Create and configure the Axum application with all routes and middleware
pub fn create_app(config: &Config) -> Router {
    info!("Initializing application router");

    if config.google_api_key.is_empty() {
        warn!("GOOGLE_API_KEY is not set; model invocations will fail");
    }

    // one model client per process, injected into handlers
    let client = ModelClient::new(&config.google_api_key, &config.model_name);
    info!("Model client initialized for {}", config.model_name);

    create_routes()
        .layer(Extension(client))
        .layer(CorsLayer::permissive())
}
