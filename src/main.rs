use rs_notes_svc::app::{create_app, init_tracing};
use rs_notes_svc::config::Config;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Initialize tracing/logging
    init_tracing();

    info!("Starting RS Notes Service...");

    // Load configuration
    let config = Config::from_env();
    info!("Listening address configured: {}", config.bind_address());

    // Create the application
    let app = create_app(&config);

    // Create TCP listener
    let listener = match tokio::net::TcpListener::bind(&config.bind_address()).await {
        Ok(listener) => {
            info!("Server running on {}", config.server_url());
            info!("Health check: GET /health");
            info!("Task endpoints: POST /summarize /codelyzer /codegena /debugger");
            listener
        }
        Err(e) => {
            error!("Failed to bind to {}: {}", config.bind_address(), e);
            std::process::exit(1);
        }
    };

    // Start the server
    info!("Server starting...");
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
    } else {
        info!("Server shutdown gracefully");
    }
}
