use std::sync::Arc;
use std::time::Duration;

use poem::{listener::TcpListener, Server};
use storeroom_backend::api::build_route;
use storeroom_backend::config::{init_database, init_logging, BootstrapSettings};
use storeroom_backend::AppData;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    init_logging().expect("Failed to initialize logging");

    let settings = BootstrapSettings::from_env().expect("Failed to load bootstrap settings");
    tracing::info!("Loaded settings: {:?}", settings);

    let database = init_database(&settings)
        .await
        .expect("Failed to connect to MongoDB");

    let app_data = Arc::new(AppData::init(database));

    let server_url = format!("http://{}", settings.server_address());
    let app = build_route(app_data, &server_url);

    tracing::info!("Starting server on {}", server_url);
    tracing::info!("Swagger UI available at {}/swagger", server_url);

    Server::new(TcpListener::bind(settings.server_address()))
        .run_with_graceful_shutdown(app, shutdown_signal(), Some(Duration::from_secs(10)))
        .await
}

/// Resolve when a shutdown signal arrives, letting in-flight requests drain
async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::error!("Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received, stopping server");
}
