//! Hospital Records - Main Entry Point

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hospital_records::infrastructure::driven_adapters::{AppConfig, HtmlViewRenderer, StorageGateway};
use hospital_records::infrastructure::driving_adapters::web::{self, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing; LOG_FORMAT=json switches to structured output
    let json_logs = std::env::var("LOG_FORMAT").is_ok_and(|format| format == "json");
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hospital_records=debug,tower_http=debug".into()),
        )
        .with(json_logs.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json_logs).then(tracing_subscriber::fmt::layer))
        .init();

    // Load configuration
    let config = AppConfig::load()?;
    tracing::info!("Configuration loaded successfully");

    // Open the store and bring the schema up to date
    let storage = StorageGateway::connect(&config.database).await?;
    tracing::info!(url = %config.database.url, "Database connection pool created");
    storage.initialize().await?;

    let addr = config.bind_address();
    let app_state = AppState::new(&storage, Arc::new(HtmlViewRenderer::new()));
    let app = web::router(app_state);

    // Start server
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
