use std::sync::Arc;

use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use papyrus_client::{LopdfParser, ReqwestFetcher};
use papyrus_core::config::Settings;
use papyrus_core::service::ExtractionService;
use papyrus_server::routes;
use papyrus_server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("papyrus=info".parse()?))
        .with_target(false)
        .init();

    let settings = Settings::from_env()?;
    tracing::info!(
        max_concurrency = settings.max_concurrency,
        request_timeout_secs = settings.request_timeout_secs,
        max_file_size_bytes = settings.max_file_size_bytes,
        "Loaded settings"
    );

    let port = std::env::var("PAPYRUS_SERVER_PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("0.0.0.0:{port}");

    let fetcher = ReqwestFetcher::from_settings(&settings)?;
    let service = ExtractionService::new(fetcher, LopdfParser::new());
    let state = Arc::new(AppState { service, settings });

    let app = routes::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    tracing::info!("Starting server on {addr}");
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install CTRL+C handler");
    tracing::info!("Shutdown signal received");
}
