use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nereo_ml::common::AppState;
use nereo_ml::config::Config;
use nereo_ml::error::AppResult;
use nereo_ml::lifecycle;

#[tokio::main]
async fn main() -> AppResult<()> {
    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,nereo_ml=debug".into());
    let registry = tracing_subscriber::registry().with(filter);
    if std::env::var("LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json")) {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting nereo-ml...");

    // Load configuration (fail-fast)
    let config = Config::from_env()?;
    tracing::info!(
        deployment = ?config.deployment,
        host = %config.api_host,
        port = config.api_port,
        "Configuration loaded"
    );

    let addr = config.bind_address();
    let state = AppState::new(config);

    // Start server with graceful shutdown
    tracing::info!(address = %addr, "Starting server");
    let listener = TcpListener::bind(&addr).await?;
    lifecycle::serve(listener, state, lifecycle::shutdown_signal()).await?;

    tracing::info!("Server shut down gracefully");
    Ok(())
}
