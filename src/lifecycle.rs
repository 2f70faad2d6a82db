//! Server lifecycle: startup hook, serve loop, shutdown hook.

use std::future::Future;

use tokio::net::TcpListener;
use tokio::signal;

use crate::common::{AppState, Phase};
use crate::error::AppResult;
use crate::routes;

/// Runs once before the listener starts accepting connections.
///
/// # Errors
///
/// Currently infallible; the signature leaves room for fail-fast startup work.
pub async fn startup(state: &AppState) -> AppResult<()> {
    state.set_phase(Phase::Running);
    tracing::info!(deployment = ?state.config.deployment, "Startup hook complete");
    Ok(())
}

/// Runs once after the server has stopped accepting connections and drained
/// in-flight requests.
///
/// # Errors
///
/// Currently infallible.
pub async fn shutdown(state: &AppState) -> AppResult<()> {
    state.set_phase(Phase::Stopped);
    tracing::info!("Shutdown hook complete");
    Ok(())
}

/// Run the full lifecycle on an already bound listener.
///
/// Serving stops when `stop` resolves.
///
/// # Errors
///
/// Returns an error if a hook fails or the server hits an I/O error.
pub async fn serve<F>(listener: TcpListener, state: AppState, stop: F) -> AppResult<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    startup(&state).await?;

    let app = routes::build_router(state.clone());
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(address = %addr, "Accepting connections");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(stop)
        .await?;

    shutdown(&state).await
}

/// Resolves on Ctrl+C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        },
        () = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        },
    }
}
