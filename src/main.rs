//! URL Relay - An ephemeral, fingerprint-keyed URL store
//!
//! Binary entry point: wires configuration, the store, the expiry sweep task
//! and the HTTP server together.

use std::net::SocketAddr;

use anyhow::Context;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use url_relay::api::create_router;
use url_relay::tasks::watch_task;
use url_relay::{spawn_cleanup_task, AppState, Config};

/// Main entry point for the URL relay server.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Install the panic hook
/// 3. Load configuration from environment variables
/// 4. Create the URL store
/// 5. Start background expiry sweep task
/// 6. Create Axum router with all endpoints
/// 7. Start HTTP server on configured address
/// 8. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "url_relay=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    install_panic_hook();

    let config = Config::from_env();
    info!(
        "Starting server with HOST: 0.0.0.0, PORT: {}, expiration_time={}s, cleanup_interval={}s",
        config.port, config.expiration_time, config.cleanup_interval
    );

    let state = AppState::from_config(&config);
    info!("URL store initialized");

    let cleanup_handle = spawn_cleanup_task(state.store.clone(), config.cleanup_interval);
    let cleanup_abort = cleanup_handle.abort_handle();
    tokio::spawn(watch_task("expiry sweep", cleanup_handle));
    info!("Background expiry sweep task started");

    let app = create_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .inspect_err(|err| error!("Server failed to start: {}", err))
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server successfully started on http://{}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal(cleanup_abort))
    .await
    .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Logs every panic through tracing. A panic on the main thread leaves the
/// process in an unknown state, so it exits with status 1; panics on worker
/// threads are contained by tokio and only logged.
fn install_panic_hook() {
    std::panic::set_hook(Box::new(|panic_info| {
        let thread = std::thread::current();
        let thread_name = thread.name();
        error!(
            "[Fatal Error] Panic on thread '{}': {}",
            thread_name.unwrap_or("<unnamed>"),
            panic_info
        );

        if panic_is_fatal(thread_name) {
            std::process::exit(1);
        }
    }));
}

fn panic_is_fatal(thread_name: Option<&str>) -> bool {
    thread_name == Some("main")
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, aborts the sweep task and allows graceful shutdown.
async fn shutdown_signal(cleanup_abort: tokio::task::AbortHandle) {
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
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    cleanup_abort.abort();
    warn!("Expiry sweep task aborted");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_main_thread_panics_are_fatal() {
        assert!(panic_is_fatal(Some("main")));
        assert!(!panic_is_fatal(Some("tokio-runtime-worker")));
        assert!(!panic_is_fatal(None));
    }
}
