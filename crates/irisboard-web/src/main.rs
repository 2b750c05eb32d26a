//! Irisboard Web Server
//!
//! Run with: cargo run -p irisboard-web

use irisboard_web::config::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_tracing(debug: bool) {
    let fallback = if debug { "irisboard=debug,tower_http=debug,info" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Could not listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => { signal.recv().await; }
            Err(e) => {
                tracing::warn!("Could not listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = Config::locate()?;
    let config = match &config_path {
        Some(path) => Config::load_from(path)?,
        None => Config::default(),
    };

    init_tracing(config.server.debug);

    info!("Starting Irisboard Web Server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    match &config_path {
        Some(path) => info!("Configuration loaded from {}", path.display()),
        None => info!("No irisboard.toml found, using built-in defaults"),
    }
    if config.clustering.seed.is_none() {
        info!("No clustering seed configured; runs are not reproducible");
    }

    // Create app state
    let state = irisboard_web::state::AppState::new(config.clone())?;
    info!("Dataset ready: {} rows", state.dataset.len());

    // Build router
    let app = irisboard_web::router::build_router(state);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
