use gate_server::error::Result as ServerErrorResult;
use gate_server::{AppState, build_router, logger};

use gate_config::Config;

use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> ServerErrorResult<()> {
    // .env is optional
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    let log_file_path = config.log_file_path()?;
    if let Some(ref path) = log_file_path
        && let Some(log_dir) = path.parent()
    {
        std::fs::create_dir_all(log_dir)?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting gate-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let state = AppState::from_config(&config)?;
    info!("User document: {}", state.credentials.store().path().display());

    // Surface a broken document at startup rather than on first request
    match state.credentials.store().load().await {
        Ok(document) => info!("{} registered user(s)", document.len()),
        Err(e) => warn!("User document is not readable: {}", e),
    }

    let app = build_router(state);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => error!("Failed to listen for SIGINT: {}", e),
    }
}
