//! # Lobby Users Server
//!
//! Loads configuration, wires the users module and serves the REST API
//! until Ctrl+C or SIGTERM.

use anyhow::Context;
use lobby_config::{AppConfig, ConfigLoader};
use lobby_rest::create_router;
use lobby_server::{
    di::build_users_module,
    logging::init_logging,
    startup::{print_startup_info, shutdown_signal},
};
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ConfigLoader::from_default_location()?.get();
    init_logging(&config.observability)?;

    info!("Starting Lobby users server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(config).await {
        error!("Application error: {:#}", e);
        return Err(e);
    }
    Ok(())
}

async fn run(config: AppConfig) -> anyhow::Result<()> {
    let module = build_users_module();
    let router = create_router(module.as_ref(), &config);

    let addr = config.server.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind REST listener on {}", addr))?;

    print_startup_info(&config);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("REST server error")?;

    info!("Server shutdown complete");
    Ok(())
}
