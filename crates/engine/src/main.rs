use std::sync::Arc;
use anyhow::Result;
use tokio::sync::watch;
use tracing::{error, info};

use citykey_engine::{api, logging, ChatProxy, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();
    logging::init();

    let config = Config::from_env()?;
    info!(bind = %config.bind, "Starting CityKey...");

    let proxy = Arc::new(ChatProxy::from_config(&config));

    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let api_handle = tokio::spawn(async move {
        if let Err(e) = api::start_server(config.bind, proxy, shutdown_rx).await {
            error!(error = %e, "API server crashed");
        }
    });

    tokio::signal::ctrl_c().await?;
    info!("Received shutdown signal...");

    let _ = shutdown_tx.send(true);
    let _ = api_handle.await;

    info!("CityKey shutdown complete.");
    Ok(())
}
