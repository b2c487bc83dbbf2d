use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing::info;

use super::routes::create_router;
use crate::proxy::ChatProxy;

pub async fn start_server(
    bind: SocketAddr,
    proxy: Arc<ChatProxy>,
    shutdown_rx: watch::Receiver<bool>,
) -> Result<()> {
    let listener = TcpListener::bind(bind).await?;
    serve(listener, proxy, shutdown_rx).await
}

pub async fn serve(
    listener: TcpListener,
    proxy: Arc<ChatProxy>,
    shutdown_rx: watch::Receiver<bool>,
) -> Result<()> {
    let app = create_router().with_state(proxy);

    info!("CityKey API server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_rx))
        .await?;

    Ok(())
}

async fn shutdown_signal(mut shutdown_rx: watch::Receiver<bool>) {
    while !*shutdown_rx.borrow() {
        if shutdown_rx.changed().await.is_err() {
            break;
        }
    }
    info!("Shutting down API server...");
}
