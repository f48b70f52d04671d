use super::handlers::{SharedGateway, routes};
use crate::error::Result;
use tokio::net::TcpListener;
use tracing::info;

/// Serves the gateway on `listener` until Ctrl-C.
pub async fn serve(listener: TcpListener, gateway: SharedGateway) -> Result<()> {
    let addr = listener.local_addr()?;
    info!("Starting mock card gateway on http://{}", addr);

    axum::serve(listener, routes(gateway))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Mock card gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
