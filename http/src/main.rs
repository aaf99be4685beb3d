use anyhow::Context;
use tokio::signal;
use tracing_subscriber::EnvFilter;

mod config;
mod listener;
mod render;
mod router;

use config::ServerConfig;
use listener::SocketListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env().context("failed to read configuration")?;
    let router = router::router(&config);

    let listener = SocketListener::open(&config)
        .await
        .context("failed to open listener")?;
    tracing::info!(
        addr = %listener.local_addr()?,
        route = %config.route,
        "Server started"
    );

    axum::serve(listener.into_inner(), router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Server ended");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Ctrl+C received");
        },
        _ = terminate => {
            tracing::info!("SIGTERM received");
        }
    }
}
