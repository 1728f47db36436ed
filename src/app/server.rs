use crate::error::DetectorError;
use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Bind `0.0.0.0:{http_port}` and serve until SIGINT/SIGTERM or `shutdown_token` is cancelled.
pub async fn serve(
    app: Router,
    http_port: u16,
    shutdown_token: CancellationToken,
) -> Result<(), DetectorError> {
    let bind_addr = format!("0.0.0.0:{http_port}");
    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| DetectorError::Bind {
            address: bind_addr.clone(),
            source: e,
        })?;
    info!("Server listening on {}", listener.local_addr()?);
    info!("  - GET  /            (article form)");
    info!("  - POST /example     (load example article)");
    info!("  - POST /analyze     (analyze article)");
    info!("  - GET  /v1/health   (health check)");

    let signal_token = shutdown_token.clone();
    tokio::spawn(async move {
        shutdown_signal().await;
        signal_token.cancel();
    });

    serve_listener(listener, app, shutdown_token).await
}

/// Serve on an already bound listener until `shutdown_token` is cancelled.
pub async fn serve_listener(
    listener: TcpListener,
    app: Router,
    shutdown_token: CancellationToken,
) -> Result<(), DetectorError> {
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_token.cancelled_owned())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Wait for SIGTERM or SIGINT (Ctrl+C) for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received SIGINT, initiating graceful shutdown"),
        () = terminate => info!("Received SIGTERM, initiating graceful shutdown"),
    }
}
