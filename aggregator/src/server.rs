//! axumサーバー起動・シャットダウンハンドリング

use crate::AppState;
use benefits_aggregator_common::config::AggregatorConfig;
use tracing::{info, warn};

/// axumサーバーを起動し、シャットダウンシグナルを待機する
pub async fn run(config: AggregatorConfig) -> anyhow::Result<()> {
    if config.upstreams.is_empty() {
        warn!("No upstreams configured; every request will be rejected with 409");
    }

    let state = AppState::new(&config, reqwest::Client::new());
    let app = crate::api::create_router(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    info!(
        upstreams = config.upstreams.len(),
        "Benefits aggregator listening on {}", bind_addr
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// シャットダウンシグナルを待機
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            info!("Received SIGTERM, shutting down...");
        }
    }
}
