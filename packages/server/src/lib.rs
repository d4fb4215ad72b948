//! # Storefront Server
//!
//! HTTP surface of the storefront: theme CSS generated from design-tool
//! variables, the static brand catalogues, and the current-theme store.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

pub use config::{ServerConfig, DEFAULT_CONFIG_NAME};
pub use error::ApiError;
pub use routes::router;
pub use state::AppState;

use tracing::info;

/// Bind and serve until Ctrl-C
pub async fn serve(config: &ServerConfig, state: AppState) -> anyhow::Result<()> {
    let address = config.address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .map_err(|e| anyhow::anyhow!("Cannot bind {}: {}", address, e))?;

    info!(address = %address, data_dir = %state.catalogues.data_dir().display(), "Storefront server listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutting down");
        })
        .await?;

    Ok(())
}
