use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use resale_api::{app, AppState};
use resale_order::OrderManager;
use resale_store::{app_config::Config, FileBlobStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "resale_api=debug,resale_order=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!("Starting resale order book on port {}", config.server.port);

    let store = FileBlobStore::new(config.storage.data_dir.clone())
        .with_context(|| format!("Failed to open data dir {}", config.storage.data_dir.display()))?;
    let manager = OrderManager::load(Arc::new(store), config.default_settings());

    let app = app(AppState::new(manager, config.summary.clone()));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
