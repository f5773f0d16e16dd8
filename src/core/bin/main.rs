include!("../../lib.rs");
use std::net::SocketAddr;
use tracing::info;
use crate::core::controller::{AppState, build_router};
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;
use crate::gateway::factory::create_publisher;
use crate::store::factory::create_store;
use crate::utils::logs::setup_tracing;

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
    info!("shutting down");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Configuration::load()?;
    setup_tracing(config.log_level.as_str());

    let store_kind = RepositoryStore::JsonFile;
    let store = create_store(&config, store_kind).await?;
    let publisher = create_publisher(store_kind.gateway_publisher());
    let addr: SocketAddr = config.bind_address.parse()?;
    info!(data_dir = config.data_dir.as_str(), %addr, "library listening");

    let app = build_router(AppState::new(config, store, publisher));
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
