use std::sync::Arc;
use storefront_server_lib::api::config::Config;
use storefront_server_lib::api::server;
use storefront_server_lib::api::state::AppState;
use storefront_server_lib::data::database::Database;
use storefront_server_lib::data::repos::implementors::memory_store::MemoryStore;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::new();

    let state = match config.database_url.as_deref() {
        Some(url) => {
            let db = Database::connect(url, config.database_pool_size)
                .expect("Failed to create database connection pool");
            AppState::from_database(db)
        }
        None => {
            tracing::warn!("DATABASE_URL not set, serving from an empty in-memory store");
            AppState::in_memory(Arc::new(MemoryStore::new()))
        }
    };

    if let Err(e) = server::start(&config, state).await {
        tracing::error!("Server stopped: {}", e);
        std::process::exit(1);
    }
}
