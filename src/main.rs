use dotenv::dotenv;
use log::{error, info};
use std::sync::Arc;

mod config;
mod error;
mod models;
mod repositories;
mod routes;
mod services;
mod utils;

use crate::config::Config;
use crate::repositories::MongoTransactionRepository;
use crate::routes::AppState;
use crate::services::database;
use crate::services::seed_loader::{self, HttpSeedSource};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    env_logger::init();

    info!("Starting transaction dashboard service");
    let config = Config::from_env()?;

    let store = match database::connect_to_database(&config).await {
        Ok(store) => store,
        Err(e) => {
            error!("MongoDB connection error: {}", e);
            return Err(e.into());
        }
    };

    let repository = MongoTransactionRepository::new(store.database(), &config.collection_name);
    repository.ensure_indexes().await?;

    let state = AppState {
        store: Arc::new(repository),
        seed_source: Arc::new(HttpSeedSource::new(config.seed_url.clone())),
    };

    if config.seed_on_startup {
        info!("Seeding transactions on startup...");
        let outcome =
            seed_loader::initialize(state.store.as_ref(), state.seed_source.as_ref()).await?;
        info!("Startup seed finished: {:?}", outcome);
    }

    let app = routes::create_router(state, config.static_dir.as_deref());

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Server running on http://{}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped, closing database connection...");
    store.close().await;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received");
}
