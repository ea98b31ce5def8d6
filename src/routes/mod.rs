pub mod endpoints;
mod transaction_routes;

use std::path::Path;
use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};

use crate::repositories::TransactionStore;
use crate::services::seed_loader::SeedSource;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TransactionStore>,
    pub seed_source: Arc<dyn SeedSource>,
}

/// Builds the API router. With `static_dir` set, unmatched paths serve the built
/// dashboard and fall back to its `index.html`.
pub fn create_router(state: AppState, static_dir: Option<&Path>) -> Router {
    let mut router = Router::new()
        .route(endpoints::TRANSACTIONS, get(transaction_routes::list_transactions))
        .route(endpoints::TRANSACTIONS_SLASH, get(transaction_routes::list_transactions))
        .route(endpoints::INITIALIZE, get(transaction_routes::initialize_database))
        .route(endpoints::STATISTICS, get(transaction_routes::get_statistics))
        .route(endpoints::BAR_CHART, get(transaction_routes::get_bar_chart))
        .route(endpoints::PIE_CHART, get(transaction_routes::get_pie_chart))
        .route(endpoints::COMBINED, get(transaction_routes::get_combined))
        .with_state(state);

    if let Some(dir) = static_dir {
        let index = ServeFile::new(dir.join("index.html"));
        router = router.fallback_service(ServeDir::new(dir).fallback(index));
    }

    router.layer(CorsLayer::permissive())
}
