use axum::{Router, http::Method, routing::get};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{health_check, list_bucket};
use crate::ports::services::ListingService;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub listing_service: Arc<dyn ListingService>,
}

/// Create the main application router with all endpoints.
///
/// Every response carries permissive cross-origin headers so the endpoint
/// is browser-callable without a separate preflight component.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .route("/list-bucket", get(list_bucket))
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
