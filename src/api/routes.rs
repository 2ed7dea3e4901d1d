use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::handlers;
use super::AppState;

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Debounced search pipeline
        .route("/search/text", post(handlers::set_search_text))
        .route("/search/state", get(handlers::get_search_state))
        // One-shot search
        .route("/search/movies", get(handlers::search_movies))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
