use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::request_id_middleware;

use super::handlers;
use super::AppState;

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Recommendation strategies
        .route(
            "/recommendations/popularity",
            post(handlers::popularity_recommendations),
        )
        .route(
            "/recommendations/content",
            post(handlers::content_recommendations),
        )
        .route(
            "/recommendations/collaborative",
            post(handlers::collaborative_recommendations),
        )
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
