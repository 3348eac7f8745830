//! API routes.

pub mod cart;
pub mod health;
pub mod sessions;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::state::AppState;

/// Creates the API router.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/sessions", post(sessions::create_handler))
        .route(
            "/sessions/:id",
            get(sessions::get_handler)
                .put(sessions::update_handler)
                .delete(sessions::delete_handler),
        )
        .route("/sessions/:id/extend", post(sessions::extend_handler))
        .route(
            "/cart/:id",
            post(cart::add_item_handler).get(cart::get_cart_handler),
        )
        .route("/health", get(health::health_handler))
        .route("/health/ready", get(health::ready_handler))
        .route("/health/live", get(health::live_handler))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
