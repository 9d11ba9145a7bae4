pub mod health;
pub mod moves;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Extension, Router,
};
use move_arbiter::MoveArbitrator;
use tower_http::cors::{Any, CorsLayer};

/// Build the application router around a shared arbitrator.
pub fn router(arbiter: Arc<MoveArbitrator>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health_check))
        .route("/api/move", post(moves::get_move))
        .layer(Extension(arbiter))
        .layer(cors)
}
