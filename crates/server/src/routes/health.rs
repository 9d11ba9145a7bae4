use std::sync::Arc;

use axum::{Extension, Json};
use move_arbiter::MoveArbitrator;
use serde_json::{json, Value};

/// GET /health
pub async fn health_check(Extension(arbiter): Extension<Arc<MoveArbitrator>>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "llm": arbiter.has_provider(),
    }))
}
