use axum::response::Json;
use serde_json::{json, Value};

/// Health check handler.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Service info handler.
pub async fn info() -> Json<Value> {
    Json(json!({
        "name": "bookstand-server",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
