// src/web/api/mod.rs
// REST API handlers

mod operations;
mod patterns;

use axum::{Json, extract::State};
use serde_json::{Value, json};

use crate::web::state::AppState;

// Re-export all handlers for router compatibility
pub use operations::{Operation, run_operation};
pub use patterns::{
    DeleteResponse, PatternsResponse, create_pattern, delete_pattern, get_pattern, list_patterns,
    patterns_by_quadrant, patterns_by_ring, update_pattern,
};

// ═══════════════════════════════════════
// HEALTH
// ═══════════════════════════════════════

pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "patterns": state.store.len(),
    }))
}
