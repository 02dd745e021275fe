// src/web/state.rs
// Web server state management

use std::sync::Arc;

use crate::store::PatternStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// The process-wide pattern catalog
    pub store: Arc<PatternStore>,
}

impl AppState {
    pub fn new(store: Arc<PatternStore>) -> Self {
        Self { store }
    }
}
