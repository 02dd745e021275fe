// src/web/mod.rs
// Web server layer for the pattern catalog

pub mod api;
pub mod error;
pub mod state;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::web::state::AppState;

pub use error::{ApiError, ApiResult};

/// Create the web server router
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API routes (REST)
    let api_router = Router::new()
        .route("/health", get(api::health))
        .route(
            "/patterns",
            get(api::list_patterns).post(api::create_pattern),
        )
        .route(
            "/patterns/{id}",
            get(api::get_pattern)
                .put(api::update_pattern)
                .delete(api::delete_pattern),
        )
        .route(
            "/patterns/quadrant/{quadrant}",
            get(api::patterns_by_quadrant),
        )
        .route("/patterns/ring/{ring}", get(api::patterns_by_ring))
        // Named query/mutation operations
        .route("/operations", post(api::run_operation))
        .with_state(state.clone());

    Router::new()
        // Health check at root level
        .route("/health", get(api::health))
        .nest("/api", api_router)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until the listener fails
pub async fn serve(state: AppState, bind_address: &str) -> anyhow::Result<()> {
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(bind_address).await?;

    info!("Pattern radar listening on http://{}", bind_address);
    axum::serve(listener, app).await?;

    Ok(())
}
