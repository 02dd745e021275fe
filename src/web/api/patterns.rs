// src/web/api/patterns.rs
// Pattern CRUD and radar filter handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use crate::model::Pattern;
use crate::web::error::{ApiResult, IntoApiErrorOption, missing_field_error};
use crate::web::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct PatternsResponse {
    pub patterns: Vec<Pattern>,
    pub total: usize,
}

impl From<Vec<Pattern>> for PatternsResponse {
    fn from(patterns: Vec<Pattern>) -> Self {
        Self {
            total: patterns.len(),
            patterns,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub deleted: bool,
}

/// A client-supplied id is the only field the store cannot do without
pub(crate) fn require_id(pattern: &Pattern) -> ApiResult<()> {
    if pattern.id.trim().is_empty() {
        return Err(missing_field_error("id"));
    }
    Ok(())
}

pub async fn list_patterns(State(state): State<AppState>) -> Json<PatternsResponse> {
    Json(state.store.list_all().into())
}

pub async fn get_pattern(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Pattern>> {
    let pattern = state
        .store
        .get_by_id(&id)
        .ok_or_not_found("Pattern not found")?;
    Ok(Json(pattern))
}

pub async fn patterns_by_quadrant(
    State(state): State<AppState>,
    Path(quadrant): Path<String>,
) -> Json<PatternsResponse> {
    Json(state.store.list_by_quadrant(&quadrant).into())
}

pub async fn patterns_by_ring(
    State(state): State<AppState>,
    Path(ring): Path<String>,
) -> Json<PatternsResponse> {
    Json(state.store.list_by_ring(&ring).into())
}

pub async fn create_pattern(
    State(state): State<AppState>,
    Json(pattern): Json<Pattern>,
) -> ApiResult<(StatusCode, Json<Pattern>)> {
    require_id(&pattern)?;
    let created = state.store.create(pattern);
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_pattern(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(pattern): Json<Pattern>,
) -> ApiResult<Json<Pattern>> {
    let updated = state
        .store
        .update(&id, pattern)
        .ok_or_not_found("Pattern not found")?;
    Ok(Json(updated))
}

/// Deleting an unknown id is not an error; the body reports whether anything was removed.
pub async fn delete_pattern(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<DeleteResponse> {
    Json(DeleteResponse {
        deleted: state.store.delete(&id),
    })
}
