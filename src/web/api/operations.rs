// src/web/api/operations.rs
// Named query/mutation endpoint: one POST body selects the operation by name
// and the reply is wrapped as {"data": {"<operation>": result}}

use axum::{Json, extract::State};
use serde::Deserialize;
use serde_json::{Map, Value, json};
use tracing::{debug, error};

use crate::model::Pattern;
use crate::store::PatternStore;
use crate::web::api::patterns::require_id;
use crate::web::error::{ApiError, ApiResult};
use crate::web::state::AppState;

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "operation", rename_all = "camelCase")]
pub enum Operation {
    Patterns,
    PatternById { id: String },
    PatternsByQuadrant { quadrant: String },
    PatternsByRing { ring: String },
    CreatePattern { pattern: Pattern },
    UpdatePattern { id: String, pattern: Pattern },
    DeletePattern { id: String },
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Patterns => "patterns",
            Operation::PatternById { .. } => "patternById",
            Operation::PatternsByQuadrant { .. } => "patternsByQuadrant",
            Operation::PatternsByRing { .. } => "patternsByRing",
            Operation::CreatePattern { .. } => "createPattern",
            Operation::UpdatePattern { .. } => "updatePattern",
            Operation::DeletePattern { .. } => "deletePattern",
        }
    }

    /// Run against the store. Absent patterns come back as `null`.
    pub fn execute(self, store: &PatternStore) -> ApiResult<Value> {
        let value = match self {
            Operation::Patterns => serde_json::to_value(store.list_all()),
            Operation::PatternById { id } => serde_json::to_value(store.get_by_id(&id)),
            Operation::PatternsByQuadrant { quadrant } => {
                serde_json::to_value(store.list_by_quadrant(&quadrant))
            }
            Operation::PatternsByRing { ring } => serde_json::to_value(store.list_by_ring(&ring)),
            Operation::CreatePattern { pattern } => {
                require_id(&pattern)?;
                serde_json::to_value(store.create(pattern))
            }
            Operation::UpdatePattern { id, pattern } => {
                serde_json::to_value(store.update(&id, pattern))
            }
            Operation::DeletePattern { id } => Ok(Value::Bool(store.delete(&id))),
        };

        value.map_err(|e| {
            error!("Failed to serialize operation result: {:?}", e);
            ApiError::internal("Failed to serialize operation result")
        })
    }
}

pub async fn run_operation(
    State(state): State<AppState>,
    Json(operation): Json<Operation>,
) -> ApiResult<Json<Value>> {
    let name = operation.name();
    debug!(operation = name, "Running operation");

    let result = operation.execute(&state.store)?;

    let mut data = Map::new();
    data.insert(name.to_string(), result);
    Ok(Json(json!({ "data": data })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn parse(body: &str) -> Operation {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_parse_operation_names() {
        assert!(matches!(parse(r#"{"operation": "patterns"}"#), Operation::Patterns));
        assert!(matches!(
            parse(r#"{"operation": "patternById", "id": "1"}"#),
            Operation::PatternById { id } if id == "1"
        ));
        assert!(matches!(
            parse(r#"{"operation": "patternsByRing", "ring": "trial"}"#),
            Operation::PatternsByRing { ring } if ring == "trial"
        ));
        assert_eq!(
            parse(r#"{"operation": "deletePattern", "id": "1"}"#).name(),
            "deletePattern"
        );
    }

    #[test]
    fn test_unknown_operation_rejected() {
        assert!(serde_json::from_str::<Operation>(r#"{"operation": "dropAll"}"#).is_err());
    }

    #[test]
    fn test_execute_by_id_missing_is_null() {
        let store = PatternStore::with_patterns(seed::sample_patterns());
        let value = Operation::PatternById {
            id: "999".to_string(),
        }
        .execute(&store)
        .unwrap();
        assert!(value.is_null());
    }

    #[test]
    fn test_execute_update_forces_id() {
        let store = PatternStore::with_patterns(seed::sample_patterns());
        let value = parse(
            r#"{"operation": "updatePattern", "id": "1",
                "pattern": {"id": "ignored", "name": "Renamed", "ring": "trial"}}"#,
        )
        .execute(&store)
        .unwrap();

        assert_eq!(value["id"], "1");
        assert_eq!(value["name"], "Renamed");
        assert_eq!(store.list_by_ring("TRIAL").len(), 1);
    }

    #[test]
    fn test_execute_create_requires_id() {
        let store = PatternStore::new();
        let err = parse(r#"{"operation": "createPattern", "pattern": {"name": "No id"}}"#)
            .execute(&store)
            .unwrap_err();
        assert_eq!(err.status_code, axum::http::StatusCode::BAD_REQUEST);
        assert!(store.is_empty());
    }

    #[test]
    fn test_execute_delete_twice() {
        let store = PatternStore::with_patterns(seed::sample_patterns());
        let delete = Operation::DeletePattern { id: "1".to_string() };

        assert_eq!(delete.clone().execute(&store).unwrap(), Value::Bool(true));
        assert_eq!(delete.execute(&store).unwrap(), Value::Bool(false));
    }
}
