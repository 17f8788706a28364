// handlers/classes/delete.rs - DELETE /api/classes/:id handler

use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};
use serde_json::{json, Value};

use crate::app::AppState;
use crate::error::ApiError;

/// DELETE /api/classes/:id - removes the class; the store cascades to its slots
pub async fn class_delete(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Value>, ApiError> {
    let Path(id) = path?;
    state.classes().delete(id).await?;
    Ok(Json(json!({ "message": "Class deleted successfully" })))
}
