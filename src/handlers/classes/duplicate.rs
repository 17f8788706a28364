// handlers/classes/duplicate.rs - POST /api/classes/:id/duplicate handler

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use crate::app::AppState;
use crate::error::ApiError;

/// POST /api/classes/:id/duplicate - fresh copy of a class's slot layout.
///
/// The copy keeps the name and each slot's label and position. Its date is
/// empty and every slot is unclaimed, whatever the source held.
pub async fn class_duplicate(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let Path(source_id) = path?;
    let id = state.classes().duplicate(source_id).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "id": id, "message": "Class duplicated successfully" })),
    ))
}
