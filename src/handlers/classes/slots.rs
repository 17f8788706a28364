// handlers/classes/slots.rs - PUT /api/classes/:class_id/slots/:slot_id handler

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::app::AppState;
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct AssignSlotRequest {
    /// Claimant name; empty (or absent) clears the slot
    #[serde(default)]
    pub assigned_to: String,
}

/// PUT /api/classes/:class_id/slots/:slot_id - set or clear a slot's claimant.
///
/// The update is keyed by slot id alone. The class id only shapes the URL and
/// is not checked against the slot's owner. Concurrent writers: last one wins.
pub async fn slot_assign(
    State(state): State<AppState>,
    path: Result<Path<(i64, i64)>, PathRejection>,
    payload: Result<Json<AssignSlotRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Path((_class_id, slot_id)) = path?;
    let Json(request) = payload?;

    state.classes().assign_slot(slot_id, &request.assigned_to).await?;

    Ok(Json(json!({ "message": "Slot assigned successfully" })))
}
