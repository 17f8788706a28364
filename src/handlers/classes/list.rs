// handlers/classes/list.rs - GET /api/classes handler

use axum::{extract::State, Json};

use super::present;
use crate::app::AppState;
use crate::database::models::Class;
use crate::error::ApiError;

/// GET /api/classes - every class, newest first, with nested slots.
/// Always a JSON array, empty when there are no classes.
pub async fn class_list(State(state): State<AppState>) -> Result<Json<Vec<Class>>, ApiError> {
    let classes = state.classes().list().await?;
    Ok(Json(classes.into_iter().map(|c| present(&state, c)).collect()))
}
