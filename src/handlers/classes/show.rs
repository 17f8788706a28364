// handlers/classes/show.rs - GET /api/classes/:id handler

use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};

use super::present;
use crate::app::AppState;
use crate::database::models::Class;
use crate::error::ApiError;

pub async fn class_show(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Class>, ApiError> {
    let Path(id) = path?;
    let class = state.classes().find(id).await?;
    Ok(Json(present(&state, class)))
}
