// handlers/classes/create.rs - POST /api/classes handler

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::app::AppState;
use crate::database::models::NewClass;
use crate::error::ApiError;

/**
 * Expected Input:
 * ```json
 * {
 *   "name": "Yoga",               // Required, non-blank
 *   "date": "2024-05-01",         // Optional, ignored when dates are disabled
 *   "time_slots": ["9am", "10am"] // Optional, slot labels in display order
 * }
 * ```
 */
#[derive(Debug, Deserialize)]
pub struct CreateClassRequest {
    pub name: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub time_slots: Option<Vec<String>>,
}

impl CreateClassRequest {
    fn validate(self, date_field_enabled: bool) -> Result<NewClass, ApiError> {
        if self.name.trim().is_empty() {
            return Err(ApiError::bad_request("name must not be empty"));
        }

        let time_slots = self.time_slots.unwrap_or_default();
        if let Some(index) = time_slots.iter().position(|label| label.trim().is_empty()) {
            return Err(ApiError::bad_request(format!("time_slots[{}] must not be empty", index)));
        }

        let date = if date_field_enabled {
            self.date.unwrap_or_default()
        } else {
            String::new()
        };

        Ok(NewClass {
            name: self.name,
            date,
            time_slots,
        })
    }
}

/// POST /api/classes - create a class and its slots in one transaction
pub async fn class_create(
    State(state): State<AppState>,
    payload: Result<Json<CreateClassRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let Json(request) = payload?;
    let new_class = request.validate(state.date_field_enabled())?;

    let id = state.classes().create(&new_class).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "id": id, "message": "Class created successfully" })),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(body: Value) -> CreateClassRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn missing_slots_become_empty_list() {
        let new_class = request(json!({ "name": "Yoga" })).validate(true).unwrap();
        assert!(new_class.time_slots.is_empty());
        assert_eq!(new_class.date, "");

        let new_class = request(json!({ "name": "Yoga", "time_slots": null })).validate(true).unwrap();
        assert!(new_class.time_slots.is_empty());
    }

    #[test]
    fn blank_name_or_label_is_rejected() {
        assert!(request(json!({ "name": "  " })).validate(true).is_err());

        let err = request(json!({ "name": "Yoga", "time_slots": ["9am", ""] }))
            .validate(true)
            .unwrap_err();
        assert_eq!(err.message(), "time_slots[1] must not be empty");
    }

    #[test]
    fn date_is_dropped_when_disabled() {
        let body = json!({ "name": "Yoga", "date": "2024-05-01" });
        assert_eq!(request(body.clone()).validate(true).unwrap().date, "2024-05-01");
        assert_eq!(request(body).validate(false).unwrap().date, "");
    }

    #[test]
    fn missing_name_fails_to_deserialize() {
        assert!(serde_json::from_value::<CreateClassRequest>(json!({ "time_slots": [] })).is_err());
    }
}
