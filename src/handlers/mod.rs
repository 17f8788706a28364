// handlers/mod.rs - HTTP handlers
//
// classes/  - class and time slot endpoints under /api/classes
// health    - store liveness probe

pub mod classes;
mod health;

use crate::error::ApiError;

pub use health::health;

/// Router fallback for paths outside the API
pub async fn not_found() -> ApiError {
    ApiError::not_found("Not found")
}
