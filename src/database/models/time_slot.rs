use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A claimable slot within a class. An empty `assigned_to` means unclaimed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct TimeSlot {
    pub id: i64,
    #[serde(skip)]
    pub class_id: i64,
    pub label: String,
    pub assigned_to: String,
    pub position: i64,
}

