use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::TimeSlot;

/// Row shape of the `classes` table
#[derive(Debug, Clone, FromRow)]
pub struct ClassRow {
    pub id: i64,
    pub name: String,
    pub date: String,
}

/// A class with its slots in position order, as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Class {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub time_slots: Vec<TimeSlot>,
}

impl Class {
    pub fn from_row(row: ClassRow, time_slots: Vec<TimeSlot>) -> Self {
        Self {
            id: row.id,
            name: row.name,
            date: Some(row.date),
            time_slots,
        }
    }

    /// Drop the date attribute for deployments that do not track it
    pub fn without_date(mut self) -> Self {
        self.date = None;
        self
    }
}

/// Input for creating a class. Slot positions follow `time_slots` order.
#[derive(Debug, Clone, Default)]
pub struct NewClass {
    pub name: String,
    pub date: String,
    pub time_slots: Vec<String>,
}
