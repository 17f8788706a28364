use std::collections::HashMap;

use sqlx::{SqliteConnection, SqlitePool};
use tracing::info;

use crate::database::manager::DatabaseError;
use crate::database::models::{Class, ClassRow, NewClass, TimeSlot};

const SELECT_CLASSES: &str = "SELECT id, name, COALESCE(date, '') AS date FROM classes";
const SELECT_SLOTS: &str =
    "SELECT id, class_id, label, COALESCE(assigned_to, '') AS assigned_to, position FROM time_slots";

/// Queries over `classes` and their owned `time_slots`
pub struct ClassRepository {
    pool: SqlitePool,
}

impl ClassRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All classes, newest first, each with its slots in position order
    pub async fn list(&self) -> Result<Vec<Class>, DatabaseError> {
        let rows: Vec<ClassRow> = sqlx::query_as(&format!("{SELECT_CLASSES} ORDER BY id DESC"))
            .fetch_all(&self.pool)
            .await?;

        let slots: Vec<TimeSlot> = sqlx::query_as(&format!("{SELECT_SLOTS} ORDER BY class_id, position"))
            .fetch_all(&self.pool)
            .await?;

        let mut by_class: HashMap<i64, Vec<TimeSlot>> = HashMap::new();
        for slot in slots {
            by_class.entry(slot.class_id).or_default().push(slot);
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let slots = by_class.remove(&row.id).unwrap_or_default();
                Class::from_row(row, slots)
            })
            .collect())
    }

    /// Single class by id, or `NotFound`
    pub async fn find(&self, id: i64) -> Result<Class, DatabaseError> {
        let row: ClassRow = sqlx::query_as(&format!("{SELECT_CLASSES} WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DatabaseError::NotFound("Class not found".to_string()))?;

        let slots = self.slots_for(id).await?;
        Ok(Class::from_row(row, slots))
    }

    async fn slots_for(&self, class_id: i64) -> Result<Vec<TimeSlot>, DatabaseError> {
        let slots = sqlx::query_as(&format!("{SELECT_SLOTS} WHERE class_id = ? ORDER BY position"))
            .bind(class_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(slots)
    }

    /// Insert a class and one slot per label, atomically. Returns the new id.
    pub async fn create(&self, new_class: &NewClass) -> Result<i64, DatabaseError> {
        let mut tx = self.pool.begin().await?;

        let class_id = insert_class(&mut tx, &new_class.name, &new_class.date).await?;
        for (position, label) in new_class.time_slots.iter().enumerate() {
            insert_slot(&mut tx, class_id, label, position as i64).await?;
        }

        tx.commit().await?;
        info!(class_id, slots = new_class.time_slots.len(), "created class");
        Ok(class_id)
    }

    /// Copy a class's name and slot layout into a new class with no date and
    /// no claimants. The source class is left untouched.
    pub async fn duplicate(&self, source_id: i64) -> Result<i64, DatabaseError> {
        let mut tx = self.pool.begin().await?;

        let name: String = sqlx::query_scalar("SELECT name FROM classes WHERE id = ?")
            .bind(source_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| DatabaseError::NotFound("Class not found".to_string()))?;

        let layout: Vec<(String, i64)> =
            sqlx::query_as("SELECT label, position FROM time_slots WHERE class_id = ? ORDER BY position")
                .bind(source_id)
                .fetch_all(&mut *tx)
                .await?;

        let class_id = insert_class(&mut tx, &name, "").await?;
        for (label, position) in &layout {
            insert_slot(&mut tx, class_id, label, *position).await?;
        }

        tx.commit().await?;
        info!(source_id, class_id, slots = layout.len(), "duplicated class");
        Ok(class_id)
    }

    /// Delete a class; its slots go with it through the cascade
    pub async fn delete(&self, id: i64) -> Result<(), DatabaseError> {
        let result = sqlx::query("DELETE FROM classes WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::NotFound("Class not found".to_string()));
        }

        info!(class_id = id, "deleted class");
        Ok(())
    }

    /// Set the claimant of one slot, keyed by slot id only. Empty clears it.
    pub async fn assign_slot(&self, slot_id: i64, assigned_to: &str) -> Result<(), DatabaseError> {
        let result = sqlx::query("UPDATE time_slots SET assigned_to = ? WHERE id = ?")
            .bind(assigned_to)
            .bind(slot_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::NotFound("Time slot not found".to_string()));
        }

        info!(slot_id, assigned = !assigned_to.is_empty(), "assigned slot");
        Ok(())
    }
}

async fn insert_class(conn: &mut SqliteConnection, name: &str, date: &str) -> Result<i64, DatabaseError> {
    let result = sqlx::query("INSERT INTO classes (name, date) VALUES (?, ?)")
        .bind(name)
        .bind(date)
        .execute(&mut *conn)
        .await?;
    Ok(result.last_insert_rowid())
}

async fn insert_slot(
    conn: &mut SqliteConnection,
    class_id: i64,
    label: &str,
    position: i64,
) -> Result<(), DatabaseError> {
    sqlx::query("INSERT INTO time_slots (class_id, label, assigned_to, position) VALUES (?, ?, '', ?)")
        .bind(class_id)
        .bind(label)
        .bind(position)
        .execute(&mut *conn)
        .await?;
    Ok(())
}
