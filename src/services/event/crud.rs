use super::shared::{row_id, to_storage_timestamp};
use super::EventService;
use crate::models::event::{EventDraft, EventId};
use crate::models::user::UserId;
use crate::services::error::BackendError;
use rusqlite::params;

impl<'a> EventService<'a> {
    /// Insert a new event row owned by `user_id`.
    pub fn create(&self, user_id: &UserId, draft: &EventDraft) -> Result<EventId, BackendError> {
        self.conn.execute(
            "INSERT INTO events (
                user_id, title, description, start_time, end_time, color, all_day, location
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
            params![
                user_id.as_str(),
                draft.title,
                draft.description,
                to_storage_timestamp(&draft.start_time),
                to_storage_timestamp(&draft.end_time),
                draft.color.hex(),
                draft.all_day as i32,
                draft.location,
            ],
        )?;

        let id = EventId::from(self.conn.last_insert_rowid());
        log::debug!("Inserted local event {} for {}", id, user_id);
        Ok(id)
    }

    /// Overwrite an existing event's fields.
    pub fn modify(&self, id: &EventId, draft: &EventDraft) -> Result<(), BackendError> {
        let rows_affected = self.conn.execute(
            "UPDATE events SET
                title = ?, description = ?, start_time = ?, end_time = ?,
                color = ?, all_day = ?, location = ?, updated_at = CURRENT_TIMESTAMP
             WHERE id = ?",
            params![
                draft.title,
                draft.description,
                to_storage_timestamp(&draft.start_time),
                to_storage_timestamp(&draft.end_time),
                draft.color.hex(),
                draft.all_day as i32,
                draft.location,
                row_id(id)?,
            ],
        )?;

        if rows_affected == 0 {
            return Err(BackendError::NotFound(id.clone()));
        }

        Ok(())
    }

    /// Delete an event by ID.
    pub fn remove(&self, id: &EventId) -> Result<(), BackendError> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM events WHERE id = ?", [row_id(id)?])?;

        if rows_affected == 0 {
            return Err(BackendError::NotFound(id.clone()));
        }

        Ok(())
    }
}
