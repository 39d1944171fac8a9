use super::shared::to_local_datetime;
use super::EventService;
use crate::models::event::{Event, EventColor, EventDraft, EventId};
use crate::models::user::UserId;
use crate::services::error::BackendError;
use crate::services::store::EventStore;
use rusqlite::{self, Row};

impl<'a> EventService<'a> {
    /// List a user's events ordered by start time.
    pub fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Event>, BackendError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, description, start_time, end_time, color, all_day, location
             FROM events
             WHERE user_id = ?
             ORDER BY start_time ASC, id ASC",
        )?;

        let events = stmt
            .query_map([user_id.as_str()], map_event_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        log::debug!("Loaded {} local events for {}", events.len(), user_id);
        Ok(events)
    }
}

impl<'a> EventStore for EventService<'a> {
    fn list_for_user(&self, user_id: &UserId) -> Result<Vec<Event>, BackendError> {
        self.list_by_user(user_id)
    }

    fn insert(&self, user_id: &UserId, draft: &EventDraft) -> Result<EventId, BackendError> {
        self.create(user_id, draft)
    }

    fn update(&self, id: &EventId, draft: &EventDraft) -> Result<(), BackendError> {
        self.modify(id, draft)
    }

    fn delete(&self, id: &EventId) -> Result<(), BackendError> {
        self.remove(id)
    }
}

fn map_event_row(row: &Row<'_>) -> Result<Event, rusqlite::Error> {
    Ok(Event {
        id: EventId::from(row.get::<_, i64>(0)?),
        title: row.get(1)?,
        description: row.get(2)?,
        start_time: to_local_datetime(row.get::<_, String>(3)?)?,
        end_time: to_local_datetime(row.get::<_, String>(4)?)?,
        color: EventColor::from_hex_or_default(&row.get::<_, String>(5)?),
        all_day: row.get::<_, i32>(6)? != 0,
        location: row.get(7)?,
    })
}
