//! Event store seam.
//!
//! The page controller talks to its backing table only through this trait:
//! one un-batched call per user action, no caching.

use crate::models::event::{Event, EventDraft, EventId};
use crate::models::user::UserId;
use crate::services::error::BackendError;

#[cfg_attr(test, mockall::automock)]
pub trait EventStore {
    /// Every event owned by `user_id`, ordered by start time ascending
    fn list_for_user(&self, user_id: &UserId) -> Result<Vec<Event>, BackendError>;

    /// Insert a new row owned by `user_id` and return its server-assigned id
    fn insert(&self, user_id: &UserId, draft: &EventDraft) -> Result<EventId, BackendError>;

    /// Overwrite the row with `id` with the draft's fields
    fn update(&self, id: &EventId, draft: &EventDraft) -> Result<(), BackendError>;

    /// Remove the row with `id`; a missing row is an error
    fn delete(&self, id: &EventId) -> Result<(), BackendError>;
}
