//! SQLite-backed event store.
//! Implements [`EventStore`](crate::services::store::EventStore) for the
//! local backend, split into write (`crud`) and read (`queries`) halves.

use rusqlite::Connection;

pub mod crud;
pub mod queries;
mod shared;

/// Service for managing calendar events stored in SQLite.
pub struct EventService<'a> {
    pub(crate) conn: &'a Connection,
}

impl<'a> EventService<'a> {
    /// Create a new EventService with a database connection
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}
