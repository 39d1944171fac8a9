use chrono::{DateTime, Local};
use reqwest::blocking::{Client, RequestBuilder};
use serde::{Deserialize, Serialize};

use super::{build_client, check_status, endpoint, SessionToken};
use crate::config::RemoteConfig;
use crate::models::event::{Event, EventColor, EventDraft, EventId};
use crate::models::user::UserId;
use crate::services::error::BackendError;
use crate::services::store::EventStore;

const EVENTS_PATH: &str = "rest/v1/events";

/// Row body for insert and update; `user_id` is only sent on insert
#[derive(Debug, Serialize)]
struct EventPayload<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    user_id: Option<&'a str>,
    title: &'a str,
    description: Option<&'a str>,
    start_time: DateTime<Local>,
    end_time: DateTime<Local>,
    color: EventColor,
    all_day: bool,
    location: Option<&'a str>,
}

impl<'a> EventPayload<'a> {
    fn new(user_id: Option<&'a UserId>, draft: &'a EventDraft) -> Self {
        Self {
            user_id: user_id.map(UserId::as_str),
            title: &draft.title,
            description: draft.description.as_deref(),
            start_time: draft.start_time,
            end_time: draft.end_time,
            color: draft.color,
            all_day: draft.all_day,
            location: draft.location.as_deref(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ReturnedRow {
    id: EventId,
}

/// Events table reached over a PostgREST-style HTTP API
pub struct RestEventStore {
    client: Client,
    config: RemoteConfig,
    token: SessionToken,
}

impl RestEventStore {
    pub fn new(config: RemoteConfig, token: SessionToken) -> Result<Self, BackendError> {
        Ok(Self {
            client: build_client(&config)?,
            config,
            token,
        })
    }

    fn table_url(&self) -> String {
        endpoint(&self.config, EVENTS_PATH)
    }

    /// Attach the project key and the session's bearer token (the project
    /// key stands in when signed out, as the hosted API expects)
    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        let bearer = self
            .token
            .get()
            .unwrap_or_else(|| self.config.api_key.clone());
        request
            .header("apikey", self.config.api_key.as_str())
            .bearer_auth(bearer)
    }

    /// Run a write that returns the affected rows, which is how a missing
    /// id is told apart from a successful no-op
    fn affected_rows(&self, request: RequestBuilder) -> Result<Vec<ReturnedRow>, BackendError> {
        let response = self
            .authorized(request)
            .header("Prefer", "return=representation")
            .send()?;
        check_status(response)?
            .json::<Vec<ReturnedRow>>()
            .map_err(BackendError::decode)
    }
}

impl EventStore for RestEventStore {
    fn list_for_user(&self, user_id: &UserId) -> Result<Vec<Event>, BackendError> {
        let owner_filter = format!("eq.{}", user_id);
        let response = self
            .authorized(self.client.get(self.table_url()))
            .query(&[
                ("select", "*"),
                ("user_id", owner_filter.as_str()),
                ("order", "start_time.asc"),
            ])
            .send()?;

        let events = check_status(response)?
            .json::<Vec<Event>>()
            .map_err(BackendError::decode)?;
        log::debug!("Fetched {} events for {}", events.len(), user_id);
        Ok(events)
    }

    fn insert(&self, user_id: &UserId, draft: &EventDraft) -> Result<EventId, BackendError> {
        let payload = EventPayload::new(Some(user_id), draft);
        let rows = self.affected_rows(self.client.post(self.table_url()).json(&payload))?;

        let id = rows
            .into_iter()
            .next()
            .map(|row| row.id)
            .ok_or_else(|| BackendError::Decode("insert returned no rows".to_string()))?;
        log::debug!("Inserted event {}", id);
        Ok(id)
    }

    fn update(&self, id: &EventId, draft: &EventDraft) -> Result<(), BackendError> {
        let payload = EventPayload::new(None, draft);
        let id_filter = format!("eq.{}", id);
        let rows = self.affected_rows(
            self.client
                .patch(self.table_url())
                .query(&[("id", id_filter.as_str())])
                .json(&payload),
        )?;

        if rows.is_empty() {
            return Err(BackendError::NotFound(id.clone()));
        }
        log::debug!("Updated event {}", id);
        Ok(())
    }

    fn delete(&self, id: &EventId) -> Result<(), BackendError> {
        let id_filter = format!("eq.{}", id);
        let rows = self.affected_rows(
            self.client
                .delete(self.table_url())
                .query(&[("id", id_filter.as_str())]),
        )?;

        if rows.is_empty() {
            return Err(BackendError::NotFound(id.clone()));
        }
        log::debug!("Deleted event {}", id);
        Ok(())
    }
}
