// Event module
// Calendar event model as stored in the events table

use chrono::{DateTime, Local};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

mod color;
mod timestamp;

pub use color::EventColor;
pub use timestamp::{format_form_timestamp, parse_timestamp, FORM_TIMESTAMP_FORMAT};

/// Opaque, server-assigned event identifier.
///
/// Hosted stores hand out UUID strings while the local store uses integer
/// row ids, so both JSON strings and numbers are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<i64> for EventId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for EventId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(i64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => EventId(text),
            RawId::Number(number) => EventId::from(number),
        })
    }
}

/// A calendar event owned by the signed-in user.
///
/// The owning user id lives only in the store; it is supplied at insert time
/// and never surfaces in the client-side model. `start_time <= end_time` is
/// expected but not enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub start_time: DateTime<Local>,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub end_time: DateTime<Local>,
    #[serde(default)]
    pub color: EventColor,
    #[serde(default)]
    pub all_day: bool,
    #[serde(default)]
    pub location: Option<String>,
}

impl Event {
    /// Get the duration of the event
    pub fn duration(&self) -> chrono::Duration {
        self.end_time - self.start_time
    }

    /// Start time rendered the way cells label events ("2:00 PM")
    pub fn start_label(&self) -> String {
        self.start_time.format("%-I:%M %p").to_string()
    }

    /// Start-to-end range for the day view ("2:00 PM - 3:00 PM")
    pub fn time_range_label(&self) -> String {
        format!(
            "{} - {}",
            self.start_label(),
            self.end_time.format("%-I:%M %p")
        )
    }
}

/// Field set emitted by the event form.
///
/// `id` is present when an existing event is being edited; the consumer
/// dispatches to update in that case and to insert otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct EventDraft {
    pub id: Option<EventId>,
    pub title: String,
    pub description: Option<String>,
    pub start_time: DateTime<Local>,
    pub end_time: DateTime<Local>,
    pub color: EventColor,
    pub all_day: bool,
    pub location: Option<String>,
}

impl EventDraft {
    /// Create a draft for a new event with the default color
    pub fn new(
        title: impl Into<String>,
        start_time: DateTime<Local>,
        end_time: DateTime<Local>,
    ) -> Self {
        Self {
            id: None,
            title: title.into(),
            description: None,
            start_time,
            end_time,
            color: EventColor::default(),
            all_day: false,
            location: None,
        }
    }

    /// Draft carrying every field of an existing event, id included
    pub fn from_event(event: &Event) -> Self {
        Self {
            id: Some(event.id.clone()),
            title: event.title.clone(),
            description: event.description.clone(),
            start_time: event.start_time,
            end_time: event.end_time,
            color: event.color,
            all_day: event.all_day,
            location: event.location.clone(),
        }
    }

    pub fn is_update(&self) -> bool {
        self.id.is_some()
    }

    /// Materialize the draft as a stored event under `id`
    pub fn into_event(self, id: EventId) -> Event {
        Event {
            id,
            title: self.title,
            description: self.description,
            start_time: self.start_time,
            end_time: self.end_time,
            color: self.color,
            all_day: self.all_day,
            location: self.location,
        }
    }
}
