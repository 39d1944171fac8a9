use chrono::{DateTime, Duration, Local, NaiveDate, NaiveTime, Timelike};

use crate::models::event::{
    format_form_timestamp, parse_timestamp, Event, EventColor, EventDraft, EventId,
};
use crate::models::ui::ModalState;
use crate::utils::date::local_datetime;

/// Length of the window pre-filled for a new event
const DEFAULT_EVENT_MINUTES: i64 = 60;

/// Editable copy of the event fields.
///
/// Start and end are kept as the text the user types (`YYYY-MM-DDTHH:MM`) and
/// parsed only on submission.
#[derive(Debug, Clone, PartialEq)]
pub struct EventFormState {
    /// Event being edited (None for new event)
    pub event_id: Option<EventId>,
    pub title: String,
    pub description: String,
    pub location: String,
    pub start: String,
    pub end: String,
    pub color: EventColor,
    pub all_day: bool,
    pub error_message: Option<String>,
}

impl EventFormState {
    /// One-hour window on `date` starting at `hour:00`, or at the current
    /// time of day when no hour was picked
    pub fn for_new(date: NaiveDate, hour: Option<u32>, now: DateTime<Local>) -> Self {
        let start_time = hour
            .and_then(|h| NaiveTime::from_hms_opt(h, 0, 0))
            .unwrap_or_else(|| {
                let time = now.time();
                time.with_second(0)
                    .and_then(|t| t.with_nanosecond(0))
                    .unwrap_or(time)
            });
        let start = local_datetime(date, start_time);
        let end = start + Duration::minutes(DEFAULT_EVENT_MINUTES);

        Self {
            event_id: None,
            title: String::new(),
            description: String::new(),
            location: String::new(),
            start: format_form_timestamp(&start),
            end: format_form_timestamp(&end),
            color: EventColor::default(),
            all_day: false,
            error_message: None,
        }
    }

    pub fn from_event(event: &Event) -> Self {
        Self {
            event_id: Some(event.id.clone()),
            title: event.title.clone(),
            description: event.description.clone().unwrap_or_default(),
            location: event.location.clone().unwrap_or_default(),
            start: format_form_timestamp(&event.start_time),
            end: format_form_timestamp(&event.end_time),
            color: event.color,
            all_day: event.all_day,
            error_message: None,
        }
    }

    /// Form matching the modal's purpose; `None` when it is closed
    pub fn from_modal(modal: &ModalState, now: DateTime<Local>) -> Option<Self> {
        match modal {
            ModalState::Closed => None,
            ModalState::Creating { date, hour } => Some(Self::for_new(*date, *hour, now)),
            ModalState::Editing { event } => Some(Self::from_event(event)),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.event_id.is_some()
    }

    pub fn can_save(&self) -> bool {
        !self.title.trim().is_empty()
    }

    /// Validate the required fields and build the draft.
    ///
    /// Only presence and format are checked; an end before the start is
    /// passed through.
    pub fn to_draft(&self) -> Result<EventDraft, String> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err("Title is required".to_string());
        }
        let start_time = parse_field("Start time", &self.start)?;
        let end_time = parse_field("End time", &self.end)?;

        Ok(EventDraft {
            id: self.event_id.clone(),
            title: title.to_string(),
            description: optional_text(&self.description),
            start_time,
            end_time,
            color: self.color,
            all_day: self.all_day,
            location: optional_text(&self.location),
        })
    }
}

fn parse_field(label: &str, raw: &str) -> Result<DateTime<Local>, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(format!("{} is required", label));
    }
    parse_timestamp(raw).ok_or_else(|| format!("{} must look like 2024-06-15T14:00", label))
}

fn optional_text(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(date: NaiveDate, h: u32, min: u32, s: u32) -> DateTime<Local> {
        Local
            .from_local_datetime(&date.and_hms_opt(h, min, s).unwrap())
            .earliest()
            .unwrap()
    }

    #[test]
    fn test_new_from_hour_prefills_one_hour_window() {
        let form = EventFormState::for_new(date(2024, 6, 15), Some(14), Local::now());

        assert_eq!(form.start, "2024-06-15T14:00");
        assert_eq!(form.end, "2024-06-15T15:00");
        assert!(!form.is_editing());
        assert_eq!(form.color, EventColor::Blue);
    }

    #[test]
    fn test_new_without_hour_uses_current_time_of_day() {
        let now = at(date(2024, 1, 2), 9, 41, 37);
        let form = EventFormState::for_new(date(2024, 6, 15), None, now);

        assert_eq!(form.start, "2024-06-15T09:41");
        assert_eq!(form.end, "2024-06-15T10:41");
    }

    #[test]
    fn test_last_hour_rolls_into_next_day() {
        let form = EventFormState::for_new(date(2024, 6, 15), Some(23), Local::now());
        assert_eq!(form.end, "2024-06-16T00:00");
    }

    #[test]
    fn test_edit_populates_exact_values_and_keeps_id() {
        let day = date(2024, 6, 15);
        let mut draft = EventDraft::new("Dentist", at(day, 14, 0, 0), at(day, 15, 30, 0));
        draft.description = Some("Checkup".to_string());
        draft.location = Some("Main St".to_string());
        draft.color = EventColor::Purple;
        draft.all_day = true;
        let event = draft.into_event(EventId::new("evt-9"));

        let form = EventFormState::from_event(&event);
        assert_eq!(form.title, "Dentist");
        assert_eq!(form.start, "2024-06-15T14:00");
        assert_eq!(form.end, "2024-06-15T15:30");
        assert_eq!(form.description, "Checkup");
        assert_eq!(form.location, "Main St");
        assert_eq!(form.color, EventColor::Purple);
        assert!(form.all_day);

        let saved = form.to_draft().unwrap();
        assert_eq!(saved.id, Some(EventId::new("evt-9")));
        assert!(saved.is_update());
        assert_eq!(saved.into_event(EventId::new("evt-9")), event);
    }

    #[test]
    fn test_missing_title_blocks_submission() {
        let mut form = EventFormState::for_new(date(2024, 6, 15), Some(9), Local::now());
        form.title = "   ".to_string();

        assert!(!form.can_save());
        assert_eq!(form.to_draft(), Err("Title is required".to_string()));
    }

    #[test]
    fn test_unparseable_times_block_submission() {
        let mut form = EventFormState::for_new(date(2024, 6, 15), Some(9), Local::now());
        form.title = "Standup".to_string();
        form.end = String::new();
        assert_eq!(form.to_draft(), Err("End time is required".to_string()));

        form.end = "tomorrow".to_string();
        assert!(form.to_draft().unwrap_err().starts_with("End time must look like"));
    }

    #[test]
    fn test_end_before_start_is_accepted() {
        let mut form = EventFormState::for_new(date(2024, 6, 15), Some(9), Local::now());
        form.title = "Backwards".to_string();
        form.end = "2024-06-15T08:00".to_string();

        let draft = form.to_draft().unwrap();
        assert!(draft.end_time < draft.start_time);
        assert!(draft.description.is_none());
        assert!(draft.location.is_none());
    }

    #[test]
    fn test_from_modal_follows_purpose() {
        let now = Local::now();
        assert!(EventFormState::from_modal(&ModalState::Closed, now).is_none());

        let creating = ModalState::Creating {
            date: date(2024, 6, 15),
            hour: Some(14),
        };
        let form = EventFormState::from_modal(&creating, now).unwrap();
        assert_eq!(form.start, "2024-06-15T14:00");
    }
}
