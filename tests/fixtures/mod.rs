// Test fixtures - reusable test data
// Provides consistent dates, events and backends across all test files

#![allow(dead_code)]

use chrono::{DateTime, Local, NaiveDate, NaiveTime};
use cloud_calendar::controller::PageController;
use cloud_calendar::models::event::{EventColor, EventDraft};
use cloud_calendar::models::ui::ViewMode;
use cloud_calendar::services::auth::LocalAuth;
use cloud_calendar::services::database::Database;
use cloud_calendar::services::event::EventService;
use cloud_calendar::utils::date::local_datetime;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Saturday, June 15, 2024
    pub fn mid_june_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    /// Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }

    /// Jan 31, 2025, for month clamping
    pub fn end_of_january_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 31).unwrap()
    }

    /// Local wall-clock instant on `date`
    pub fn at(date: NaiveDate, hour: u32, minute: u32) -> DateTime<Local> {
        local_datetime(date, NaiveTime::from_hms_opt(hour, minute, 0).unwrap())
    }
}

/// Sample event drafts for testing
pub mod drafts {
    use super::*;

    /// 09:00-09:15 standup on `date`
    pub fn standup(date: NaiveDate) -> EventDraft {
        EventDraft::new("Standup", dates::at(date, 9, 0), dates::at(date, 9, 15))
    }

    /// Afternoon review with every optional field filled in
    pub fn design_review(date: NaiveDate) -> EventDraft {
        let mut draft = EventDraft::new(
            "Design review",
            dates::at(date, 14, 0),
            dates::at(date, 15, 30),
        );
        draft.description = Some("Walk through the new header".to_string());
        draft.location = Some("Room 4".to_string());
        draft.color = EventColor::Purple;
        draft
    }

    /// All-day event covering `date`
    pub fn offsite(date: NaiveDate) -> EventDraft {
        let mut draft = EventDraft::new("Offsite", dates::at(date, 0, 0), dates::at(date, 23, 59));
        draft.all_day = true;
        draft.color = EventColor::Green;
        draft
    }
}

/// In-memory SQLite store; the database lives for the rest of the test binary
pub fn memory_store() -> EventService<'static> {
    let db = Database::new(":memory:").expect("Failed to create database");
    db.initialize_schema().expect("Failed to initialize schema");
    let db: &'static Database = Box::leak(Box::new(db));
    EventService::new(db.connection())
}

/// Controller over a fresh local backend, already signed in and loaded
pub fn local_controller(view_mode: ViewMode) -> PageController {
    let mut controller = PageController::new(
        Box::new(memory_store()),
        Box::new(LocalAuth::new(Some("Robin".to_string()))),
        view_mode,
    );
    controller.initialize();
    controller
}
