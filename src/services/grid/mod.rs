//! Date-grid builders for the month, week and day views.
//!
//! Each builder maps a reference date to the cells the view draws and buckets
//! the flat event list into them. An event is placed only in the cell holding
//! its start: same calendar day for day cells, same day and hour-of-day for
//! hour cells. Cells keep the input order of events.

use chrono::{Datelike, Local, NaiveDate, Timelike, Weekday};

use crate::models::event::Event;

mod day;
mod month;
mod week;

pub use day::{build_day_grid, DayGrid};
pub use month::{build_month_grid, MonthDayCell, MonthGrid};
pub use week::{build_week_grid, HourRow, WeekDayHeader, WeekGrid};

pub const HOURS_PER_DAY: u32 = 24;

/// Events shown in a month-day cell before the "+N more" line
pub const MONTH_CELL_EVENT_LIMIT: usize = 3;

/// Inputs every builder shares besides the reference date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridContext {
    pub today: NaiveDate,
    pub week_start: Weekday,
}

impl GridContext {
    pub fn new(week_start: Weekday) -> Self {
        Self {
            today: Local::now().date_naive(),
            week_start,
        }
    }
}

/// One hour slot of one day
#[derive(Debug, Clone, PartialEq)]
pub struct HourCell<'a> {
    pub date: NaiveDate,
    pub hour: u32,
    pub events: Vec<&'a Event>,
}

impl<'a> HourCell<'a> {
    fn collect(events: &'a [Event], date: NaiveDate, hour: u32) -> Self {
        Self {
            date,
            hour,
            events: events_in_hour(events, date, hour).collect(),
        }
    }
}

/// Events starting on `date`
pub fn events_on_day(events: &[Event], date: NaiveDate) -> impl Iterator<Item = &Event> {
    events
        .iter()
        .filter(move |event| event.start_time.date_naive() == date)
}

/// Events starting on `date` within `hour`
pub fn events_in_hour(
    events: &[Event],
    date: NaiveDate,
    hour: u32,
) -> impl Iterator<Item = &Event> {
    events_on_day(events, date).filter(move |event| event.start_time.hour() == hour)
}

/// Row label for an hour slot ("12 AM", "9 AM", "3 PM")
pub fn hour_label(hour: u32) -> String {
    let suffix = if hour < 12 { "AM" } else { "PM" };
    let display = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{} {}", display, suffix)
}

/// Short weekday names in display order
pub fn weekday_labels(week_start: Weekday) -> [&'static str; 7] {
    const NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
    let start = week_start.num_days_from_sunday() as usize;
    std::array::from_fn(|i| NAMES[(start + i) % 7])
}

/// Short label for a day column header ("Sat 15")
pub fn day_column_label(date: NaiveDate) -> String {
    format!("{} {}", date.format("%a"), date.day())
}

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::{DateTime, Duration, Local, NaiveDate, TimeZone};

    use crate::models::event::{Event, EventDraft, EventId};

    pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    pub fn at(date: NaiveDate, hour: u32, minute: u32) -> DateTime<Local> {
        Local
            .from_local_datetime(&date.and_hms_opt(hour, minute, 0).unwrap())
            .earliest()
            .unwrap()
    }

    pub fn event(id: &str, date: NaiveDate, hour: u32, minute: u32) -> Event {
        let start = at(date, hour, minute);
        EventDraft::new(format!("Event {}", id), start, start + Duration::hours(1))
            .into_event(EventId::new(id))
    }
}
