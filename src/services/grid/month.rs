use chrono::{Datelike, NaiveDate};

use super::{events_on_day, weekday_labels, GridContext, MONTH_CELL_EVENT_LIMIT};
use crate::models::event::Event;
use crate::utils::date::{days_inclusive, end_of_week, first_of_month, last_of_month, start_of_week};

/// A month padded out to whole display weeks
#[derive(Debug, Clone, PartialEq)]
pub struct MonthGrid<'a> {
    /// First day of the displayed month
    pub month: NaiveDate,
    pub weekday_labels: [&'static str; 7],
    /// Row-major cells, a multiple of seven long
    pub days: Vec<MonthDayCell<'a>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthDayCell<'a> {
    pub date: NaiveDate,
    /// False for the padding days of neighbouring months
    pub in_current_month: bool,
    pub is_today: bool,
    /// Visible events, at most [`MONTH_CELL_EVENT_LIMIT`]
    pub events: Vec<&'a Event>,
    /// Events starting that day that did not fit
    pub overflow: usize,
}

impl<'a> MonthDayCell<'a> {
    pub fn total_events(&self) -> usize {
        self.events.len() + self.overflow
    }
}

impl<'a> MonthGrid<'a> {
    /// Cells grouped into display weeks
    pub fn weeks(&self) -> impl Iterator<Item = &[MonthDayCell<'a>]> {
        self.days.chunks(7)
    }

    pub fn week_count(&self) -> usize {
        self.days.len() / 7
    }
}

/// Build the month containing `reference`, padded to whole weeks
pub fn build_month_grid<'a>(
    reference: NaiveDate,
    events: &'a [Event],
    context: &GridContext,
) -> MonthGrid<'a> {
    let month = first_of_month(reference);
    let grid_start = start_of_week(month, context.week_start);
    let grid_end = end_of_week(last_of_month(reference), context.week_start);

    let days = days_inclusive(grid_start, grid_end)
        .map(|date| {
            let mut day_events: Vec<&Event> = events_on_day(events, date).collect();
            let overflow = day_events.len().saturating_sub(MONTH_CELL_EVENT_LIMIT);
            day_events.truncate(MONTH_CELL_EVENT_LIMIT);

            MonthDayCell {
                date,
                in_current_month: date.month() == month.month() && date.year() == month.year(),
                is_today: date == context.today,
                events: day_events,
                overflow,
            }
        })
        .collect();

    MonthGrid {
        month,
        weekday_labels: weekday_labels(context.week_start),
        days,
    }
}
