use chrono::{Duration, NaiveDate};

use super::{GridContext, HourCell, HOURS_PER_DAY};
use crate::models::event::Event;
use crate::utils::date::start_of_week;

/// Seven day columns by 24 hour rows
#[derive(Debug, Clone, PartialEq)]
pub struct WeekGrid<'a> {
    pub days: Vec<WeekDayHeader>,
    pub rows: Vec<HourRow<'a>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekDayHeader {
    pub date: NaiveDate,
    pub is_today: bool,
}

/// One hour across every day of the week
#[derive(Debug, Clone, PartialEq)]
pub struct HourRow<'a> {
    pub hour: u32,
    /// One cell per day, in header order
    pub cells: Vec<HourCell<'a>>,
}

impl<'a> WeekGrid<'a> {
    pub fn first_day(&self) -> Option<NaiveDate> {
        self.days.first().map(|day| day.date)
    }

    pub fn last_day(&self) -> Option<NaiveDate> {
        self.days.last().map(|day| day.date)
    }
}

/// Build the week containing `reference`
pub fn build_week_grid<'a>(
    reference: NaiveDate,
    events: &'a [Event],
    context: &GridContext,
) -> WeekGrid<'a> {
    let week_start = start_of_week(reference, context.week_start);
    let dates: Vec<NaiveDate> = (0..7).map(|offset| week_start + Duration::days(offset)).collect();

    let days = dates
        .iter()
        .map(|&date| WeekDayHeader {
            date,
            is_today: date == context.today,
        })
        .collect();

    let rows = (0..HOURS_PER_DAY)
        .map(|hour| HourRow {
            hour,
            cells: dates
                .iter()
                .map(|&date| HourCell::collect(events, date, hour))
                .collect(),
        })
        .collect();

    WeekGrid { days, rows }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use chrono::Weekday;

    fn context() -> GridContext {
        GridContext {
            today: date(2024, 6, 12),
            week_start: Weekday::Sun,
        }
    }

    #[test]
    fn test_week_spans_seven_days_from_week_start() {
        let grid = build_week_grid(date(2024, 6, 15), &[], &context());

        assert_eq!(grid.first_day(), Some(date(2024, 6, 9)));
        assert_eq!(grid.last_day(), Some(date(2024, 6, 15)));
        assert_eq!(grid.rows.len(), 24);
        assert!(grid.rows.iter().all(|row| row.cells.len() == 7));
        assert_eq!(grid.days.iter().filter(|day| day.is_today).count(), 1);
    }

    #[test]
    fn test_events_land_in_start_day_and_hour() {
        let events = vec![
            event("wed-14", date(2024, 6, 12), 14, 45),
            event("sat-9", date(2024, 6, 15), 9, 0),
            event("next-week", date(2024, 6, 16), 9, 0),
        ];
        let grid = build_week_grid(date(2024, 6, 12), &events, &context());

        let placed: Vec<(NaiveDate, u32, &str)> = grid
            .rows
            .iter()
            .flat_map(|row| row.cells.iter())
            .flat_map(|cell| cell.events.iter().map(move |e| (cell.date, cell.hour, e.id.as_str())))
            .collect();

        assert_eq!(
            placed,
            vec![
                (date(2024, 6, 15), 9, "sat-9"),
                (date(2024, 6, 12), 14, "wed-14"),
            ]
        );
    }
}
