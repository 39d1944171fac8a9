use chrono::NaiveDate;

use super::{GridContext, HourCell, HOURS_PER_DAY};
use crate::models::event::Event;

/// The 24 hour slots of a single date
#[derive(Debug, Clone, PartialEq)]
pub struct DayGrid<'a> {
    pub date: NaiveDate,
    pub is_today: bool,
    pub hours: Vec<HourCell<'a>>,
}

pub fn build_day_grid<'a>(
    reference: NaiveDate,
    events: &'a [Event],
    context: &GridContext,
) -> DayGrid<'a> {
    DayGrid {
        date: reference,
        is_today: reference == context.today,
        hours: (0..HOURS_PER_DAY)
            .map(|hour| HourCell::collect(events, reference, hour))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use chrono::Weekday;

    #[test]
    fn test_day_grid_buckets_by_hour() {
        let day = date(2024, 6, 15);
        let events = vec![
            event("a", day, 14, 0),
            event("b", day, 14, 30),
            event("c", day, 0, 15),
            event("elsewhere", date(2024, 6, 14), 14, 0),
        ];
        let context = GridContext {
            today: day,
            week_start: Weekday::Sun,
        };

        let grid = build_day_grid(day, &events, &context);

        assert!(grid.is_today);
        assert_eq!(grid.hours.len(), 24);
        assert_eq!(grid.hours[0].events.len(), 1);
        let two_pm: Vec<_> = grid.hours[14].events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(two_pm, vec!["a", "b"]);
        let total: usize = grid.hours.iter().map(|cell| cell.events.len()).sum();
        assert_eq!(total, 3);
    }
}
