// Property-based tests for the month/week/day grid builders
// Random events and reference dates; every event must land exactly once

#[path = "../fixtures/mod.rs"]
mod fixtures;

use chrono::{Datelike, Duration, NaiveDate, Timelike, Weekday};
use cloud_calendar::models::event::{Event, EventDraft, EventId};
use cloud_calendar::services::grid::{
    build_day_grid, build_month_grid, build_week_grid, GridContext, HOURS_PER_DAY,
    MONTH_CELL_EVENT_LIMIT,
};
use fixtures::dates;
use proptest::prelude::*;

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (2020..2030i32, 1..=12u32, 1..=28u32)
        .prop_map(|(year, month, day)| NaiveDate::from_ymd_opt(year, month, day).unwrap())
}

fn arb_week_start() -> impl Strategy<Value = Weekday> {
    prop_oneof![Just(Weekday::Sun), Just(Weekday::Mon), Just(Weekday::Sat)]
}

/// Events scattered within a few weeks of `anchor`
fn arb_events(anchor: NaiveDate) -> impl Strategy<Value = Vec<Event>> {
    prop::collection::vec((-40..40i64, 0..24u32, 0..60u32), 0..30).prop_map(move |specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(index, (offset, hour, minute))| {
                let day = anchor + Duration::days(offset);
                let start = dates::at(day, hour, minute);
                EventDraft::new(format!("Event {index}"), start, start + Duration::minutes(30))
                    .into_event(EventId::new(index.to_string()))
            })
            .collect()
    })
}

fn arb_scenario() -> impl Strategy<Value = (NaiveDate, Weekday, Vec<Event>)> {
    (arb_date(), arb_week_start())
        .prop_flat_map(|(reference, week_start)| {
            (Just(reference), Just(week_start), arb_events(reference))
        })
}

fn context(week_start: Weekday) -> GridContext {
    GridContext {
        today: NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
        week_start,
    }
}

proptest! {
    /// Property: the month grid is whole weeks that start on the configured weekday
    #[test]
    fn prop_month_grid_is_whole_weeks((reference, week_start, events) in arb_scenario()) {
        let grid = build_month_grid(reference, &events, &context(week_start));

        prop_assert_eq!(grid.days.len() % 7, 0);
        prop_assert!(grid.week_count() >= 4 && grid.week_count() <= 6);
        prop_assert_eq!(grid.days[0].date.weekday(), week_start);
        for pair in grid.days.windows(2) {
            prop_assert_eq!(pair[1].date, pair[0].date + Duration::days(1));
        }

        let in_month = grid.days.iter().filter(|cell| cell.in_current_month).count() as u32;
        let month_length = cloud_calendar::utils::date::last_day_of_month(reference.year(), reference.month());
        prop_assert_eq!(in_month, month_length);
    }

    /// Property: every event starting inside the grid is counted in exactly one day cell,
    /// and no cell shows more than the chip limit
    #[test]
    fn prop_month_events_land_in_one_cell((reference, week_start, events) in arb_scenario()) {
        let grid = build_month_grid(reference, &events, &context(week_start));
        let first = grid.days[0].date;
        let last = grid.days[grid.days.len() - 1].date;

        for cell in &grid.days {
            prop_assert!(cell.events.len() <= MONTH_CELL_EVENT_LIMIT);
            let expected = events
                .iter()
                .filter(|event| event.start_time.date_naive() == cell.date)
                .count();
            prop_assert_eq!(cell.total_events(), expected);
            prop_assert_eq!(cell.overflow, expected.saturating_sub(MONTH_CELL_EVENT_LIMIT));
        }

        let in_range = events
            .iter()
            .filter(|event| {
                let day = event.start_time.date_naive();
                day >= first && day <= last
            })
            .count();
        let counted: usize = grid.days.iter().map(|cell| cell.total_events()).sum();
        prop_assert_eq!(counted, in_range);
    }

    /// Property: each event in the visible week sits in exactly one hour cell,
    /// the one matching its start day and hour
    #[test]
    fn prop_week_events_land_in_start_slot((reference, week_start, events) in arb_scenario()) {
        let grid = build_week_grid(reference, &events, &context(week_start));
        prop_assert_eq!(grid.days.len(), 7);
        prop_assert_eq!(grid.rows.len(), HOURS_PER_DAY as usize);

        let first = grid.first_day().unwrap();
        let last = grid.last_day().unwrap();
        prop_assert!(first <= reference && reference <= last);

        for event in &events {
            let day = event.start_time.date_naive();
            let placements: Vec<(NaiveDate, u32)> = grid
                .rows
                .iter()
                .flat_map(|row| row.cells.iter())
                .filter(|cell| cell.events.iter().any(|placed| placed.id == event.id))
                .map(|cell| (cell.date, cell.hour))
                .collect();

            if day >= first && day <= last {
                prop_assert_eq!(placements, vec![(day, event.start_time.hour())]);
            } else {
                prop_assert!(placements.is_empty());
            }
        }
    }

    /// Property: the day grid holds only the reference day's events, all of them
    #[test]
    fn prop_day_grid_matches_reference_day((reference, week_start, events) in arb_scenario()) {
        let grid = build_day_grid(reference, &events, &context(week_start));
        prop_assert_eq!(grid.hours.len(), HOURS_PER_DAY as usize);

        let placed: usize = grid.hours.iter().map(|cell| cell.events.len()).sum();
        let expected = events
            .iter()
            .filter(|event| event.start_time.date_naive() == reference)
            .count();
        prop_assert_eq!(placed, expected);
        prop_assert!(grid.hours.iter().all(|cell| cell.date == reference));
    }
}
