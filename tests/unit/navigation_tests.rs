// Navigation tests: Previous/Next/Today and view switching per view mode

#[path = "../fixtures/mod.rs"]
mod fixtures;

use chrono::{Duration, Local, NaiveDate, Weekday};
use cloud_calendar::controller::Intent;
use cloud_calendar::models::ui::{ModalState, ViewMode};
use cloud_calendar::utils::date::{shift_months, start_of_week};
use fixtures::{dates, local_controller};
use test_case::test_case;

fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[test_case(ViewMode::Day, today() + Duration::days(1); "day steps one day")]
#[test_case(ViewMode::Week, today() + Duration::weeks(1); "week steps seven days")]
#[test_case(ViewMode::Month, shift_months(today(), 1); "month steps one calendar month")]
fn test_next_advances_by_view_unit(mode: ViewMode, expected: NaiveDate) {
    let mut controller = local_controller(mode);

    controller.dispatch(Intent::Next);

    assert_eq!(controller.state().current_date, expected);
}

#[test_case(ViewMode::Day, today() - Duration::days(1); "day steps back one day")]
#[test_case(ViewMode::Week, today() - Duration::weeks(1); "week steps back seven days")]
#[test_case(ViewMode::Month, shift_months(today(), -1); "month steps back one calendar month")]
fn test_previous_moves_back_by_view_unit(mode: ViewMode, expected: NaiveDate) {
    let mut controller = local_controller(mode);

    controller.dispatch(Intent::Previous);

    assert_eq!(controller.state().current_date, expected);
}

#[test]
fn test_today_resets_after_navigation() {
    let mut controller = local_controller(ViewMode::Week);
    for _ in 0..5 {
        controller.dispatch(Intent::Next);
    }
    assert_ne!(controller.state().current_date, today());

    controller.dispatch(Intent::Today);

    assert_eq!(controller.state().current_date, today());
}

#[test]
fn test_view_change_keeps_reference_date_and_modal() {
    let mut controller = local_controller(ViewMode::Month);
    controller.dispatch(Intent::Next);
    let reference = controller.state().current_date;
    controller.dispatch(Intent::CreateEvent);

    controller.dispatch(Intent::ViewChange(ViewMode::Day));

    let state = controller.state();
    assert_eq!(state.view_mode, ViewMode::Day);
    assert_eq!(state.current_date, reference);
    assert_eq!(
        state.modal,
        ModalState::Creating {
            date: today(),
            hour: None
        }
    );
}

#[test]
fn test_navigation_does_not_touch_events() {
    let mut controller = local_controller(ViewMode::Month);
    controller.dispatch(Intent::Save(fixtures::drafts::standup(today())));
    let events = controller.state().events.clone();

    controller.dispatch(Intent::Next);
    controller.dispatch(Intent::Next);
    controller.dispatch(Intent::Previous);

    assert_eq!(controller.state().events, events);
}

#[test_case(dates::end_of_january_2025(), 1, NaiveDate::from_ymd_opt(2025, 2, 28).unwrap(); "clamps to short february")]
#[test_case(dates::leap_day_2024(), 12, NaiveDate::from_ymd_opt(2025, 2, 28).unwrap(); "leap day to next year")]
#[test_case(dates::mid_june_2024(), -18, NaiveDate::from_ymd_opt(2022, 12, 15).unwrap(); "many months back")]
fn test_month_steps_clamp_day(start: NaiveDate, delta: i32, expected: NaiveDate) {
    assert_eq!(shift_months(start, delta), expected);
}

#[test_case(Weekday::Sun, NaiveDate::from_ymd_opt(2024, 6, 9).unwrap(); "sunday start")]
#[test_case(Weekday::Mon, NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(); "monday start")]
#[test_case(Weekday::Sat, NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(); "saturday start")]
fn test_week_containing_mid_june(week_start: Weekday, expected: NaiveDate) {
    assert_eq!(start_of_week(dates::mid_june_2024(), week_start), expected);
}
