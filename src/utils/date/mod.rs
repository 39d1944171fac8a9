// Date utility functions
// Calendar math shared by the grid builders and navigation

use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, NaiveTime, TimeZone, Weekday};

/// First day of the week containing `date`
pub fn start_of_week(date: NaiveDate, week_start: Weekday) -> NaiveDate {
    let offset = (date.weekday().num_days_from_sunday() + 7
        - week_start.num_days_from_sunday())
        % 7;
    date - Duration::days(offset as i64)
}

/// Last day of the week containing `date`
pub fn end_of_week(date: NaiveDate, week_start: Weekday) -> NaiveDate {
    start_of_week(date, week_start) + Duration::days(6)
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    let last_day = last_day_of_month(date.year(), date.month());
    date.with_day(last_day).unwrap_or(date)
}

pub fn last_day_of_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(28)
}

/// Shift by whole months, clamping the day to the target month's length
pub fn shift_months(current: NaiveDate, delta_months: i32) -> NaiveDate {
    let total_months = (current.year() * 12) + current.month0() as i32 + delta_months;
    let new_year = total_months.div_euclid(12);
    let new_month = total_months.rem_euclid(12) as u32 + 1;
    let day = current.day().min(last_day_of_month(new_year, new_month));
    NaiveDate::from_ymd_opt(new_year, new_month, day).unwrap_or(current)
}

/// Every date from `start` to `end`, both inclusive
pub fn days_inclusive(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |day| *day <= end)
}

/// Resolve a wall-clock date and time in the local zone.
///
/// Ambiguous times pick the earlier instant; times skipped by a DST jump
/// move forward by an hour.
pub fn local_datetime(date: NaiveDate, time: NaiveTime) -> DateTime<Local> {
    let naive = date.and_time(time);
    Local
        .from_local_datetime(&naive)
        .earliest()
        .or_else(|| {
            Local
                .from_local_datetime(&(naive + Duration::hours(1)))
                .earliest()
        })
        .unwrap_or_else(|| Local.from_utc_datetime(&naive))
}
