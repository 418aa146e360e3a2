//! Month-length and month-shift helpers shared by the billing cycle,
//! subscription, and loan schedules.

use chrono::{Datelike, NaiveDate};

/// Number of days in the given calendar month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = month_after(year, month);
    let first_of_next = NaiveDate::from_ymd_opt(next_year, next_month, 1).unwrap();
    first_of_next.pred_opt().unwrap().day()
}

/// Resolves `day` inside `(year, month)`, clamping to the month's last day
/// when the month is shorter (Feb 31 resolves to Feb 28 or 29).
pub fn clamped_date(year: i32, month: u32, day: u32) -> NaiveDate {
    let day = day.min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// The calendar month following `(year, month)`, rolling December into
/// January of the next year.
pub fn month_after(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

/// The calendar month preceding `(year, month)`, rolling January into
/// December of the previous year.
pub fn month_before(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

/// Moves `date` by whole months in either direction, keeping its day of
/// month clamped to each target month's length.
pub fn shift_month(date: NaiveDate, months: i32) -> NaiveDate {
    let mut year = date.year();
    let mut month = date.month() as i32 + months;
    while month > 12 {
        month -= 12;
        year += 1;
    }
    while month < 1 {
        month += 12;
        year -= 1;
    }
    clamped_date(year, month as u32, date.day())
}

/// Whole-month distance between the calendar months of two dates.
pub fn months_between(from: NaiveDate, to: NaiveDate) -> i32 {
    let from_index = from.year() * 12 + from.month() as i32 - 1;
    let to_index = to.year() * 12 + to.month() as i32 - 1;
    to_index - from_index
}
