//! Month-grid projection: maps a year and 1-based month plus a schedule
//! list onto renderable day cells. Weeks start on Sunday.

use chrono::{Datelike, Local, NaiveDate};

use crate::model::ScheduleItem;
use crate::schedule::{month_name, parse_date};

/// One day in a month grid.
#[derive(Debug, Clone, PartialEq)]
pub struct DayCell {
    pub day: u32,
    pub date: String,
    pub class_count: usize,
    pub is_today: bool,
}

impl DayCell {
    pub fn has_schedule(&self) -> bool {
        self.class_count > 0
    }
}

/// A month projected for rendering: header label plus a flat cell sequence,
/// leading blanks first, to be chunked into rows of seven by the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthView {
    pub year: i32,
    pub month: u32,
    pub label: String,
    pub cells: Vec<Option<DayCell>>,
}

impl MonthView {
    pub fn build(year: i32, month: u32, schedule: &[ScheduleItem]) -> Self {
        MonthView {
            year,
            month,
            label: month_label(year, month),
            cells: month_grid(year, month, schedule),
        }
    }
}

/// Day count for a month, leap-year aware.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    // First of the following month, stepped back one day.
    let (next_year, next_month) = shift_month(year, month, 1);
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(0)
}

/// Weekday index of the first of the month, Sunday-indexed 0..=6.
pub fn first_weekday_of_month(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.weekday().num_days_from_sunday())
        .unwrap_or(0)
}

/// Zero-padded `YYYY-MM-DD` for a grid position.
pub fn date_string(year: i32, month: u32, day: u32) -> String {
    format!("{:04}-{:02}-{:02}", year, month, day)
}

/// Flat cell sequence for one month: `None` for the leading blanks before
/// the first weekday, then one `DayCell` per day.
pub fn month_grid(year: i32, month: u32, schedule: &[ScheduleItem]) -> Vec<Option<DayCell>> {
    let mut cells: Vec<Option<DayCell>> = Vec::new();
    for _ in 0..first_weekday_of_month(year, month) {
        cells.push(None);
    }
    for day in 1..=days_in_month(year, month) {
        let date = date_string(year, month, day);
        cells.push(Some(DayCell {
            day,
            class_count: schedule_on(schedule, &date).len(),
            is_today: is_today(&date),
            date,
        }));
    }
    cells
}

/// Entries scheduled on an exact date, insertion order preserved.
pub fn schedule_on<'a>(schedule: &'a [ScheduleItem], date: &str) -> Vec<&'a ScheduleItem> {
    schedule.iter().filter(|item| item.date == date).collect()
}

/// True when the date string names the current local date.
pub fn is_today(date: &str) -> bool {
    parse_date(date).is_some_and(|d| d == Local::now().date_naive())
}

/// Header label, e.g. `July 2025`.
pub fn month_label(year: i32, month: u32) -> String {
    format!("{} {}", month_name(month), year)
}

/// Steps a year/month pair by whole months, normalizing year rollover in
/// both directions. Stepping forward then backward by the same delta
/// returns the original pair.
pub fn shift_month(year: i32, month: u32, delta: i32) -> (i32, u32) {
    let total = year as i64 * 12 + (month as i64 - 1) + delta as i64;
    (total.div_euclid(12) as i32, (total.rem_euclid(12) + 1) as u32)
}
