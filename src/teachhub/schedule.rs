//! Pure derivations over the date and time strings carried by schedule
//! entries. Dates are `YYYY-MM-DD`, times 24-hour `HH:MM`; every function
//! degrades to an empty value on unparseable input instead of failing.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

use crate::model::ScheduleItem;

pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub(crate) fn parse_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

pub(crate) fn parse_time(time: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(time, "%H:%M").ok()
}

/// Full English weekday name for a `YYYY-MM-DD` date, Sunday-indexed.
/// Returns the empty string when the date does not parse.
pub fn day_of_week(date: &str) -> &'static str {
    match parse_date(date) {
        Some(d) => WEEKDAY_NAMES[d.weekday().num_days_from_sunday() as usize],
        None => "",
    }
}

/// Converts 24-hour `HH:MM` into `h:mm AM/PM`; hour 0 renders as 12 AM,
/// hour 12 as 12 PM.
pub fn format_time_of_day(time: &str) -> String {
    let Some(t) = parse_time(time) else {
        return String::new();
    };
    let hour = t.hour();
    let period = if hour >= 12 { "PM" } else { "AM" };
    let display_hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:{:02} {}", display_hour, t.minute(), period)
}

/// Whole-minute duration between two `HH:MM` values on a common day,
/// rendered as `1h 30m`, `1h`, or `45m`. Store-resident entries always have
/// end after start; a negative difference clamps to zero minutes.
pub fn duration_between(start: &str, end: &str) -> String {
    let (Some(start), Some(end)) = (parse_time(start), parse_time(end)) else {
        return String::new();
    };
    let total = end.signed_duration_since(start).num_minutes().max(0);
    let hours = total / 60;
    let minutes = total % 60;
    if hours > 0 && minutes > 0 {
        format!("{}h {}m", hours, minutes)
    } else if hours > 0 {
        format!("{}h", hours)
    } else {
        format!("{}m", minutes)
    }
}

/// Long display form, e.g. `Tuesday, July 8, 2025`.
pub fn format_long_date(date: &str) -> String {
    let Some(d) = parse_date(date) else {
        return String::new();
    };
    format!(
        "{}, {} {}, {}",
        WEEKDAY_NAMES[d.weekday().num_days_from_sunday() as usize],
        month_name(d.month()),
        d.day(),
        d.year()
    )
}

/// English month name for a 1-based month number; empty when out of range.
pub fn month_name(month: u32) -> &'static str {
    match month {
        1..=12 => MONTH_NAMES[(month - 1) as usize],
        _ => "",
    }
}

/// Display colour categories for class subjects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubjectColor {
    Blue,
    Green,
    Purple,
    Pink,
    Orange,
    Indigo,
    Gray,
}

/// Colour category for a subject label. The lookup is a fixed table, not
/// user-configurable; unknown subjects (including the empty string) fall
/// back to gray.
pub fn subject_color(subject: &str) -> SubjectColor {
    match subject {
        "Vocal Jazz" => SubjectColor::Blue,
        "Vocal Contemporary" => SubjectColor::Green,
        "Vocal Classical" => SubjectColor::Purple,
        "Vocal Pop" => SubjectColor::Pink,
        "Group Session" => SubjectColor::Orange,
        "Instrument" => SubjectColor::Indigo,
        _ => SubjectColor::Gray,
    }
}

/// Subjects appearing in a schedule, first occurrence first, no duplicates.
pub fn unique_subjects(schedule: &[ScheduleItem]) -> Vec<&str> {
    let mut subjects: Vec<&str> = Vec::new();
    for item in schedule {
        if !subjects.contains(&item.subject.as_str()) {
            subjects.push(&item.subject);
        }
    }
    subjects
}

/// Comma-separated deduplicated subject line for roster rows and profile
/// headers; `No Subjects` when the schedule is empty.
pub fn subjects_summary(schedule: &[ScheduleItem]) -> String {
    let subjects = unique_subjects(schedule);
    if subjects.is_empty() {
        "No Subjects".to_string()
    } else {
        subjects.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(subject: &str) -> ScheduleItem {
        ScheduleItem {
            id: "1".to_string(),
            date: "2025-07-08".to_string(),
            start_time: "16:00".to_string(),
            end_time: "17:00".to_string(),
            subject: subject.to_string(),
            class_number: "X-1".to_string(),
            day_of_week: "Tuesday".to_string(),
        }
    }

    #[test]
    fn weekday_of_known_dates() {
        assert_eq!(day_of_week("2025-07-08"), "Tuesday");
        assert_eq!(day_of_week("2025-07-06"), "Sunday");
        assert_eq!(day_of_week("2025-07-12"), "Saturday");
    }

    #[test]
    fn weekday_of_malformed_date_is_empty() {
        assert_eq!(day_of_week(""), "");
        assert_eq!(day_of_week("not-a-date"), "");
        assert_eq!(day_of_week("2025-13-40"), "");
        assert_eq!(day_of_week("08/07/2025"), "");
    }

    #[test]
    fn test_format_time_of_day() {
        assert_eq!(format_time_of_day("00:00"), "12:00 AM");
        assert_eq!(format_time_of_day("13:05"), "1:05 PM");
        assert_eq!(format_time_of_day("12:00"), "12:00 PM");
        assert_eq!(format_time_of_day("23:59"), "11:59 PM");
        assert_eq!(format_time_of_day("09:30"), "9:30 AM");
    }

    #[test]
    fn format_time_of_day_rejects_garbage() {
        assert_eq!(format_time_of_day(""), "");
        assert_eq!(format_time_of_day("25:00"), "");
        assert_eq!(format_time_of_day("noon"), "");
    }

    #[test]
    fn test_durations() {
        assert_eq!(duration_between("16:00", "17:00"), "1h");
        assert_eq!(duration_between("15:00", "16:30"), "1h 30m");
        assert_eq!(duration_between("10:00", "10:45"), "45m");
        assert_eq!(duration_between("10:00", "10:00"), "0m");
    }

    #[test]
    fn duration_clamps_reversed_times() {
        assert_eq!(duration_between("17:00", "16:00"), "0m");
    }

    #[test]
    fn duration_of_unparseable_times_is_empty() {
        assert_eq!(duration_between("", "17:00"), "");
        assert_eq!(duration_between("16:00", "late"), "");
    }

    #[test]
    fn long_date_formatting() {
        assert_eq!(format_long_date("2025-07-08"), "Tuesday, July 8, 2025");
        assert_eq!(format_long_date("2025-12-25"), "Thursday, December 25, 2025");
        assert_eq!(format_long_date("bogus"), "");
    }

    #[test]
    fn subject_colors_cover_known_labels() {
        assert_eq!(subject_color("Vocal Jazz"), SubjectColor::Blue);
        assert_eq!(subject_color("Vocal Contemporary"), SubjectColor::Green);
        assert_eq!(subject_color("Vocal Classical"), SubjectColor::Purple);
        assert_eq!(subject_color("Vocal Pop"), SubjectColor::Pink);
        assert_eq!(subject_color("Group Session"), SubjectColor::Orange);
        assert_eq!(subject_color("Instrument"), SubjectColor::Indigo);
        assert_eq!(subject_color("Underwater Basket Weaving"), SubjectColor::Gray);
        assert_eq!(subject_color(""), SubjectColor::Gray);
    }

    #[test]
    fn dedups_subjects_in_first_seen_order() {
        let schedule = vec![
            entry("Vocal Jazz"),
            entry("Vocal Contemporary"),
            entry("Vocal Jazz"),
            entry("Group Session"),
        ];
        assert_eq!(
            unique_subjects(&schedule),
            vec!["Vocal Jazz", "Vocal Contemporary", "Group Session"]
        );
        assert_eq!(
            subjects_summary(&schedule),
            "Vocal Jazz, Vocal Contemporary, Group Session"
        );
    }

    #[test]
    fn empty_schedule_has_no_subjects() {
        assert_eq!(subjects_summary(&[]), "No Subjects");
    }
}
