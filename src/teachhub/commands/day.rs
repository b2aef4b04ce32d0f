use crate::calendar::schedule_on;
use crate::commands::{CmdResult, DaySchedule};
use crate::error::{HubError, Result};
use crate::schedule;
use crate::store::TeacherStore;

/// Lists one teacher's classes on an exact date, sorted by start time.
pub fn run(store: &TeacherStore, id: &str, date: &str) -> Result<CmdResult> {
    if schedule::day_of_week(date).is_empty() {
        return Err(HubError::Api(format!(
            "Invalid date (expected YYYY-MM-DD): {}",
            date
        )));
    }
    let teacher = store
        .find_teacher(id)
        .ok_or_else(|| HubError::TeacherNotFound(id.to_string()))?;

    let mut entries: Vec<_> = schedule_on(&teacher.detailed_schedule, date)
        .into_iter()
        .cloned()
        .collect();
    entries.sort_by(|a, b| a.start_time.cmp(&b.start_time));

    Ok(CmdResult::default()
        .with_listed_teachers(vec![teacher.clone()])
        .with_day_schedule(DaySchedule {
            date: date.to_string(),
            entries,
        }))
}
