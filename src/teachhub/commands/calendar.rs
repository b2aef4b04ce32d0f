use crate::calendar::MonthView;
use crate::commands::CmdResult;
use crate::error::{HubError, Result};
use crate::store::TeacherStore;

/// Builds the month grid for one teacher's schedule.
pub fn run(store: &TeacherStore, id: &str, year: i32, month: u32) -> Result<CmdResult> {
    if !(1..=12).contains(&month) {
        return Err(HubError::Api(format!("Invalid month: {}", month)));
    }
    let teacher = store
        .find_teacher(id)
        .ok_or_else(|| HubError::TeacherNotFound(id.to_string()))?;

    let view = MonthView::build(year, month, &teacher.detailed_schedule);
    Ok(CmdResult::default()
        .with_listed_teachers(vec![teacher.clone()])
        .with_month_view(view))
}
