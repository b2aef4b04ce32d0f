use crate::commands::CmdResult;
use crate::error::{HubError, Result};
use crate::store::TeacherStore;

/// Returns a single teacher's full record.
pub fn run(store: &TeacherStore, id: &str) -> Result<CmdResult> {
    let teacher = store
        .find_teacher(id)
        .ok_or_else(|| HubError::TeacherNotFound(id.to_string()))?;
    Ok(CmdResult::default().with_listed_teachers(vec![teacher.clone()]))
}
