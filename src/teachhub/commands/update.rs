use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::TeacherDraft;
use crate::store::TeacherStore;

/// Replaces a teacher's fields from the draft, keeping id and position.
/// An unknown id is reported as a warning and leaves the store untouched.
pub fn run(store: &mut TeacherStore, id: &str, draft: TeacherDraft) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if !store.update_teacher(id, draft) {
        result.add_message(CmdMessage::warning(format!(
            "No teacher found with id {}",
            id
        )));
        return Ok(result);
    }

    if let Some(teacher) = store.find_teacher(id) {
        result.add_message(CmdMessage::success(format!(
            "Teacher updated ({}): {}",
            id, teacher.name
        )));
        result.affected_teachers.push(teacher.clone());
    }
    Ok(result)
}
