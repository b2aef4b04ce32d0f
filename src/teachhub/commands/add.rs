use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::TeacherDraft;
use crate::store::TeacherStore;

/// Adds a teacher built from the draft. Incomplete qualification and
/// schedule rows are dropped on the way in, not reported as errors.
pub fn run(store: &mut TeacherStore, draft: TeacherDraft) -> Result<CmdResult> {
    let id = store.add_teacher(draft);

    let mut result = CmdResult::default();
    if let Some(teacher) = store.find_teacher(&id) {
        result.add_message(CmdMessage::success(format!(
            "Teacher added ({}): {}",
            id, teacher.name
        )));
        result.affected_teachers.push(teacher.clone());
    }
    Ok(result)
}
