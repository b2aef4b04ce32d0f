use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::TeacherStore;

/// Removes a teacher from the roster. An unknown id is reported as a
/// warning, not an error.
pub fn run(store: &mut TeacherStore, id: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let Some(name) = store.find_teacher(id).map(|t| t.name.clone()) else {
        result.add_message(CmdMessage::warning(format!(
            "No teacher found with id {}",
            id
        )));
        return Ok(result);
    };

    store.delete_teacher(id);
    result.add_message(CmdMessage::success(format!(
        "Teacher deleted ({}): {}",
        id, name
    )));
    Ok(result)
}
