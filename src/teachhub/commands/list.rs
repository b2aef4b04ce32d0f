use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::TeacherStore;

/// Returns the full roster in insertion order.
pub fn run(store: &TeacherStore) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_teachers(store.teachers().to_vec()))
}
