use std::path::{Path, PathBuf};

use crate::commands;
use crate::error::Result;
use crate::model::TeacherDraft;
use crate::store::TeacherStore;

/// The main API facade. Frontends construct one with a store and the
/// config directory, then call operations; nothing here prints or exits.
pub struct HubApi {
    store: TeacherStore,
    config_dir: PathBuf,
}

impl HubApi {
    pub fn new(store: TeacherStore, config_dir: PathBuf) -> Self {
        HubApi { store, config_dir }
    }

    /// The full roster in insertion order.
    pub fn list_teachers(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    /// One teacher's full record. Errors when the id is unknown.
    pub fn view_teacher(&self, id: &str) -> Result<CmdResult> {
        commands::view::run(&self.store, id)
    }

    /// Adds a teacher from a draft and reports the assigned id.
    pub fn add_teacher(&mut self, draft: TeacherDraft) -> Result<CmdResult> {
        commands::add::run(&mut self.store, draft)
    }

    /// Rewrites a teacher's record from a draft.
    pub fn update_teacher(&mut self, id: &str, draft: TeacherDraft) -> Result<CmdResult> {
        commands::update::run(&mut self.store, id, draft)
    }

    /// Removes a teacher from the roster.
    pub fn delete_teacher(&mut self, id: &str) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    /// Month grid of one teacher's classes.
    pub fn calendar_month(&self, id: &str, year: i32, month: u32) -> Result<CmdResult> {
        commands::calendar::run(&self.store, id, year, month)
    }

    /// One teacher's classes on an exact date.
    pub fn day_schedule(&self, id: &str, date: &str) -> Result<CmdResult> {
        commands::day::run(&self.store, id, date)
    }

    /// Snapshots the roster to JSON.
    pub fn export_roster(&self, path: Option<PathBuf>) -> Result<CmdResult> {
        commands::export::run(&self.store, path)
    }

    /// Appends teachers from a JSON snapshot.
    pub fn import_roster(&mut self, path: &Path) -> Result<CmdResult> {
        commands::import::run(&mut self.store, path)
    }

    /// Reads or writes persisted configuration.
    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn teacher_count(&self) -> usize {
        self.store.len()
    }
}

// Re-export command types for API consumers
pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, DaySchedule, MessageLevel};
