use std::fs;
use std::path::PathBuf;

use chrono::Utc;
use log::info;

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::TeacherStore;

/// Writes the whole roster to a JSON snapshot. Without an explicit path
/// the file is named `teachhub-<timestamp>.json` in the current directory.
pub fn run(store: &TeacherStore, path: Option<PathBuf>) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if store.is_empty() {
        result.add_message(CmdMessage::info("No teachers to export."));
        return Ok(result);
    }

    let path = path.unwrap_or_else(default_snapshot_path);
    let json = serde_json::to_string_pretty(store.teachers())?;
    fs::write(&path, json)?;
    info!("Exported {} teacher(s) to {}", store.len(), path.display());

    result.add_message(CmdMessage::success(format!(
        "Exported {} teacher(s) to {}",
        store.len(),
        path.display()
    )));
    Ok(result)
}

fn default_snapshot_path() -> PathBuf {
    let now = Utc::now();
    PathBuf::from(format!("teachhub-{}.json", now.format("%Y-%m-%d_%H:%M:%S")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::Teacher;

    #[test]
    fn writes_a_parseable_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.json");
        let store = TeacherStore::with_sample_roster();

        let result = run(&store, Some(path.clone())).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Success);

        let raw = fs::read_to_string(&path).unwrap();
        let parsed: Vec<Teacher> = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].name, "Alynia Allan");
        assert!(raw.contains("detailedSchedule"));
        assert!(raw.contains("dayOfWeek"));
    }

    #[test]
    fn empty_store_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.json");
        let store = TeacherStore::new();

        let result = run(&store, Some(path.clone())).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Info);
        assert_eq!(result.messages[0].content, "No teachers to export.");
        assert!(!path.exists());
    }

    #[test]
    fn default_snapshot_name_is_timestamped() {
        let path = default_snapshot_path();
        let name = path.to_string_lossy();
        assert!(name.starts_with("teachhub-"));
        assert!(name.ends_with(".json"));
    }
}
