use std::fs;
use std::path::Path;

use log::{info, warn};

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Teacher, TeacherDraft};
use crate::store::TeacherStore;

/// Reads a JSON snapshot and appends its records to the roster. Every
/// record gets a fresh teacher id; schedule hygiene applies exactly as for
/// interactive adds, so stale weekday fields are recomputed and broken
/// entries dropped.
pub fn run(store: &mut TeacherStore, path: &Path) -> Result<CmdResult> {
    let raw = fs::read_to_string(path)?;
    let records: Vec<Teacher> = serde_json::from_str(&raw)?;

    let mut result = CmdResult::default();
    if records.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No teachers found in {}",
            path.display()
        )));
        return Ok(result);
    }

    let mut imported = 0usize;
    for record in &records {
        let draft = TeacherDraft::from(record);
        if draft.name.trim().is_empty() {
            warn!("Skipping a record without a name in {}", path.display());
            result.add_message(CmdMessage::warning("Skipped a record without a name."));
            continue;
        }
        let id = store.add_teacher(draft);
        result.add_message(CmdMessage::info(format!("Imported ({}): {}", id, record.name)));
        imported += 1;
    }

    info!("Imported {} teacher(s) from {}", imported, path.display());
    result.add_message(CmdMessage::success(format!("Total imported: {}", imported)));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;

    fn write_fixture(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn imports_under_fresh_ids() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = serde_json::to_string(TeacherStore::with_sample_roster().teachers()).unwrap();
        let path = write_fixture(&dir, "roster.json", &snapshot);

        let mut store = TeacherStore::with_sample_roster();
        let result = run(&mut store, &path).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.teachers()[1].id, "2");
        assert_eq!(store.teachers()[1].name, "Alynia Allan");
        let last = result.messages.last().unwrap();
        assert_eq!(last.level, MessageLevel::Success);
        assert_eq!(last.content, "Total imported: 1");
    }

    #[test]
    fn recomputes_weekdays_and_drops_broken_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(
            &dir,
            "roster.json",
            r#"[{
                "id": "9",
                "name": "Jane Doe",
                "email": "jane@example.com",
                "phone": "555",
                "address": {"street": "", "city": "", "country": ""},
                "qualifications": [],
                "detailedSchedule": [
                    {"id": "1", "date": "2025-07-08", "startTime": "10:00",
                     "endTime": "11:00", "subject": "Vocal Jazz",
                     "classNumber": "VJ-101", "dayOfWeek": "Friday"},
                    {"id": "2", "date": "2025-07-09", "startTime": "11:00",
                     "endTime": "10:00", "subject": "Vocal Pop",
                     "classNumber": "VP-201", "dayOfWeek": "Wednesday"}
                ]
            }]"#,
        );

        let mut store = TeacherStore::new();
        run(&mut store, &path).unwrap();

        let teacher = &store.teachers()[0];
        assert_eq!(teacher.id, "1");
        assert_eq!(teacher.detailed_schedule.len(), 1);
        assert_eq!(teacher.detailed_schedule[0].day_of_week, "Tuesday");
    }

    #[test]
    fn empty_snapshot_reports_info() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(&dir, "empty.json", "[]");

        let mut store = TeacherStore::new();
        let result = run(&mut store, &path).unwrap();
        assert!(store.is_empty());
        assert_eq!(result.messages[0].level, MessageLevel::Info);
    }

    #[test]
    fn unreadable_snapshot_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        let mut store = TeacherStore::new();
        assert!(run(&mut store, &missing).is_err());

        let garbled = write_fixture(&dir, "bad.json", "{ not json");
        assert!(run(&mut store, &garbled).is_err());
    }
}
