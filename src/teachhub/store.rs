//! # Teacher store
//!
//! The single source of truth: an ordered list of [`Teacher`] records held
//! in memory for the lifetime of the process. The store is an explicit
//! value passed to commands, there is no global instance.
//!
//! Ids come from a monotonic counter, so an id is never reused within a
//! session even after its record is deleted. Every write path funnels
//! drafts through the same hygiene step: incomplete qualifications and
//! incomplete or inverted schedule entries are dropped silently, the
//! derived weekday is recomputed from the date, and blank entry ids are
//! assigned per teacher.

use log::{debug, info};

use crate::model::{Address, ScheduleItem, Teacher, TeacherDraft};
use crate::seed;

#[derive(Debug)]
pub struct TeacherStore {
    teachers: Vec<Teacher>,
    next_id: u64,
}

impl Default for TeacherStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TeacherStore {
    /// An empty roster.
    pub fn new() -> Self {
        TeacherStore {
            teachers: Vec::new(),
            next_id: 1,
        }
    }

    /// A roster pre-populated with the sample data.
    pub fn with_sample_roster() -> Self {
        let teachers = seed::sample_roster();
        let next_id = teachers.len() as u64 + 1;
        TeacherStore { teachers, next_id }
    }

    /// Appends a new record built from the draft and returns its id.
    pub fn add_teacher(&mut self, draft: TeacherDraft) -> String {
        let id = self.next_id.to_string();
        self.next_id += 1;
        let teacher = build_record(id.clone(), draft);
        info!("Added teacher {}: {}", id, teacher.name);
        self.teachers.push(teacher);
        id
    }

    /// Replaces the record's fields in place, keeping its id and roster
    /// position. Returns false, store untouched, when the id is absent.
    pub fn update_teacher(&mut self, id: &str, draft: TeacherDraft) -> bool {
        let Some(pos) = self.teachers.iter().position(|t| t.id == id) else {
            return false;
        };
        let teacher = build_record(id.to_string(), draft);
        info!("Updated teacher {}: {}", id, teacher.name);
        self.teachers[pos] = teacher;
        true
    }

    /// Removes the record. Returns false when the id is absent.
    pub fn delete_teacher(&mut self, id: &str) -> bool {
        let before = self.teachers.len();
        self.teachers.retain(|t| t.id != id);
        let removed = self.teachers.len() < before;
        if removed {
            info!("Deleted teacher {}", id);
        }
        removed
    }

    pub fn find_teacher(&self, id: &str) -> Option<&Teacher> {
        self.teachers.iter().find(|t| t.id == id)
    }

    pub fn teachers(&self) -> &[Teacher] {
        &self.teachers
    }

    pub fn len(&self) -> usize {
        self.teachers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teachers.is_empty()
    }
}

fn build_record(id: String, draft: TeacherDraft) -> Teacher {
    let qual_total = draft.qualifications.len();
    let qualifications: Vec<_> = draft
        .qualifications
        .into_iter()
        .filter_map(|q| q.build())
        .collect();
    if qualifications.len() < qual_total {
        debug!(
            "Dropped {} incomplete qualification row(s)",
            qual_total - qualifications.len()
        );
    }

    let entry_total = draft.schedule.len();
    let mut schedule: Vec<ScheduleItem> = draft
        .schedule
        .into_iter()
        .filter_map(|s| s.build())
        .collect();
    if schedule.len() < entry_total {
        debug!(
            "Dropped {} incomplete schedule row(s)",
            entry_total - schedule.len()
        );
    }
    assign_entry_ids(&mut schedule);

    Teacher {
        id,
        name: draft.name,
        email: draft.email,
        phone: draft.phone,
        address: Address {
            street: draft.street,
            city: draft.city,
            country: draft.country,
        },
        qualifications,
        detailed_schedule: schedule,
    }
}

// Blank entry ids get the next numeric id after the highest one present.
fn assign_entry_ids(schedule: &mut [ScheduleItem]) {
    let mut next = schedule
        .iter()
        .filter_map(|item| item.id.parse::<u64>().ok())
        .max()
        .unwrap_or(0)
        + 1;
    for item in schedule {
        if item.id.is_empty() {
            item.id = next.to_string();
            next += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{QualificationDraft, ScheduleDraft};

    fn draft(name: &str) -> TeacherDraft {
        TeacherDraft {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            phone: "(416) 555-0100".to_string(),
            ..Default::default()
        }
    }

    fn entry_draft(id: &str, date: &str) -> ScheduleDraft {
        ScheduleDraft {
            id: id.to_string(),
            date: date.to_string(),
            start_time: "10:00".to_string(),
            end_time: "11:00".to_string(),
            subject: "Vocal Jazz".to_string(),
            class_number: "VJ-101".to_string(),
        }
    }

    #[test]
    fn add_assigns_sequential_ids() {
        let mut store = TeacherStore::new();
        assert_eq!(store.add_teacher(draft("Ada")), "1");
        assert_eq!(store.add_teacher(draft("Bea")), "2");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn ids_are_never_reused_after_delete() {
        let mut store = TeacherStore::new();
        store.add_teacher(draft("Ada"));
        let second = store.add_teacher(draft("Bea"));
        assert!(store.delete_teacher(&second));
        let third = store.add_teacher(draft("Cal"));
        assert_eq!(third, "3");
        assert!(store.find_teacher("2").is_none());
        assert!(store.find_teacher("3").is_some());
    }

    #[test]
    fn add_then_delete_restores_count() {
        let mut store = TeacherStore::with_sample_roster();
        let before = store.len();
        let id = store.add_teacher(draft("Ada"));
        assert_eq!(store.len(), before + 1);
        assert!(store.delete_teacher(&id));
        assert_eq!(store.len(), before);
    }

    #[test]
    fn delete_missing_id_returns_false() {
        let mut store = TeacherStore::with_sample_roster();
        assert!(!store.delete_teacher("99"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn update_missing_id_leaves_store_unchanged() {
        let mut store = TeacherStore::with_sample_roster();
        let snapshot = store.teachers().to_vec();
        assert!(!store.update_teacher("99", draft("Ghost")));
        assert_eq!(store.teachers(), snapshot.as_slice());
    }

    #[test]
    fn update_preserves_id_and_position() {
        let mut store = TeacherStore::new();
        store.add_teacher(draft("Ada"));
        store.add_teacher(draft("Bea"));
        assert!(store.update_teacher("1", draft("Ada Lovelace")));
        assert_eq!(store.teachers()[0].id, "1");
        assert_eq!(store.teachers()[0].name, "Ada Lovelace");
        assert_eq!(store.teachers()[1].name, "Bea");
    }

    #[test]
    fn write_paths_drop_incomplete_rows() {
        let mut incoming = draft("Ada");
        incoming.qualifications = vec![
            QualificationDraft {
                name: "Vocal Jazz".to_string(),
                institute: "University of Toronto".to_string(),
            },
            QualificationDraft {
                name: "Vocal Pop".to_string(),
                institute: String::new(),
            },
        ];
        incoming.schedule = vec![
            entry_draft("", "2025-07-08"),
            entry_draft("", "someday"),
            {
                let mut inverted = entry_draft("", "2025-07-09");
                inverted.end_time = "09:00".to_string();
                inverted
            },
        ];

        let mut store = TeacherStore::new();
        let id = store.add_teacher(incoming);
        let teacher = store.find_teacher(&id).unwrap();
        assert_eq!(teacher.qualifications.len(), 1);
        assert_eq!(teacher.detailed_schedule.len(), 1);
        assert_eq!(teacher.detailed_schedule[0].day_of_week, "Tuesday");
    }

    #[test]
    fn blank_entry_ids_follow_the_highest_existing() {
        let mut incoming = draft("Ada");
        incoming.schedule = vec![
            entry_draft("", "2025-07-08"),
            entry_draft("5", "2025-07-09"),
            entry_draft("", "2025-07-10"),
        ];

        let mut store = TeacherStore::new();
        let id = store.add_teacher(incoming);
        let ids: Vec<&str> = store
            .find_teacher(&id)
            .unwrap()
            .detailed_schedule
            .iter()
            .map(|item| item.id.as_str())
            .collect();
        assert_eq!(ids, vec!["6", "5", "7"]);
    }

    #[test]
    fn sample_roster_counts_from_its_size() {
        let mut store = TeacherStore::with_sample_roster();
        assert_eq!(store.len(), 1);
        assert_eq!(store.add_teacher(draft("Ada")), "2");
    }
}
