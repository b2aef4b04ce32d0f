use serde::{Deserialize, Serialize};

use crate::schedule;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Qualification {
    pub name: String,
    pub institute: String,
}

/// One scheduled class. Serialized field names are camelCase so snapshots
/// stay interchangeable with other clients of the same roster format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleItem {
    pub id: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub subject: String,
    pub class_number: String,
    // Derived from `date`; recomputed on every write path, never trusted
    // as input.
    pub day_of_week: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: Address,
    pub qualifications: Vec<Qualification>,
    pub detailed_schedule: Vec<ScheduleItem>,
}

impl Teacher {
    pub fn class_count(&self) -> usize {
        self.detailed_schedule.len()
    }
}

/// Incoming fields for the add and edit flows. Mirrors the flat form shape:
/// address fields inline, entries still unvalidated. Conversion into store
/// records drops incomplete rows, see [`QualificationDraft::build`] and
/// [`ScheduleDraft::build`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeacherDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub street: String,
    pub city: String,
    pub country: String,
    pub qualifications: Vec<QualificationDraft>,
    pub schedule: Vec<ScheduleDraft>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct QualificationDraft {
    pub name: String,
    pub institute: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScheduleDraft {
    /// Kept when editing an existing entry; blank for new entries, the
    /// store assigns the next per-teacher id.
    pub id: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub subject: String,
    pub class_number: String,
}

impl QualificationDraft {
    /// `None` when either field is blank.
    pub fn build(self) -> Option<Qualification> {
        if self.name.trim().is_empty() || self.institute.trim().is_empty() {
            return None;
        }
        Some(Qualification {
            name: self.name,
            institute: self.institute,
        })
    }
}

impl ScheduleDraft {
    /// `None` when the date or either time does not parse, the subject is
    /// blank, or the end time is not after the start time. The weekday is
    /// recomputed from the date here, drafts carry none.
    pub fn build(self) -> Option<ScheduleItem> {
        schedule::parse_date(&self.date)?;
        let start = schedule::parse_time(&self.start_time)?;
        let end = schedule::parse_time(&self.end_time)?;
        if end <= start || self.subject.trim().is_empty() {
            return None;
        }
        let day_of_week = schedule::day_of_week(&self.date).to_string();
        Some(ScheduleItem {
            id: self.id,
            date: self.date,
            start_time: self.start_time,
            end_time: self.end_time,
            subject: self.subject,
            class_number: self.class_number,
            day_of_week,
        })
    }
}

/// Prefills a draft from a stored record, for edit flows and re-imports.
/// Entry ids survive the trip; the derived weekday does not.
impl From<&Teacher> for TeacherDraft {
    fn from(teacher: &Teacher) -> Self {
        TeacherDraft {
            name: teacher.name.clone(),
            email: teacher.email.clone(),
            phone: teacher.phone.clone(),
            street: teacher.address.street.clone(),
            city: teacher.address.city.clone(),
            country: teacher.address.country.clone(),
            qualifications: teacher
                .qualifications
                .iter()
                .map(|q| QualificationDraft {
                    name: q.name.clone(),
                    institute: q.institute.clone(),
                })
                .collect(),
            schedule: teacher
                .detailed_schedule
                .iter()
                .map(|item| ScheduleDraft {
                    id: item.id.clone(),
                    date: item.date.clone(),
                    start_time: item.start_time.clone(),
                    end_time: item.end_time.clone(),
                    subject: item.subject.clone(),
                    class_number: item.class_number.clone(),
                })
                .collect(),
        }
    }
}
