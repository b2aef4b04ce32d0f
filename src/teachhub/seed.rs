//! The sample roster new sessions start with: one Toronto vocal instructor
//! with a July 2025 schedule. Disabled via the `seed-roster` config key or
//! the `--no-seed` flag.

use crate::model::{Address, Qualification, ScheduleItem, Teacher};
use crate::schedule;

pub fn sample_roster() -> Vec<Teacher> {
    vec![Teacher {
        id: "1".to_string(),
        name: "Alynia Allan".to_string(),
        email: "AlyniaAllan@example.com".to_string(),
        phone: "(416) 658-9017".to_string(),
        address: Address {
            street: "123 Anywhere St. Any City".to_string(),
            city: "North York, Ontario".to_string(),
            country: "Canada".to_string(),
        },
        qualifications: vec![
            qual("Vocal Contemporary", "Humber College"),
            qual("Vocal Jazz", "University of Toronto"),
            qual("Vocal Classical", "Royal Conservatory of Music"),
            qual("Vocal Pop", "Seneca College"),
            qual("Instrument", "Royal Conservatory of Music"),
        ],
        detailed_schedule: vec![
            entry("1", "2025-07-08", "16:00", "17:00", "Vocal Jazz", "VJ-101"),
            entry("2", "2025-07-10", "15:00", "16:30", "Vocal Contemporary", "VC-205"),
            entry("3", "2025-07-12", "10:00", "12:00", "Group Session", "GS-301"),
            entry("4", "2025-07-15", "16:00", "17:00", "Vocal Jazz", "VJ-102"),
            entry("5", "2025-07-17", "15:00", "16:30", "Vocal Contemporary", "VC-206"),
            entry("6", "2025-07-19", "10:00", "12:00", "Group Session", "GS-302"),
            entry("7", "2025-07-14", "14:00", "15:00", "Vocal Classical", "VC-101"),
            entry("8", "2025-07-16", "13:00", "14:30", "Vocal Pop", "VP-201"),
        ],
    }]
}

fn qual(name: &str, institute: &str) -> Qualification {
    Qualification {
        name: name.to_string(),
        institute: institute.to_string(),
    }
}

fn entry(
    id: &str,
    date: &str,
    start_time: &str,
    end_time: &str,
    subject: &str,
    class_number: &str,
) -> ScheduleItem {
    ScheduleItem {
        id: id.to_string(),
        date: date.to_string(),
        start_time: start_time.to_string(),
        end_time: end_time.to_string(),
        subject: subject.to_string(),
        class_number: class_number.to_string(),
        day_of_week: schedule::day_of_week(date).to_string(),
    }
}
