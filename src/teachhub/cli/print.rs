use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use teachhub::api::{CmdMessage, DaySchedule, MessageLevel};
use teachhub::calendar::MonthView;
use teachhub::config::HubConfig;
use teachhub::model::Teacher;
use teachhub::schedule;

use super::styles;

const LINE_WIDTH: usize = 100;
const NAME_WIDTH: usize = 24;
const SUBJECTS_WIDTH: usize = 34;
const COUNT_WIDTH: usize = 9;
// id column (3 + ". ") plus the inter-column gaps
const EMAIL_WIDTH: usize = LINE_WIDTH - 5 - NAME_WIDTH - SUBJECTS_WIDTH - COUNT_WIDTH - 3;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_banner(school_name: &str, count: usize) {
    println!();
    println!("{}  {}", "TeachHub".bold().cyan(), school_name.bold());
    println!(
        "{}",
        format!(
            "{} on the roster. Type help for commands, quit to leave.",
            pluralize(count, "teacher", "teachers")
        )
        .dimmed()
    );
    println!();
}

pub(super) fn print_roster(teachers: &[Teacher]) {
    if teachers.is_empty() {
        println!("No teachers found.");
        return;
    }
    println!();
    for (i, teacher) in teachers.iter().enumerate() {
        let name = pad_to_width(&teacher.name, NAME_WIDTH);
        let subjects = pad_to_width(
            &schedule::subjects_summary(&teacher.detailed_schedule),
            SUBJECTS_WIDTH,
        );
        let email = pad_to_width(&teacher.email, EMAIL_WIDTH);
        let classes = format!(
            "{:>width$}",
            pluralize(teacher.class_count(), "class", "classes"),
            width = COUNT_WIDTH
        );
        println!(
            "{:>3}. {} {} {} {}",
            teacher.id,
            styles::roster_style(i).apply_to(name),
            subjects.dimmed(),
            email,
            classes.dimmed()
        );
    }
    println!();
}

pub(super) fn print_profile(teacher: &Teacher) {
    println!();
    println!("{}", teacher.name.bold());
    println!(
        "{}",
        schedule::subjects_summary(&teacher.detailed_schedule).dimmed()
    );
    println!();
    println!("  Email:    {}", teacher.email);
    println!("  Phone:    {}", teacher.phone);
    let address = [
        teacher.address.street.as_str(),
        teacher.address.city.as_str(),
        teacher.address.country.as_str(),
    ]
    .iter()
    .filter(|part| !part.is_empty())
    .copied()
    .collect::<Vec<_>>()
    .join(", ");
    if !address.is_empty() {
        println!("  Address:  {}", address);
    }
    println!(
        "  Classes:  {}",
        pluralize(teacher.class_count(), "class", "classes")
    );
    if !teacher.qualifications.is_empty() {
        println!();
        println!("  {}", "Qualifications".bold());
        for q in &teacher.qualifications {
            println!("    {}{}", pad_to_width(&q.name, 24), q.institute.dimmed());
        }
    }
    println!();
}

pub(super) fn print_calendar(view: &MonthView) {
    println!();
    println!("  {}", view.label.bold());
    let header: String = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"]
        .iter()
        .map(|d| format!("{:>3}    ", d))
        .collect();
    println!("{}", header.dimmed());
    for week in view.cells.chunks(7) {
        let mut row = String::new();
        for cell in week {
            match cell {
                None => row.push_str("       "),
                Some(c) => {
                    let day = format!("{:>3}", c.day);
                    let day = if c.is_today {
                        day.reversed().to_string()
                    } else if c.has_schedule() {
                        day.bold().to_string()
                    } else {
                        day
                    };
                    let marks = if c.class_count > 3 {
                        "···+".to_string()
                    } else {
                        "·".repeat(c.class_count)
                    };
                    // pad before colouring so escape codes stay out of the width
                    let marks = format!("{:<4}", marks);
                    row.push_str(&day);
                    row.push_str(&marks.green().to_string());
                }
            }
        }
        println!("{}", row);
    }
    println!("{}", "  · one class per dot, + more than three".dimmed());
    println!();
}

pub(super) fn print_day_schedule(name: &str, day: &DaySchedule) {
    println!();
    println!("{}", name.bold());
    println!("{}", schedule::format_long_date(&day.date).dimmed());
    println!();
    if day.entries.is_empty() {
        println!("No classes scheduled for this day.");
        println!();
        return;
    }
    println!(
        "{}",
        format!(
            "{} scheduled",
            pluralize(day.entries.len(), "class", "classes")
        )
        .dimmed()
    );
    for item in &day.entries {
        let times = format!(
            "{} - {}",
            schedule::format_time_of_day(&item.start_time),
            schedule::format_time_of_day(&item.end_time)
        );
        let duration = format!(
            "({})",
            schedule::duration_between(&item.start_time, &item.end_time)
        );
        let subject = styles::subject_style(schedule::subject_color(&item.subject))
            .apply_to(pad_to_width(&item.subject, 20));
        println!(
            "  {} {} {} {}",
            pad_to_width(&times, 21),
            pad_to_width(&duration, 9).dimmed(),
            subject,
            item.class_number.dimmed()
        );
    }
    println!();
}

pub(super) fn print_config(config: &HubConfig) {
    println!("school-name = {}", config.school_name);
    println!("seed-roster = {}", config.seed_roster);
}

fn pluralize(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

/// Pads or truncates to an exact display width, unicode-aware.
fn pad_to_width(s: &str, width: usize) -> String {
    let truncated = truncate_to_width(s, width);
    let padding = width.saturating_sub(truncated.width());
    format!("{}{}", truncated, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}
