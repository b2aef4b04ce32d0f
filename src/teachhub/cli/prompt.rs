use std::io::{BufRead, Write};

use console::style;

use teachhub::error::{HubError, Result};
use teachhub::model::{QualificationDraft, ScheduleDraft, Teacher, TeacherDraft};
use teachhub::schedule;

/// Runs the add/edit wizard over the given reader and writer. With
/// `existing` set its values become the defaults: blank input keeps a
/// default, `-` drops an existing row. Sections end on a blank name or
/// date, and piped input behaves the same as a terminal.
pub(super) fn read_teacher_draft<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    existing: Option<&Teacher>,
) -> Result<TeacherDraft> {
    let mut p = Prompter {
        input,
        out,
        eof: false,
    };
    let mut draft = TeacherDraft::default();

    writeln!(p.out)?;
    writeln!(p.out, "{}", style("Personal information").bold())?;
    draft.name = p.required("Name", existing.map(|t| t.name.as_str()))?;
    draft.email = p.required("Email", existing.map(|t| t.email.as_str()))?;
    draft.phone = p.required("Phone", existing.map(|t| t.phone.as_str()))?;
    draft.street = p.line("Street", existing.map(|t| t.address.street.as_str()))?;
    draft.city = p.line("City", existing.map(|t| t.address.city.as_str()))?;
    draft.country = p.line("Country", existing.map(|t| t.address.country.as_str()))?;

    writeln!(p.out)?;
    writeln!(p.out, "{}", style("Qualifications").bold())?;
    writeln!(
        p.out,
        "{}",
        style("Blank name ends the section; '-' drops a row.").dim()
    )?;
    if let Some(teacher) = existing {
        for qual in &teacher.qualifications {
            let name = p.line("Qualification", Some(&qual.name))?;
            if name == "-" {
                continue;
            }
            let institute = p.line("Institute", Some(&qual.institute))?;
            draft
                .qualifications
                .push(QualificationDraft { name, institute });
        }
    }
    loop {
        let name = p.line("Qualification", None)?;
        if name.is_empty() {
            break;
        }
        let institute = p.line("Institute", None)?;
        draft
            .qualifications
            .push(QualificationDraft { name, institute });
    }

    writeln!(p.out)?;
    writeln!(p.out, "{}", style("Schedule").bold())?;
    writeln!(
        p.out,
        "{}",
        style("Blank date ends the section; '-' drops an entry.").dim()
    )?;
    if let Some(teacher) = existing {
        for item in &teacher.detailed_schedule {
            let date = p.date("Date (YYYY-MM-DD)", Some(&item.date))?;
            if date == "-" {
                continue;
            }
            let start_time = p.line("Start time (24h HH:MM)", Some(&item.start_time))?;
            let end_time = p.line("End time (24h HH:MM)", Some(&item.end_time))?;
            let subject = p.line("Subject", Some(&item.subject))?;
            let class_number = p.line("Class number", Some(&item.class_number))?;
            draft.schedule.push(ScheduleDraft {
                id: item.id.clone(),
                date,
                start_time,
                end_time,
                subject,
                class_number,
            });
        }
    }
    loop {
        let date = p.date("Date (YYYY-MM-DD)", None)?;
        if date.is_empty() {
            break;
        }
        let start_time = p.line("Start time (24h HH:MM)", None)?;
        let end_time = p.line("End time (24h HH:MM)", None)?;
        let subject = p.line("Subject", None)?;
        let class_number = p.line("Class number", None)?;
        draft.schedule.push(ScheduleDraft {
            id: String::new(),
            date,
            start_time,
            end_time,
            subject,
            class_number,
        });
    }

    Ok(draft)
}

struct Prompter<'a, R: BufRead, W: Write> {
    input: &'a mut R,
    out: &'a mut W,
    eof: bool,
}

impl<R: BufRead, W: Write> Prompter<'_, R, W> {
    /// One prompt and answer. Blank input, or the end of input, falls back
    /// to the default, or to empty when there is none.
    fn line(&mut self, label: &str, default: Option<&str>) -> Result<String> {
        if self.eof {
            return Ok(default.unwrap_or_default().to_string());
        }
        match default {
            Some(value) if !value.is_empty() => write!(self.out, "  {} [{}]: ", label, value)?,
            _ => write!(self.out, "  {}: ", label)?,
        }
        self.out.flush()?;

        let mut buffer = String::new();
        if self.input.read_line(&mut buffer)? == 0 {
            self.eof = true;
            return Ok(default.unwrap_or_default().to_string());
        }
        let answer = buffer.trim();
        if answer.is_empty() {
            return Ok(default.unwrap_or_default().to_string());
        }
        Ok(answer.to_string())
    }

    /// Re-prompts until non-empty; errors when input ends first.
    fn required(&mut self, label: &str, default: Option<&str>) -> Result<String> {
        loop {
            let value = self.line(label, default)?;
            if !value.is_empty() {
                return Ok(value);
            }
            if self.eof {
                return Err(HubError::Api(format!("{} is required", label)));
            }
            writeln!(
                self.out,
                "  {}",
                style(format!("{} is required.", label)).yellow()
            )?;
        }
    }

    /// Date prompt. Echoes the weekday for a recognized date and flags
    /// an unrecognized one.
    fn date(&mut self, label: &str, default: Option<&str>) -> Result<String> {
        let date = self.line(label, default)?;
        if date.is_empty() || date == "-" {
            return Ok(date);
        }
        let weekday = schedule::day_of_week(&date);
        if weekday.is_empty() {
            writeln!(
                self.out,
                "    {}",
                style("Unrecognized date, the entry will be dropped.").yellow()
            )?;
        } else {
            writeln!(self.out, "    {}", style(weekday).dim())?;
        }
        Ok(date)
    }
}
