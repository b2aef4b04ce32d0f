//! One module per operation. Commands are plain functions over the store
//! and their inputs; they return a [`CmdResult`] describing what happened
//! and never print or exit themselves.

use crate::calendar::MonthView;
use crate::config::HubConfig;
use crate::model::{ScheduleItem, Teacher};

pub mod add;
pub mod calendar;
pub mod config;
pub mod day;
pub mod delete;
pub mod export;
pub mod import;
pub mod list;
pub mod update;
pub mod view;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        CmdMessage {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        CmdMessage {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        CmdMessage {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        CmdMessage {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// One teacher's schedule for a single date, sorted by start time.
#[derive(Debug, Clone)]
pub struct DaySchedule {
    pub date: String,
    pub entries: Vec<ScheduleItem>,
}

/// What a command produced. Renderers pick out the payloads they know how
/// to draw; messages are always rendered, in order.
#[derive(Debug, Default)]
pub struct CmdResult {
    /// Teachers to display as a roster or a single profile
    pub listed_teachers: Vec<Teacher>,
    /// Teachers a mutation touched
    pub affected_teachers: Vec<Teacher>,
    /// A month grid to draw
    pub month_view: Option<MonthView>,
    /// A single day's class list
    pub day_schedule: Option<DaySchedule>,
    /// Configuration to display
    pub config: Option<HubConfig>,
    /// User-facing messages accumulated while running
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_teachers(mut self, teachers: Vec<Teacher>) -> Self {
        self.listed_teachers = teachers;
        self
    }

    pub fn with_affected_teachers(mut self, teachers: Vec<Teacher>) -> Self {
        self.affected_teachers = teachers;
        self
    }

    pub fn with_month_view(mut self, view: MonthView) -> Self {
        self.month_view = Some(view);
        self
    }

    pub fn with_day_schedule(mut self, day: DaySchedule) -> Self {
        self.day_schedule = Some(day);
        self
    }

    pub fn with_config(mut self, config: HubConfig) -> Self {
        self.config = Some(config);
        self
    }
}
