use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "teachhub",
    about = "Teacher roster and schedule management for the command line",
    version,
    after_help = "Run without a command to start an interactive session."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Start with an empty roster instead of the sample data
    #[arg(long, global = true)]
    pub no_seed: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Parser for lines typed at the session prompt: the same grammar as the
/// binary, minus the binary name and the global flags.
#[derive(Parser)]
#[command(name = "teachhub", no_binary_name = true, disable_version_flag = true)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the roster
    #[command(alias = "ls")]
    List,

    /// Show a teacher's profile and current calendar
    Show {
        /// Teacher id
        id: String,
    },

    /// Add a teacher through the prompts
    Add,

    /// Edit a teacher through the prompts, blank keeps the current value
    Edit {
        /// Teacher id
        id: String,
    },

    /// Delete a teacher
    #[command(alias = "rm")]
    Delete {
        /// Teacher id
        id: String,
    },

    /// Show a teacher's month grid
    #[command(alias = "cal")]
    Calendar {
        /// Teacher id
        id: String,
        /// Month as YYYY-MM, current month when omitted
        month: Option<String>,
    },

    /// Show a teacher's classes on one date
    Day {
        /// Teacher id
        id: String,
        /// Date as YYYY-MM-DD
        date: String,
    },

    /// Step the open calendar one month forward
    Next,

    /// Step the open calendar one month back
    Prev,

    /// Write the roster to a JSON snapshot
    Export {
        /// Snapshot path, timestamped file in the current directory when omitted
        path: Option<PathBuf>,
    },

    /// Append teachers from a JSON snapshot
    Import {
        /// Snapshot path
        path: PathBuf,
    },

    /// Show or change settings: `config`, `config <key>`, `config <key> <value>`
    Config {
        /// Setting key (school-name, seed-roster)
        key: Option<String>,
        /// New value, shows the current one when omitted
        #[arg(num_args = 0.., trailing_var_arg = true)]
        value: Vec<String>,
    },

    /// Messages between staff
    Messages,

    /// Leave the interactive session
    #[command(alias = "exit")]
    Quit,
}
