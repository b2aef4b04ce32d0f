//! Terminal client for the teachhub library. This layer is the only place
//! that knows about stdout, stderr, prompts, and exit codes: setup parses
//! arguments, commands dispatches to the API and drives the interactive
//! session, print renders `CmdResult` values.

pub mod commands;
pub mod print;
pub mod prompt;
pub mod setup;
pub mod styles;

pub use commands::run;
