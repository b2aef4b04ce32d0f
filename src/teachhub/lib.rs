//! # TeachHub Architecture
//!
//! TeachHub is a **UI-agnostic roster library** with a thin terminal
//! client on top. The library owns the data model, the store, and every
//! derivation; the CLI only parses arguments, prompts, and prints.
//!
//! Layering, outermost first:
//!
//! ```text
//! cli (src/teachhub/cli/, wired up by main.rs)
//!     argument parsing, the interactive session, prompts, rendering
//! api (api.rs)
//!     thin facade over commands; owns the TeacherStore
//! commands (commands/*.rs)
//!     one module per operation, pure over (store, inputs) -> CmdResult
//! core (store.rs, model.rs, schedule.rs, calendar.rs, seed.rs)
//!     the roster and the derivations over it
//! ```
//!
//! From `api` inward, code never touches stdout or stderr, never calls
//! `std::process::exit`, and never assumes a terminal, so the same core
//! could back another frontend without change. The roster lives in memory
//! for the lifetime of the process; `export`/`import` snapshot it to JSON.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade, entry point for all operations
//! - [`commands`]: business logic, one module per operation
//! - [`store`]: the in-memory roster and id assignment
//! - [`model`]: record types and draft inputs
//! - [`schedule`]: pure date, time, and subject derivations
//! - [`calendar`]: month-grid projection
//! - [`seed`]: the sample roster
//! - [`config`]: persisted settings
//! - [`error`]: the error type

pub mod api;
pub mod calendar;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod schedule;
pub mod seed;
pub mod store;
