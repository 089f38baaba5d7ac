//! # CLI Behavior
//!
//! This is **one possible UI client** for the note core, not the application itself.
//! It is the only place that knows about terminal I/O, exit codes, and output formatting.
//!
//! ## Session Loop
//!
//! Starting `noteapp` opens a session on the configured default view (or
//! `--view`). Each input line is split into words, double or single quotes
//! grouping words, then parsed by clap as one session command. A bad line
//! prints an error and the loop carries on. `quit`, `exit` or end of input
//! closes the session.
//!
//! Notes are addressed by their position in the list currently on screen, so
//! `trash 2` trashes the second note shown. Changing the view or the search
//! renumbers the list.
//!
//! ## Module Structure
//!
//! - `commands`: Session loop and per-command handlers
//! - `logging`: tracing subscriber setup
//! - `print`: Output formatting (lists, notes, messages)
//! - `setup`: Argument parsing via clap, help text
//! - `shell`: Splitting input lines into words
//! - `styles`: Terminal styling constants

mod commands;
mod logging;
mod print;
pub mod setup;
mod shell;
mod styles;

pub use commands::run;
