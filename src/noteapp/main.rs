//! # NoteApp Terminal Client
//!
//! The binary is intentionally thin: the client lives in `cli/`, and this file
//! only invokes `cli::run()` and handles process termination.
//!
//! The client is an interactive session. It reads one command per line from
//! stdin (`title …`, `content …`, `save`, `fav 1`, `view trash`, …), calls the
//! `NoteApi` facade, and re-renders the visible list. Notes live only as long
//! as the process; end of input ends the session.
//!
//! ## Testing Approach
//!
//! - **Commands layer (`commands/`)**: heavy unit testing of the lifecycle logic.
//! - **API layer (`api.rs`)**: dispatch and index resolution.
//! - **CLI layer (`cli/`)**: line splitting and clap parsing of session
//!   commands, rendering of canned notes into strings, and end-to-end sessions
//!   driven through stdin in `tests/`.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
