//! # Storage Layer
//!
//! The [`DataStore`] trait is the seam between the note lifecycle logic in
//! `commands/` and wherever the notes actually live.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: the session store. Notes live for the lifetime
//!   of the process and are discarded with it.
//!
//! ## Ordering
//!
//! Stores must list notes in insertion order. Updating a note in place keeps
//! its position; removing a note does not reorder the rest. The view filter
//! relies on this, since it never sorts.

use crate::error::Result;
use crate::model::{Note, NoteId};

pub mod memory;

/// Abstract interface for note storage.
pub trait DataStore {
    /// Save a note (create or update in place)
    fn save_note(&mut self, note: &Note) -> Result<()>;

    /// Get a note by ID
    fn get_note(&self, id: &NoteId) -> Result<Note>;

    /// List all notes, in insertion order
    fn list_notes(&self) -> Result<Vec<Note>>;

    /// Delete a note permanently
    fn delete_note(&mut self, id: &NoteId) -> Result<()>;

    fn contains(&self, id: &NoteId) -> bool {
        self.get_note(id).is_ok()
    }
}
