//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every client (the terminal client in `cli/`, tests, or any
//! other front end).
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns the session**: current view, search term, draft and edit target
//!   live in one [`Session`] held here and lent to the commands
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (e.g., converting display indexes to note ids)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O operations**: No stdout, stderr, or file formatting
//! - **Presentation concerns**: Returns data structures, not strings
//!
//! ## Generic Over DataStore
//!
//! `NoteApi<S: DataStore>` is generic over the storage backend, so the same
//! facade runs against any store implementation.

use crate::commands;
use crate::error::{NoteError, Result};
use crate::index::{resolve, DisplayIndex};
use crate::model::{NoteId, View};
use crate::session::Session;
use crate::store::DataStore;
use std::str::FromStr;

pub struct NoteApi<S: DataStore> {
    store: S,
    session: Session,
}

impl<S: DataStore> NoteApi<S> {
    pub fn new(store: S) -> Self {
        Self::with_session(store, Session::default())
    }

    pub fn with_session(store: S, session: Session) -> Self {
        Self { store, session }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn set_view(&mut self, view: View) {
        self.session.set_view(view);
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.session.set_search(term);
    }

    pub fn set_draft_title(&mut self, title: impl Into<String>) {
        self.session.set_draft_title(title);
    }

    pub fn set_draft_content(&mut self, content: impl Into<String>) {
        self.session.set_draft_content(content);
    }

    pub fn submit_draft(&mut self) -> Result<CmdResult> {
        commands::draft::submit(&mut self.store, &mut self.session)
    }

    pub fn begin_edit(&mut self, id: &NoteId) -> Result<CmdResult> {
        commands::draft::begin_edit(&self.store, &mut self.session, id)
    }

    pub fn move_to_trash(&mut self, id: &NoteId) -> Result<CmdResult> {
        commands::trash::move_to_trash(&mut self.store, id)
    }

    pub fn restore_from_trash(&mut self, id: &NoteId) -> Result<CmdResult> {
        commands::trash::restore_from_trash(&mut self.store, id)
    }

    pub fn permanently_delete(&mut self, id: &NoteId) -> Result<CmdResult> {
        commands::purge::run(&mut self.store, id)
    }

    pub fn toggle_archive(&mut self, id: &NoteId) -> Result<CmdResult> {
        commands::archive::toggle(&mut self.store, id)
    }

    pub fn toggle_favorite(&mut self, id: &NoteId) -> Result<CmdResult> {
        commands::favorite::toggle(&mut self.store, id)
    }

    /// The notes to display for the session's view and search term.
    pub fn visible_notes(&self) -> Result<CmdResult> {
        commands::list::run(&self.store, &self.session)
    }

    /// Maps a display index typed by the user to the id it currently shows.
    pub fn resolve_index(&self, input: &str) -> Result<NoteId> {
        let index = DisplayIndex::from_str(input).map_err(NoteError::Api)?;
        let listed = self.visible_notes()?.listed_notes;
        resolve(&listed, index).ok_or_else(|| {
            NoteError::Api(format!(
                "Index {} not found in {} view",
                index,
                self.session.view()
            ))
        })
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel, Outcome};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn api_with(titles: &[&str]) -> NoteApi<InMemoryStore> {
        let mut api = NoteApi::new(InMemoryStore::new());
        for title in titles {
            api.set_draft_title(*title);
            api.submit_draft().unwrap();
        }
        api
    }

    #[test]
    fn submit_draft_uses_session_draft() {
        let mut api = NoteApi::new(InMemoryStore::new());
        api.set_draft_title("Groceries");
        api.set_draft_content("milk, eggs");
        let result = api.submit_draft().unwrap();

        assert_eq!(result.outcome, Outcome::Applied);
        assert!(api.session().draft().is_empty());
        assert_eq!(api.visible_notes().unwrap().listed_notes.len(), 1);
    }

    #[test]
    fn edit_flow_goes_through_session() {
        let mut api = api_with(&["Alpha"]);
        let id = api.resolve_index("1").unwrap();

        api.begin_edit(&id).unwrap();
        assert!(api.session().is_editing());
        api.set_draft_title("Alpha2");
        api.submit_draft().unwrap();

        let listed = api.visible_notes().unwrap().listed_notes;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].note.title, "Alpha2");
    }

    #[test]
    fn resolve_index_uses_current_view() {
        let mut api = api_with(&["A", "B"]);
        let b = api.resolve_index("2").unwrap();
        api.move_to_trash(&b).unwrap();

        assert!(api.resolve_index("2").is_err());
        api.set_view(View::Trash);
        assert_eq!(api.resolve_index("1").unwrap(), b);
    }

    #[test]
    fn resolve_index_rejects_bad_input() {
        let api = api_with(&["A"]);
        assert!(matches!(api.resolve_index("x"), Err(NoteError::Api(_))));
        assert!(matches!(api.resolve_index("5"), Err(NoteError::Api(_))));
    }

    #[test]
    fn dispatches_toggles() {
        let mut api = api_with(&["A"]);
        let id = api.resolve_index("1").unwrap();
        api.toggle_favorite(&id).unwrap();
        api.set_view(View::Favorites);
        assert_eq!(api.visible_notes().unwrap().listed_notes.len(), 1);

        api.toggle_archive(&id).unwrap();
        assert!(api.visible_notes().unwrap().listed_notes.is_empty());

        api.set_view(View::Archive);
        assert!(api.permanently_delete(&id).unwrap().is_applied());
        assert!(api.visible_notes().unwrap().listed_notes.is_empty());
        assert!(!api.restore_from_trash(&id).unwrap().is_applied());
    }
}
