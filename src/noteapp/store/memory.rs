use super::DataStore;
use crate::error::{NoteError, Result};
use crate::model::{Note, NoteId};
use indexmap::IndexMap;

/// In-memory note storage. Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    notes: IndexMap<NoteId, Note>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

impl DataStore for InMemoryStore {
    fn save_note(&mut self, note: &Note) -> Result<()> {
        // IndexMap::insert keeps the existing slot when the key already exists
        self.notes.insert(note.id, note.clone());
        Ok(())
    }

    fn get_note(&self, id: &NoteId) -> Result<Note> {
        self.notes
            .get(id)
            .cloned()
            .ok_or(NoteError::NoteNotFound(*id))
    }

    fn list_notes(&self) -> Result<Vec<Note>> {
        Ok(self.notes.values().cloned().collect())
    }

    fn delete_note(&mut self, id: &NoteId) -> Result<()> {
        if self.notes.shift_remove(id).is_none() {
            return Err(NoteError::NoteNotFound(*id));
        }
        Ok(())
    }

    fn contains(&self, id: &NoteId) -> bool {
        self.notes.contains_key(id)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_note(mut self, title: &str, content: &str) -> Self {
            let note = Note::new(title.to_string(), content.to_string());
            self.store.save_note(&note).unwrap();
            self
        }

        pub fn with_favorite_note(mut self, title: &str) -> Self {
            let mut note = Note::new(title.to_string(), "Favorite content".to_string());
            note.favorite = true;
            self.store.save_note(&note).unwrap();
            self
        }

        pub fn with_archived_note(mut self, title: &str) -> Self {
            let mut note = Note::new(title.to_string(), "Archived content".to_string());
            note.archived = true;
            self.store.save_note(&note).unwrap();
            self
        }

        pub fn with_trashed_note(mut self, title: &str) -> Self {
            let mut note = Note::new(title.to_string(), "Trashed content".to_string());
            note.in_trash = true;
            self.store.save_note(&note).unwrap();
            self
        }

        /// Id of the note saved at `position` (0-based, insertion order).
        pub fn id_at(&self, position: usize) -> NoteId {
            self.store.list_notes().unwrap()[position].id
        }
    }
}
