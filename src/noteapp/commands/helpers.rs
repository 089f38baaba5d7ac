use crate::error::{NoteError, Result};
use crate::model::{Note, NoteId};
use crate::store::DataStore;
use tracing::debug;

/// Loads a note, applies `apply` to it and saves it back.
///
/// Returns `Ok(None)` when the id is unknown; every other store error propagates.
pub fn modify_note<S, F>(store: &mut S, id: &NoteId, op: &str, apply: F) -> Result<Option<Note>>
where
    S: DataStore,
    F: FnOnce(&mut Note),
{
    let Some(mut note) = find_note(store, id, op)? else {
        return Ok(None);
    };
    apply(&mut note);
    store.save_note(&note)?;
    Ok(Some(note))
}

/// Like [`DataStore::get_note`], but maps a missing note to `None`.
pub fn find_note<S: DataStore>(store: &S, id: &NoteId, op: &str) -> Result<Option<Note>> {
    match store.get_note(id) {
        Ok(note) => Ok(Some(note)),
        Err(NoteError::NoteNotFound(_)) => {
            debug!(%id, op, "note not found, ignoring");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Display form of a title, since titles may be empty.
pub fn title_or_untitled(note: &Note) -> &str {
    if note.title.is_empty() {
        "(untitled)"
    } else {
        &note.title
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn modify_note_saves_changes() {
        let mut fixture = StoreFixture::new().with_note("A", "");
        let id = fixture.id_at(0);
        let note = modify_note(&mut fixture.store, &id, "test", |n| n.title = "B".into())
            .unwrap()
            .unwrap();
        assert_eq!(note.title, "B");
        assert_eq!(fixture.store.get_note(&id).unwrap().title, "B");
    }

    #[test]
    fn modify_note_on_missing_id_is_none() {
        let mut fixture = StoreFixture::new().with_note("A", "");
        let result = modify_note(&mut fixture.store, &NoteId::new(), "test", |n| {
            n.title = "B".into()
        })
        .unwrap();
        assert!(result.is_none());
        assert_eq!(fixture.store.len(), 1);
    }
}
