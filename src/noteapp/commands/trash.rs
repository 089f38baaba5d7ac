use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::NoteId;
use crate::store::DataStore;

use super::helpers::{modify_note, title_or_untitled};

pub fn move_to_trash<S: DataStore>(store: &mut S, id: &NoteId) -> Result<CmdResult> {
    set_in_trash(store, id, true)
}

pub fn restore_from_trash<S: DataStore>(store: &mut S, id: &NoteId) -> Result<CmdResult> {
    set_in_trash(store, id, false)
}

// Archive and favorite flags are left as they are, so a restored note
// goes back to the view it came from.
fn set_in_trash<S: DataStore>(store: &mut S, id: &NoteId, in_trash: bool) -> Result<CmdResult> {
    let op = if in_trash {
        "move_to_trash"
    } else {
        "restore_from_trash"
    };
    let Some(note) = modify_note(store, id, op, |note| note.in_trash = in_trash)? else {
        return Ok(CmdResult::not_found());
    };

    let text = if in_trash {
        format!("Note moved to trash: {}", title_or_untitled(&note))
    } else {
        format!("Note restored: {}", title_or_untitled(&note))
    };
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(text))
        .with_affected_note(note))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::Outcome;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn trash_and_restore_flip_only_in_trash() {
        let mut fixture = StoreFixture::new().with_favorite_note("Trip");
        let id = fixture.id_at(0);

        move_to_trash(&mut fixture.store, &id).unwrap();
        let note = fixture.store.get_note(&id).unwrap();
        assert!(note.in_trash);
        assert!(note.favorite);

        restore_from_trash(&mut fixture.store, &id).unwrap();
        let note = fixture.store.get_note(&id).unwrap();
        assert!(!note.in_trash);
        assert!(note.favorite);
    }

    #[test]
    fn trashing_twice_is_idempotent() {
        let mut fixture = StoreFixture::new().with_note("Trip", "Paris");
        let id = fixture.id_at(0);
        move_to_trash(&mut fixture.store, &id).unwrap();
        let again = move_to_trash(&mut fixture.store, &id).unwrap();
        assert!(again.is_applied());
        assert!(fixture.store.get_note(&id).unwrap().in_trash);
    }

    #[test]
    fn unknown_id_is_noop() {
        let mut fixture = StoreFixture::new().with_note("Trip", "Paris");
        let result = move_to_trash(&mut fixture.store, &NoteId::new()).unwrap();
        assert_eq!(result.outcome, Outcome::NotFound);
        assert!(result.messages.is_empty());
        assert!(!fixture.store.get_note(&fixture.id_at(0)).unwrap().in_trash);
    }
}
