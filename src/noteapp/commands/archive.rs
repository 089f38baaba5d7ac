use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::NoteId;
use crate::store::DataStore;

use super::helpers::{modify_note, title_or_untitled};

pub fn toggle<S: DataStore>(store: &mut S, id: &NoteId) -> Result<CmdResult> {
    let Some(note) = modify_note(store, id, "toggle_archive", |note| {
        note.archived = !note.archived
    })?
    else {
        return Ok(CmdResult::not_found());
    };

    let verb = if note.archived { "archived" } else { "unarchived" };
    let message = CmdMessage::success(format!("Note {}: {}", verb, title_or_untitled(&note)));
    Ok(CmdResult::default()
        .with_message(message)
        .with_affected_note(note))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::Outcome;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn toggles_archived_flag() {
        let mut fixture = StoreFixture::new().with_note("Groceries", "milk, eggs");
        let id = fixture.id_at(0);

        toggle(&mut fixture.store, &id).unwrap();
        assert!(fixture.store.get_note(&id).unwrap().archived);
        toggle(&mut fixture.store, &id).unwrap();
        assert!(!fixture.store.get_note(&id).unwrap().archived);
    }

    #[test]
    fn archiving_a_trashed_note_keeps_it_in_trash() {
        let mut fixture = StoreFixture::new().with_trashed_note("Bin");
        let id = fixture.id_at(0);
        toggle(&mut fixture.store, &id).unwrap();
        let note = fixture.store.get_note(&id).unwrap();
        assert!(note.archived);
        assert!(note.in_trash);
    }

    #[test]
    fn unknown_id_is_noop() {
        let mut fixture = StoreFixture::new();
        let result = toggle(&mut fixture.store, &NoteId::new()).unwrap();
        assert_eq!(result.outcome, Outcome::NotFound);
    }
}
