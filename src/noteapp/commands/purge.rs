use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::NoteId;
use crate::store::DataStore;

use super::helpers::{find_note, title_or_untitled};

/// Removes a note from the store for good.
pub fn run<S: DataStore>(store: &mut S, id: &NoteId) -> Result<CmdResult> {
    let Some(note) = find_note(store, id, "permanently_delete")? else {
        return Ok(CmdResult::not_found());
    };

    store.delete_note(id)?;
    let message = CmdMessage::success(format!(
        "Note permanently deleted: {}",
        title_or_untitled(&note)
    ));
    Ok(CmdResult::default()
        .with_message(message)
        .with_affected_note(note))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{archive, draft, favorite, trash, Outcome};
    use crate::session::Session;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn removes_note() {
        let mut fixture = StoreFixture::new().with_trashed_note("Old").with_note("Keep", "");
        let id = fixture.id_at(0);

        let result = run(&mut fixture.store, &id).unwrap();
        assert!(result.is_applied());
        assert_eq!(fixture.store.len(), 1);
        assert!(!fixture.store.contains(&id));
    }

    #[test]
    fn every_operation_after_purge_is_noop() {
        let mut fixture = StoreFixture::new().with_trashed_note("Old");
        let id = fixture.id_at(0);
        run(&mut fixture.store, &id).unwrap();

        let store = &mut fixture.store;
        let mut session = Session::default();
        let outcomes = [
            run(store, &id).unwrap().outcome,
            trash::move_to_trash(store, &id).unwrap().outcome,
            trash::restore_from_trash(store, &id).unwrap().outcome,
            archive::toggle(store, &id).unwrap().outcome,
            favorite::toggle(store, &id).unwrap().outcome,
            draft::begin_edit(&*store, &mut session, &id).unwrap().outcome,
        ];
        assert!(outcomes.iter().all(|o| *o == Outcome::NotFound));
        assert!(store.is_empty());
    }

    #[test]
    fn ids_stay_unique_across_create_purge_and_recreate() {
        use crate::model::Draft;
        use std::collections::HashSet;

        let mut fixture = StoreFixture::new();
        let store = &mut fixture.store;
        let mut seen = HashSet::new();

        for round in 0..20 {
            draft::submit_draft(store, Draft::new(format!("Note {}", round), ""), None).unwrap();
            draft::submit_draft(store, Draft::new("Same", "same"), None).unwrap();

            let listed = store.list_notes().unwrap();
            let live: HashSet<_> = listed.iter().map(|n| n.id).collect();
            assert_eq!(live.len(), listed.len());
            seen.extend(live);

            if round % 2 == 0 {
                let first = listed[0].id;
                run(store, &first).unwrap();
            }
        }

        // 40 creations, none of which reused an id, purged or live
        assert_eq!(seen.len(), 40);
        assert_eq!(store.len(), 30);
    }
}
