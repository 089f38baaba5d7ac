use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Draft, Note, NoteId};
use crate::session::Session;
use crate::store::DataStore;
use chrono::Utc;
use tracing::debug;

use super::helpers::{find_note, modify_note, title_or_untitled};

/// Commits the session's draft and clears it, whatever the outcome.
pub fn submit<S: DataStore>(store: &mut S, session: &mut Session) -> Result<CmdResult> {
    let (draft, editing) = session.take_draft();
    submit_draft(store, draft, editing)
}

/// With an edit target, overwrites that note's title and content. Without one,
/// stores a new note unless both fields are empty. No trimming is applied.
pub fn submit_draft<S: DataStore>(
    store: &mut S,
    draft: Draft,
    editing: Option<NoteId>,
) -> Result<CmdResult> {
    match editing {
        Some(id) => update(store, &id, draft),
        None => create(store, draft),
    }
}

fn update<S: DataStore>(store: &mut S, id: &NoteId, draft: Draft) -> Result<CmdResult> {
    let Some(note) = modify_note(store, id, "submit_draft", |note| {
        note.title = draft.title;
        note.content = draft.content;
        note.last_modified = Utc::now();
    })?
    else {
        return Ok(CmdResult::not_found());
    };

    let message = CmdMessage::success(format!("Note updated: {}", title_or_untitled(&note)));
    Ok(CmdResult::default()
        .with_message(message)
        .with_affected_note(note))
}

fn create<S: DataStore>(store: &mut S, draft: Draft) -> Result<CmdResult> {
    if draft.is_empty() {
        debug!("empty draft, nothing to create");
        return Ok(CmdResult::rejected());
    }

    let note = Note::new(draft.title, draft.content);
    store.save_note(&note)?;

    let message = CmdMessage::success(format!("Note created: {}", title_or_untitled(&note)));
    Ok(CmdResult::default()
        .with_message(message)
        .with_affected_note(note))
}

/// Loads a copy of the note into the draft and makes it the edit target.
/// Any pending edit is dropped unsaved. Unknown ids leave the session alone.
pub fn begin_edit<S: DataStore>(
    store: &S,
    session: &mut Session,
    id: &NoteId,
) -> Result<CmdResult> {
    let Some(note) = find_note(store, id, "begin_edit")? else {
        return Ok(CmdResult::not_found());
    };

    session.load_for_edit(note.id, Draft::new(note.title.clone(), note.content.clone()));
    let message = CmdMessage::info(format!("Editing: {}", title_or_untitled(&note)));
    Ok(CmdResult::default()
        .with_message(message)
        .with_affected_note(note))
}
