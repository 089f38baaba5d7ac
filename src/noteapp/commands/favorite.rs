use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::NoteId;
use crate::store::DataStore;

use super::helpers::{modify_note, title_or_untitled};

pub fn toggle<S: DataStore>(store: &mut S, id: &NoteId) -> Result<CmdResult> {
    let Some(note) = modify_note(store, id, "toggle_favorite", |note| {
        note.favorite = !note.favorite
    })?
    else {
        return Ok(CmdResult::not_found());
    };

    let text = if note.favorite {
        format!("Added to favorites: {}", title_or_untitled(&note))
    } else {
        format!("Removed from favorites: {}", title_or_untitled(&note))
    };
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(text))
        .with_affected_note(note))
}
