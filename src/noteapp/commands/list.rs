use crate::commands::CmdResult;
use crate::error::Result;
use crate::filter::filter_notes;
use crate::index::index_notes;
use crate::session::Session;
use crate::store::DataStore;
use tracing::trace;

/// Computes the visible list for the session's view and search term.
pub fn run<S: DataStore>(store: &S, session: &Session) -> Result<CmdResult> {
    let notes = store.list_notes()?;
    let visible = filter_notes(&notes, session.view(), session.search());
    trace!(
        view = %session.view(),
        search = session.search(),
        total = notes.len(),
        visible = visible.len(),
        "recomputed visible notes"
    );

    Ok(CmdResult::default().with_listed_notes(index_notes(visible)))
}
