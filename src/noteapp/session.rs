use crate::model::{Draft, NoteId, View};

/// Per-session UI state: the selected view, the search term, and the single
/// draft slot with its optional edit target.
///
/// Owned by [`crate::api::NoteApi`] and lent to the commands that need it.
#[derive(Debug, Clone, Default)]
pub struct Session {
    view: View,
    search: String,
    draft: Draft,
    editing: Option<NoteId>,
}

impl Session {
    pub fn new(view: View) -> Self {
        Self {
            view,
            ..Self::default()
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn set_view(&mut self, view: View) {
        self.view = view;
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn set_draft_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    pub fn set_draft_content(&mut self, content: impl Into<String>) {
        self.draft.content = content.into();
    }

    pub fn editing(&self) -> Option<NoteId> {
        self.editing
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Loads a copy of a note's fields and makes it the edit target,
    /// discarding whatever was pending.
    pub(crate) fn load_for_edit(&mut self, id: NoteId, draft: Draft) {
        self.editing = Some(id);
        self.draft = draft;
    }

    /// Clears the draft and the edit target, returning what they held.
    pub(crate) fn take_draft(&mut self) -> (Draft, Option<NoteId>) {
        (std::mem::take(&mut self.draft), self.editing.take())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_draft_clears_both_slots() {
        let mut session = Session::default();
        let id = NoteId::new();
        session.load_for_edit(id, Draft::new("t", "c"));
        assert!(session.is_editing());

        let (draft, editing) = session.take_draft();
        assert_eq!(draft, Draft::new("t", "c"));
        assert_eq!(editing, Some(id));
        assert!(session.draft().is_empty());
        assert!(!session.is_editing());
    }

    #[test]
    fn new_session_starts_on_requested_view() {
        let session = Session::new(View::Archive);
        assert_eq!(session.view(), View::Archive);
        assert_eq!(session.search(), "");
    }
}
