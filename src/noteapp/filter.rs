//! # View Filter
//!
//! Derives the visible notes from the whole collection: first the view's base
//! set (see [`View::includes`]), then the case-insensitive search over title
//! and content. The input order is kept as-is.
//!
//! This is a pure query. Calling it on every render is fine.

use crate::model::{Note, View};

pub fn filter_notes<'a, I>(notes: I, view: View, search_term: &str) -> Vec<&'a Note>
where
    I: IntoIterator<Item = &'a Note>,
{
    notes
        .into_iter()
        .filter(|note| view.includes(note))
        .filter(|note| note.matches(search_term))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(title: &str, content: &str) -> Note {
        Note::new(title.into(), content.into())
    }

    fn titles(notes: &[&Note]) -> Vec<String> {
        notes.iter().map(|n| n.title.clone()).collect()
    }

    #[test]
    fn notes_view_hides_archived_and_trashed() {
        let plain = note("plain", "");
        let mut archived = note("archived", "");
        archived.archived = true;
        let mut trashed = note("trashed", "");
        trashed.in_trash = true;
        let all = vec![plain, archived, trashed];

        assert_eq!(titles(&filter_notes(&all, View::Notes, "")), vec!["plain"]);
        assert_eq!(
            titles(&filter_notes(&all, View::Archive, "")),
            vec!["archived"]
        );
        assert_eq!(titles(&filter_notes(&all, View::Trash, "")), vec!["trashed"]);
    }

    #[test]
    fn favorites_view_requires_active_favorite() {
        let mut fav = note("fav", "");
        fav.favorite = true;
        let mut archived_fav = note("archived fav", "");
        archived_fav.favorite = true;
        archived_fav.archived = true;
        let all = vec![note("plain", ""), fav, archived_fav];

        assert_eq!(
            titles(&filter_notes(&all, View::Favorites, "")),
            vec!["fav"]
        );
    }

    #[test]
    fn search_applies_after_view_selection() {
        let mut trashed = note("Alpha trashed", "");
        trashed.in_trash = true;
        let all = vec![note("Alpha", "beta"), note("Other", "ALPHA inside"), trashed];

        assert_eq!(
            titles(&filter_notes(&all, View::Notes, "alpha")),
            vec!["Alpha", "Other"]
        );
        assert!(filter_notes(&all, View::Notes, "zzz").is_empty());
    }

    #[test]
    fn preserves_input_order() {
        let all = vec![note("c", ""), note("a", ""), note("b", "")];
        assert_eq!(
            titles(&filter_notes(&all, View::Notes, "")),
            vec!["c", "a", "b"]
        );
    }
}
