//! # Display Indexes
//!
//! Notes are identified internally by [`NoteId`], which nobody wants to type.
//! Clients instead number the currently visible list `1..=n` and refer to notes
//! by that position. An index is only meaningful against the list it was
//! assigned from: changing the view or the search renumbers everything.

use crate::model::{Note, NoteId};
use std::fmt;
use std::str::FromStr;

/// A 1-based position in the visible list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DisplayIndex(pub usize);

impl fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DisplayIndex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<usize>() {
            Ok(n) if n > 0 => Ok(DisplayIndex(n)),
            _ => Err(format!("Invalid index format: {}", s)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DisplayNote {
    pub note: Note,
    pub index: DisplayIndex,
}

/// Numbers notes in the order given.
pub fn index_notes<'a, I>(notes: I) -> Vec<DisplayNote>
where
    I: IntoIterator<Item = &'a Note>,
{
    notes
        .into_iter()
        .enumerate()
        .map(|(i, note)| DisplayNote {
            note: note.clone(),
            index: DisplayIndex(i + 1),
        })
        .collect()
}

/// Finds the id shown at `index`, if any.
pub fn resolve(listed: &[DisplayNote], index: DisplayIndex) -> Option<NoteId> {
    listed
        .iter()
        .find(|dn| dn.index == index)
        .map(|dn| dn.note.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_from_one() {
        let notes = vec![
            Note::new("a".into(), "".into()),
            Note::new("b".into(), "".into()),
        ];
        let indexed = index_notes(&notes);
        assert_eq!(indexed[0].index, DisplayIndex(1));
        assert_eq!(indexed[1].index, DisplayIndex(2));
        assert_eq!(resolve(&indexed, DisplayIndex(2)), Some(notes[1].id));
        assert_eq!(resolve(&indexed, DisplayIndex(3)), None);
    }

    #[test]
    fn rejects_zero_and_garbage() {
        assert_eq!("3".parse::<DisplayIndex>(), Ok(DisplayIndex(3)));
        assert!("0".parse::<DisplayIndex>().is_err());
        assert!("p1".parse::<DisplayIndex>().is_err());
    }
}
