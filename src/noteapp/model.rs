use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Stable identifier of a note. Random v4 UUIDs, so notes created within the
/// same clock tick never collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoteId(Uuid);

impl NoteId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub last_modified: DateTime<Utc>,
    pub archived: bool,
    pub favorite: bool,
    pub in_trash: bool,
}

impl Note {
    pub fn new(title: String, content: String) -> Self {
        let now = Utc::now();
        Self {
            id: NoteId::new(),
            title,
            content,
            created_at: now,
            last_modified: now,
            archived: false,
            favorite: false,
            in_trash: false,
        }
    }

    /// Case-insensitive substring match against title or content.
    /// An empty term matches every note.
    pub fn matches(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        let term = term.to_lowercase();
        self.title.to_lowercase().contains(&term) || self.content.to_lowercase().contains(&term)
    }

    /// Actions a client should offer for this note. Trashed notes can only be
    /// restored or removed for good.
    pub fn available_actions(&self) -> Vec<NoteAction> {
        if self.in_trash {
            vec![NoteAction::Restore, NoteAction::DeletePermanently]
        } else {
            vec![
                NoteAction::Edit,
                NoteAction::ToggleFavorite,
                NoteAction::ToggleArchive,
                NoteAction::MoveToTrash,
            ]
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoteAction {
    Edit,
    ToggleFavorite,
    ToggleArchive,
    MoveToTrash,
    Restore,
    DeletePermanently,
}

/// The in-progress title/content pair. Holds copies, never references into the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub title: String,
    pub content: String,
}

impl Draft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.content.is_empty()
    }
}

/// A named predicate over the note collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Notes,
    Favorites,
    Archive,
    Trash,
}

impl View {
    pub fn all() -> &'static [View] {
        &[View::Notes, View::Favorites, View::Archive, View::Trash]
    }

    pub fn name(&self) -> &'static str {
        match self {
            View::Notes => "notes",
            View::Favorites => "favorites",
            View::Archive => "archive",
            View::Trash => "trash",
        }
    }

    /// Whether a note belongs to this view, before any search filtering.
    /// Trash wins over archive, and archive wins over favorite.
    pub fn includes(&self, note: &Note) -> bool {
        match self {
            View::Trash => note.in_trash,
            View::Archive => note.archived && !note.in_trash,
            View::Favorites => note.favorite && !note.archived && !note.in_trash,
            View::Notes => !note.archived && !note.in_trash,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for View {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "notes" | "home" => Ok(View::Notes),
            "favorites" | "favs" => Ok(View::Favorites),
            "archive" => Ok(View::Archive),
            "trash" => Ok(View::Trash),
            other => Err(format!("Unknown view: {}", other)),
        }
    }
}
