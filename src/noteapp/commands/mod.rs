use crate::index::DisplayNote;
use crate::model::Note;

pub mod archive;
pub mod draft;
pub mod favorite;
pub mod helpers;
pub mod list;
pub mod purge;
pub mod trash;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// What a lifecycle operation did.
///
/// Missing ids are not errors: the operation is a no-op and reports
/// `NotFound` so callers and tests can still tell it apart from success.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Outcome {
    #[default]
    Applied,
    NotFound,
    /// A new draft with neither title nor content; nothing was stored.
    Rejected,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub outcome: Outcome,
    pub affected_notes: Vec<Note>,
    pub listed_notes: Vec<DisplayNote>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn not_found() -> Self {
        Self {
            outcome: Outcome::NotFound,
            ..Self::default()
        }
    }

    pub fn rejected() -> Self {
        Self {
            outcome: Outcome::Rejected,
            ..Self::default()
        }
    }

    pub fn is_applied(&self) -> bool {
        self.outcome == Outcome::Applied
    }

    pub fn with_affected_note(mut self, note: Note) -> Self {
        self.affected_notes.push(note);
        self
    }

    pub fn with_listed_notes(mut self, notes: Vec<DisplayNote>) -> Self {
        self.listed_notes = notes;
        self
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }
}
