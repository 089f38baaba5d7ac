//! Static UI label text. There is no translation machinery here, only two
//! fixed label tables picked by [`LabelSet`].

use crate::model::{Note, NoteAction, View};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelSet {
    #[default]
    Fr,
    En,
}

#[derive(Debug)]
pub struct Labels {
    pub app_name: &'static str,
    pub search_placeholder: &'static str,
    pub title_placeholder: &'static str,
    pub content_placeholder: &'static str,
    pub view_notes: &'static str,
    pub view_favorites: &'static str,
    pub view_archive: &'static str,
    pub view_trash: &'static str,
    pub add_note: &'static str,
    pub update_note: &'static str,
    pub edit: &'static str,
    pub favorite: &'static str,
    pub archive: &'static str,
    pub unarchive: &'static str,
    pub delete: &'static str,
    pub restore: &'static str,
    pub delete_permanently: &'static str,
    pub empty: &'static str,
}

static FR: Labels = Labels {
    app_name: "NoteApp",
    search_placeholder: "Recherche",
    title_placeholder: "Titre de la note",
    content_placeholder: "Contenu de la note...",
    view_notes: "Accueil",
    view_favorites: "Favoris",
    view_archive: "Archive",
    view_trash: "Corbeille",
    add_note: "Ajouter la note",
    update_note: "Mettre à jour la note",
    edit: "Modifier",
    favorite: "Favori",
    archive: "Archiver",
    unarchive: "Désarchiver",
    delete: "Supprimer",
    restore: "Restaurer",
    delete_permanently: "Supprimer définitivement",
    empty: "Aucune note à afficher",
};

static EN: Labels = Labels {
    app_name: "NoteApp",
    search_placeholder: "Search",
    title_placeholder: "Note title",
    content_placeholder: "Note content...",
    view_notes: "Home",
    view_favorites: "Favorites",
    view_archive: "Archive",
    view_trash: "Trash",
    add_note: "Add note",
    update_note: "Update note",
    edit: "Edit",
    favorite: "Favorite",
    archive: "Archive",
    unarchive: "Unarchive",
    delete: "Delete",
    restore: "Restore",
    delete_permanently: "Delete permanently",
    empty: "No notes to display",
};

impl LabelSet {
    pub fn labels(&self) -> &'static Labels {
        match self {
            LabelSet::Fr => &FR,
            LabelSet::En => &EN,
        }
    }
}

impl FromStr for LabelSet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fr" => Ok(LabelSet::Fr),
            "en" => Ok(LabelSet::En),
            other => Err(format!("Unknown label set: {}", other)),
        }
    }
}

impl Labels {
    pub fn view(&self, view: View) -> &'static str {
        match view {
            View::Notes => self.view_notes,
            View::Favorites => self.view_favorites,
            View::Archive => self.view_archive,
            View::Trash => self.view_trash,
        }
    }

    /// The submit button reads differently while an edit is pending.
    pub fn submit(&self, editing: bool) -> &'static str {
        if editing {
            self.update_note
        } else {
            self.add_note
        }
    }

    pub fn action(&self, action: NoteAction, note: &Note) -> &'static str {
        match action {
            NoteAction::Edit => self.edit,
            NoteAction::ToggleFavorite => self.favorite,
            NoteAction::ToggleArchive if note.archived => self.unarchive,
            NoteAction::ToggleArchive => self.archive,
            NoteAction::MoveToTrash => self.delete,
            NoteAction::Restore => self.restore,
            NoteAction::DeletePermanently => self.delete_permanently,
        }
    }
}
