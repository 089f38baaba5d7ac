use clap::{CommandFactory, Parser, Subcommand};
use noteapp::labels::LabelSet;
use noteapp::model::View;
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.1.0" for releases, "0.1.0@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "noteapp", bin_name = "noteapp", version = get_version())]
#[command(about = "In-memory note-taking session for the terminal", long_about = None)]
pub struct Cli {
    /// Verbose output (debug logs on stderr)
    #[arg(short, long)]
    pub verbose: bool,

    /// Directory holding config.json (defaults to the platform config dir)
    #[arg(short, long, value_name = "DIR")]
    pub config: Option<PathBuf>,

    /// View to open the session on (notes, favorites, archive, trash)
    #[arg(long)]
    pub view: Option<View>,
}

/// One line of input inside the session.
#[derive(Parser, Debug)]
#[command(
    name = "noteapp",
    no_binary_name = true,
    disable_help_subcommand = true,
    disable_version_flag = true
)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum SessionCommand {
    /// Set the draft title (empty clears it)
    Title {
        #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Set the draft content (empty clears it)
    Content {
        #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Add the draft as a new note, or save the pending edit
    #[command(alias = "add")]
    Save,

    /// Show the current draft
    Draft,

    /// Load a note into the draft for editing
    #[command(alias = "e")]
    Edit { index: String },

    /// Toggle favorite on a note
    #[command(alias = "star")]
    Fav { index: String },

    /// Toggle archive on a note
    Archive { index: String },

    /// Move a note to the trash
    #[command(alias = "rm")]
    Trash { index: String },

    /// Restore a note from the trash
    Restore { index: String },

    /// Delete a trashed note permanently
    Purge { index: String },

    /// Show one note in full, with its actions
    Show { index: String },

    /// Switch view (notes, favorites, archive, trash)
    #[command(alias = "v")]
    View { name: View },

    /// Filter the list by a search term (no term clears the search)
    #[command(alias = "s")]
    Search {
        #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        term: Vec<String>,
    },

    /// Print the visible notes
    #[command(alias = "ls")]
    List,

    /// Switch label language (fr, en) and remember it in config.json
    Labels { set: LabelSet },

    /// Print help
    Help,

    /// End the session
    #[command(aliases = ["exit", "q"])]
    Quit,
}

/// Command group definitions for help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Draft,
    Note,
    Browse,
    Misc,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Draft => "Draft Commands:",
            CommandGroup::Note => "Per-Note Commands:",
            CommandGroup::Browse => "Browsing:",
            CommandGroup::Misc => "Miscellaneous:",
        }
    }

    /// Returns the group for a given command name
    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "title" | "content" | "save" | "draft" => Some(CommandGroup::Draft),
            "edit" | "fav" | "archive" | "trash" | "restore" | "purge" | "show" => {
                Some(CommandGroup::Note)
            }
            "view" | "search" | "list" => Some(CommandGroup::Browse),
            "labels" | "help" | "quit" => Some(CommandGroup::Misc),
            _ => None,
        }
    }

    /// Returns all groups in display order
    pub fn all() -> &'static [CommandGroup] {
        &[
            CommandGroup::Draft,
            CommandGroup::Note,
            CommandGroup::Browse,
            CommandGroup::Misc,
        ]
    }
}

/// Returns the grouped help for session commands
pub fn get_session_help() -> String {
    let cmd = SessionLine::command();
    let subcommands: Vec<_> = cmd.get_subcommands().collect();

    let mut output = String::new();
    output.push_str("Notes are addressed by their number in the current list.\n");

    for group in CommandGroup::all() {
        let group_cmds: Vec<_> = subcommands
            .iter()
            .filter(|sc| {
                !sc.is_hide_set() && CommandGroup::for_command(sc.get_name()) == Some(*group)
            })
            .collect();

        if !group_cmds.is_empty() {
            output.push('\n');
            output.push_str(&format!("{}\n", group.heading()));
            for sc in group_cmds {
                let name = sc.get_name();
                let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
                output.push_str(&format!("  {:<12} {}\n", name, about));
            }
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(words: &[&str]) -> SessionCommand {
        SessionLine::try_parse_from(words).unwrap().command
    }

    #[test]
    fn parses_multi_word_title() {
        assert_eq!(
            parse(&["title", "Weekly", "plan"]),
            SessionCommand::Title {
                text: vec!["Weekly".into(), "plan".into()]
            }
        );
    }

    #[test]
    fn bare_title_clears() {
        assert_eq!(parse(&["title"]), SessionCommand::Title { text: vec![] });
    }

    #[test]
    fn parses_view_names_through_from_str() {
        assert_eq!(
            parse(&["view", "trash"]),
            SessionCommand::View { name: View::Trash }
        );
        assert!(SessionLine::try_parse_from(["view", "inbox"]).is_err());
    }

    #[test]
    fn aliases_resolve() {
        assert_eq!(parse(&["add"]), SessionCommand::Save);
        assert_eq!(parse(&["exit"]), SessionCommand::Quit);
        assert_eq!(
            parse(&["rm", "2"]),
            SessionCommand::Trash { index: "2".into() }
        );
    }

    #[test]
    fn parses_label_set() {
        assert_eq!(
            parse(&["labels", "en"]),
            SessionCommand::Labels { set: LabelSet::En }
        );
        assert!(SessionLine::try_parse_from(["labels", "de"]).is_err());
    }

    #[test]
    fn index_commands_require_an_index() {
        assert!(SessionLine::try_parse_from(["fav"]).is_err());
    }

    #[test]
    fn help_lists_every_group() {
        let help = get_session_help();
        for group in CommandGroup::all() {
            assert!(help.contains(group.heading()));
        }
        assert!(help.contains("purge"));
    }

    #[test]
    fn top_level_args_parse() {
        let cli = Cli::try_parse_from(["noteapp", "--view", "archive", "-v"]).unwrap();
        assert_eq!(cli.view, Some(View::Archive));
        assert!(cli.verbose);
    }
}
