use super::logging;
use super::print::{
    print_messages, render_draft, render_full_note, render_heading, render_note_list,
};
use super::setup::{get_session_help, Cli, SessionCommand, SessionLine};
use super::shell::split_words;
use clap::Parser;
use directories::ProjectDirs;
use noteapp::api::{CmdMessage, CmdResult, NoteApi, Outcome};
use noteapp::config::AppConfig;
use noteapp::error::{NoteError, Result};
use noteapp::model::{NoteAction, NoteId};
use noteapp::session::Session;
use noteapp::store::memory::InMemoryStore;
use noteapp::store::DataStore;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use tracing::{debug, warn};

struct AppContext {
    api: NoteApi<InMemoryStore>,
    config: AppConfig,
    /// Where `config.json` lives; `None` when no config dir is known.
    config_dir: Option<PathBuf>,
}

enum Flow {
    Continue,
    Quit,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut ctx = init_context(&cli)?;
    let interactive = io::stdin().is_terminal();

    if interactive {
        println!(
            "{} (type `help` for commands)",
            ctx.config.labels.labels().app_name
        );
    }
    print_list(&ctx)?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            print!("> ");
            io::stdout().flush().map_err(NoteError::Io)?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.map_err(NoteError::Io)?;

        match handle_line(&mut ctx, &line) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(e) => print_messages(&[error_message(&e)]),
        }
    }

    debug!("session closed");
    Ok(())
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = cli.config.clone().or_else(default_config_dir);
    let config = match (&cli.config, &config_dir) {
        (Some(dir), _) => AppConfig::load(dir)?,
        (None, Some(dir)) => AppConfig::load(dir).unwrap_or_else(|e| {
            warn!(dir = %dir.display(), error = %e, "ignoring unreadable config");
            AppConfig::default()
        }),
        (None, None) => AppConfig::default(),
    };

    let view = cli.view.unwrap_or(config.default_view);
    let api = NoteApi::with_session(InMemoryStore::new(), Session::new(view));
    Ok(AppContext {
        api,
        config,
        config_dir,
    })
}

fn default_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "noteapp", "noteapp").map(|dirs| dirs.config_dir().to_path_buf())
}

fn handle_line(ctx: &mut AppContext, line: &str) -> Result<Flow> {
    let words = split_words(line).map_err(NoteError::Api)?;
    if words.is_empty() {
        return Ok(Flow::Continue);
    }

    let parsed = match SessionLine::try_parse_from(&words) {
        Ok(parsed) => parsed,
        Err(e) => {
            // Covers --help as well as real parse errors
            let _ = e.print();
            return Ok(Flow::Continue);
        }
    };

    dispatch(ctx, parsed.command)
}

fn dispatch(ctx: &mut AppContext, command: SessionCommand) -> Result<Flow> {
    match command {
        SessionCommand::Title { text } => {
            ctx.api.set_draft_title(text.join(" "));
            print_draft(ctx);
        }
        SessionCommand::Content { text } => {
            ctx.api.set_draft_content(text.join(" "));
            print_draft(ctx);
        }
        SessionCommand::Draft => print_draft(ctx),
        SessionCommand::Save => {
            let result = ctx.api.submit_draft()?;
            if result.outcome == Outcome::Rejected {
                print_messages(&[CmdMessage::warning(
                    "Nothing to save: title and content are empty",
                )]);
            }
            report(ctx, result)?;
        }
        SessionCommand::Edit { index } => {
            let id = resolve_for(ctx, &index, NoteAction::Edit)?;
            let result = ctx.api.begin_edit(&id)?;
            print_messages(&result.messages);
            print_draft(ctx);
        }
        SessionCommand::Fav { index } => {
            let id = resolve_for(ctx, &index, NoteAction::ToggleFavorite)?;
            let result = ctx.api.toggle_favorite(&id)?;
            report(ctx, result)?;
        }
        SessionCommand::Archive { index } => {
            let id = resolve_for(ctx, &index, NoteAction::ToggleArchive)?;
            let result = ctx.api.toggle_archive(&id)?;
            report(ctx, result)?;
        }
        SessionCommand::Trash { index } => {
            let id = resolve_for(ctx, &index, NoteAction::MoveToTrash)?;
            let result = ctx.api.move_to_trash(&id)?;
            report(ctx, result)?;
        }
        SessionCommand::Restore { index } => {
            let id = resolve_for(ctx, &index, NoteAction::Restore)?;
            let result = ctx.api.restore_from_trash(&id)?;
            report(ctx, result)?;
        }
        SessionCommand::Purge { index } => {
            let id = resolve_for(ctx, &index, NoteAction::DeletePermanently)?;
            let result = ctx.api.permanently_delete(&id)?;
            report(ctx, result)?;
        }
        SessionCommand::Show { index } => {
            let id = ctx.api.resolve_index(&index)?;
            let listed = ctx.api.visible_notes()?.listed_notes;
            if let Some(dn) = listed.iter().find(|dn| dn.note.id == id) {
                print!("{}", render_full_note(dn, ctx.config.labels.labels()));
            }
        }
        SessionCommand::View { name } => {
            ctx.api.set_view(name);
            print_list(ctx)?;
        }
        SessionCommand::Search { term } => {
            ctx.api.set_search(term.join(" "));
            print_list(ctx)?;
        }
        SessionCommand::List => print_list(ctx)?,
        SessionCommand::Labels { set } => {
            ctx.config.labels = set;
            if let Some(dir) = &ctx.config_dir {
                ctx.config.save(dir)?;
                debug!(dir = %dir.display(), "config saved");
            }
            print_list(ctx)?;
        }
        SessionCommand::Help => print!("{}", get_session_help()),
        SessionCommand::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

/// Resolves a display index and checks the note offers `action`, the same
/// way a graphical client only shows the buttons that apply.
fn resolve_for(ctx: &AppContext, index: &str, action: NoteAction) -> Result<NoteId> {
    let id = ctx.api.resolve_index(index)?;
    let note = ctx.api.store().get_note(&id)?;
    if !note.available_actions().contains(&action) {
        return Err(NoteError::Api(format!(
            "\"{}\" is not available for note {}",
            ctx.config.labels.labels().action(action, &note),
            index
        )));
    }
    Ok(id)
}

/// Per-line failures are shown as error messages and the session goes on.
fn error_message(e: &NoteError) -> CmdMessage {
    CmdMessage::error(format!("Error: {}", e))
}

fn report(ctx: &AppContext, result: CmdResult) -> Result<()> {
    print_messages(&result.messages);
    if result.outcome != Outcome::Rejected {
        print_list(ctx)?;
    }
    Ok(())
}

fn print_list(ctx: &AppContext) -> Result<()> {
    let labels = ctx.config.labels.labels();
    let result = ctx.api.visible_notes()?;
    println!("{}", render_heading(labels, ctx.api.session()));
    print!(
        "{}",
        render_note_list(&result.listed_notes, labels, ctx.config.preview_chars)
    );
    Ok(())
}

fn print_draft(ctx: &AppContext) {
    print!(
        "{}",
        render_draft(ctx.api.session(), ctx.config.labels.labels())
    );
}
