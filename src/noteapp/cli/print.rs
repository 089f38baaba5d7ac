use super::styles::STYLES;
use chrono::{DateTime, Utc};
use colored::Colorize;
use noteapp::api::{CmdMessage, MessageLevel};
use noteapp::commands::helpers::title_or_untitled;
use noteapp::index::DisplayNote;
use noteapp::labels::Labels;
use noteapp::session::Session;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const FAVORITE_MARKER: &str = "★";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

pub(super) fn render_heading(labels: &Labels, session: &Session) -> String {
    let mut heading = format!("── {} ──", labels.view(session.view()));
    if !session.search().is_empty() {
        heading.push_str(&format!(
            " {}: \"{}\"",
            labels.search_placeholder,
            session.search()
        ));
    }
    STYLES.heading.apply_to(heading).to_string()
}

pub(super) fn render_note_list(
    notes: &[DisplayNote],
    labels: &Labels,
    preview_chars: usize,
) -> String {
    if notes.is_empty() {
        return format!("  {}\n", labels.empty);
    }

    let mut output = String::new();
    for dn in notes {
        let idx_str = format!("{}. ", dn.index);
        let marker = if dn.note.favorite {
            format!("{} ", FAVORITE_MARKER)
        } else {
            "  ".to_string()
        };

        let title = title_or_untitled(&dn.note);
        let preview: String = dn
            .note
            .content
            .chars()
            .take(preview_chars)
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();

        let fixed_width = 2 + idx_str.width() + marker.width() + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);

        let title_display = truncate_to_width(title, available);
        let remaining = available.saturating_sub(title_display.width());
        let preview_display = if preview.is_empty() || remaining < 2 {
            String::new()
        } else {
            truncate_to_width(&format!(" {}", preview), remaining)
        };
        let padding = remaining.saturating_sub(preview_display.width());

        output.push_str(&format!(
            "  {}{}{}{}{}{}\n",
            STYLES.index.apply_to(idx_str),
            STYLES.favorite.apply_to(marker),
            STYLES.title.apply_to(title_display),
            STYLES.preview.apply_to(preview_display),
            " ".repeat(padding),
            STYLES.time.apply_to(format_time_ago(dn.note.last_modified)),
        ));
    }
    output
}

pub(super) fn render_full_note(dn: &DisplayNote, labels: &Labels) -> String {
    let note = &dn.note;
    let actions: Vec<String> = note
        .available_actions()
        .into_iter()
        .map(|action| format!("[{}]", labels.action(action, note)))
        .collect();

    let mut output = format!(
        "{} {}\n",
        STYLES.index.apply_to(dn.index),
        STYLES.title.apply_to(title_or_untitled(note))
    );
    output.push_str("--------------------------------\n");
    if !note.content.is_empty() {
        output.push_str(&note.content);
        output.push('\n');
    }
    output.push_str("--------------------------------\n");
    output.push_str(&format!(
        "{}\n",
        STYLES.time.apply_to(format!(
            "created {} · modified {}",
            note.created_at.format("%Y-%m-%d %H:%M"),
            note.last_modified.format("%Y-%m-%d %H:%M")
        ))
    ));
    output.push_str(&actions.join(" "));
    output.push('\n');
    output
}

pub(super) fn render_draft(session: &Session, labels: &Labels) -> String {
    let draft = session.draft();
    format!(
        "{}\n{}\n[{}]\n",
        STYLES
            .draft
            .apply_to(format!("{}: {}", labels.title_placeholder, draft.title)),
        STYLES
            .draft
            .apply_to(format!("{} {}", labels.content_placeholder, draft.content)),
        labels.submit(session.is_editing())
    )
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let time_str = Formatter::new().convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
