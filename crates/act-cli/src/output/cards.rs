use std::fmt::Write as _;

use act_core::enums::Priority;
use act_core::{ActionItem, Session};

use super::table::ansi_code;

/// Render one item as a text card.
#[must_use]
pub fn render_card(item: &ActionItem, kept: bool, color: bool) -> String {
    let marker = if kept { "[x]" } else { "[ ]" };
    let priority = item.priority();
    let title = item.title().unwrap_or("Untitled");

    let mut heading = format!("{marker} {} · {title}", item.id);
    if let Some(priority) = priority {
        let _ = write!(heading, " ({priority})");
    }
    let heading = match priority.map(Priority::as_str).and_then(ansi_code) {
        Some(code) if color => format!("\u{1b}[1;{code}m{heading}\u{1b}[0m"),
        _ => heading,
    };

    let mut lines = vec![heading];
    let mut line = |label: &str, value: &str| lines.push(format!("    {label:<12}{value}"));

    line("Description", item.description().unwrap_or("N/A"));
    line("Action", item.action().unwrap_or("N/A"));
    line("Effect", item.expected_effect().unwrap_or("N/A"));

    let minutes = item
        .estimated_minutes()
        .map_or_else(|| "N/A".to_string(), |minutes| format!("{minutes} min"));
    let effort = item
        .effort()
        .map_or_else(|| "N/A".to_string(), |effort| effort.to_string());
    line("Time", &format!("{minutes} | effort {effort}"));

    let tags = item.tags();
    line("Tags", &if tags.is_empty() { "none".to_string() } else { tags.join(", ") });

    let dependencies = item.dependencies();
    if !dependencies.is_empty() {
        line("Depends on", &dependencies.join(", "));
    }
    if let Some(status) = item.suggested_status() {
        line("Status", status);
    }
    line("Next", item.suggested_next().unwrap_or("N/A"));

    lines.join("\n")
}

/// Intent header, every card, and the kept counter.
#[must_use]
pub fn render_session(session: &Session, color: bool) -> String {
    let mut out = String::new();
    let intent = if session.intent().is_empty() {
        "(no intent)"
    } else {
        session.intent()
    };
    let _ = writeln!(out, "Intent: {intent}");
    if let Some(summary) = session.summary() {
        let _ = writeln!(out, "Summary: {summary}");
    }

    for item in session.items() {
        out.push('\n');
        out.push_str(&render_card(item, session.is_kept(&item.id), color));
        out.push('\n');
    }

    let stats = session.stats();
    let _ = write!(out, "\n{} items, {} kept", stats.total, stats.kept);
    out
}
