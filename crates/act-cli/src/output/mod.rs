use act_core::{ActionItem, Session, SessionState, SessionStats};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::ui;

pub mod cards;
pub mod table;

/// Serializable snapshot of a session for `json` and `raw` output.
#[derive(Debug, Serialize)]
pub struct SessionView<'a> {
    pub state: SessionState,
    pub seed_intent: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<&'a str>,
    pub stats: SessionStats,
    pub items: Vec<ItemView<'a>>,
}

/// An item with its kept flag. The item stays nested because its opaque
/// field bag may carry a `kept` key of its own.
#[derive(Debug, Serialize)]
pub struct ItemView<'a> {
    pub kept: bool,
    pub item: &'a ActionItem,
}

impl<'a> SessionView<'a> {
    #[must_use]
    pub fn new(session: &'a Session) -> Self {
        Self {
            state: session.state(),
            seed_intent: session.intent(),
            summary: session.summary(),
            stats: session.stats(),
            items: session
                .items()
                .iter()
                .map(|item| ItemView {
                    kept: session.is_kept(&item.id),
                    item,
                })
                .collect(),
        }
    }
}

/// Render a serializable value as JSON; `table` falls back to pretty JSON.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json | OutputFormat::Table => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Render a whole session: cards for `table`, a [`SessionView`] otherwise.
pub fn render_session(session: &Session, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Table => Ok(cards::render_session(session, ui::prefs().color)),
        OutputFormat::Json | OutputFormat::Raw => render(&SessionView::new(session), format),
    }
}

/// Render the item list: an aligned table for `table`, JSON otherwise.
pub fn render_items(session: &Session, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Table => {
            if session.items().is_empty() {
                return Ok(String::from("(no items)"));
            }
            let prefs = ui::prefs();
            Ok(table::render_table(
                &table::ITEM_HEADERS,
                &table::item_rows(session),
                table::TableOptions {
                    max_width: prefs.term_width,
                    color: prefs.color,
                },
            ))
        }
        OutputFormat::Json | OutputFormat::Raw => render(&SessionView::new(session).items, format),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}
