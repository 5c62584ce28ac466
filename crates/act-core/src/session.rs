//! Item list reconciler.
//!
//! A [`Session`] owns the ordered item sequence and the set of kept ids and
//! keeps the two consistent: every kept id names an item that is currently
//! present. A session is either empty (nothing loaded yet, or reset) or
//! loaded; only [`Session::load`] produces a loaded session and it either
//! fully succeeds or leaves the caller's current session alone.
//!
//! ```text
//! Empty --load--> Loaded --load--> Loaded
//!   ^               |
//!   +-----reset-----+
//! ```

use std::collections::{BTreeSet, HashSet};

use serde::Serialize;
use serde_json::Value;

use crate::errors::{IgnoreReason, IgnoredEntry, LoadError, SchemaViolation};
use crate::item::ActionItem;
use crate::payload::ExportPayload;

/// Knobs for [`Session::load_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Whether freshly loaded items start out kept.
    pub keep_by_default: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            keep_by_default: true,
        }
    }
}

/// Outcome of a successful load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// Items that made it into the session.
    pub loaded: usize,
    /// Entries that were dropped, in input order.
    pub ignored: Vec<IgnoredEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    Empty,
    Loaded,
}

/// Counters shown next to the item list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionStats {
    pub total: usize,
    pub kept: usize,
}

/// Mutable state of one review.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    items: Vec<ActionItem>,
    kept: BTreeSet<String>,
    intent: String,
    summary: Option<String>,
    raw_input: Option<String>,
}

impl Session {
    /// An empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a payload with every surviving item kept.
    ///
    /// # Errors
    ///
    /// See [`Self::load_with`].
    pub fn load(raw: &str) -> Result<(Self, LoadReport), LoadError> {
        Self::load_with(raw, LoadOptions::default())
    }

    /// Parse `raw` into a fresh session.
    ///
    /// Entries of `items` that are not objects, or lack a non-empty string
    /// `id`, or repeat an earlier id, are dropped and listed in the report.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Empty`] for blank input, [`LoadError::Parse`] for
    /// malformed JSON and [`LoadError::Schema`] when the document is not an
    /// object with an `items` list.
    pub fn load_with(raw: &str, options: LoadOptions) -> Result<(Self, LoadReport), LoadError> {
        if raw.trim().is_empty() {
            return Err(LoadError::Empty);
        }

        let document: Value = serde_json::from_str(raw)?;
        let Value::Object(mut document) = document else {
            return Err(LoadError::Schema(SchemaViolation::NotAnObject));
        };
        let entries = match document.remove("items") {
            None => return Err(LoadError::Schema(SchemaViolation::MissingItems)),
            Some(Value::Array(entries)) => entries,
            Some(_) => return Err(LoadError::Schema(SchemaViolation::ItemsNotAList)),
        };

        let mut report = LoadReport::default();
        let mut seen = HashSet::new();
        let mut items = Vec::with_capacity(entries.len());
        for (index, entry) in entries.into_iter().enumerate() {
            match ActionItem::from_entry(entry) {
                Ok(item) => {
                    if seen.insert(item.id.clone()) {
                        items.push(item);
                    } else {
                        report.ignored.push(IgnoredEntry {
                            index,
                            reason: IgnoreReason::DuplicateId(item.id),
                        });
                    }
                }
                Err(reason) => report.ignored.push(IgnoredEntry { index, reason }),
            }
        }
        report.loaded = items.len();

        for entry in &report.ignored {
            tracing::debug!(index = entry.index, reason = %entry.reason, "ignored entry");
        }

        let kept = if options.keep_by_default {
            items.iter().map(|item| item.id.clone()).collect()
        } else {
            BTreeSet::new()
        };
        let intent = match document.get("seed_intent") {
            Some(Value::String(intent)) => intent.clone(),
            _ => String::new(),
        };
        let summary = match document.get("summary") {
            Some(Value::String(summary)) => Some(summary.clone()),
            _ => None,
        };

        let session = Self {
            items,
            kept,
            intent,
            summary,
            raw_input: Some(raw.to_string()),
        };
        Ok((session, report))
    }

    /// Remove an item and its kept flag. Returns whether anything changed.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        let kept_removed = self.kept.remove(id);
        before != self.items.len() || kept_removed
    }

    /// Mark an item kept or not. Unknown ids are ignored.
    ///
    /// Returns whether the kept set changed.
    pub fn set_kept(&mut self, id: &str, keep: bool) -> bool {
        if !self.contains(id) {
            return false;
        }
        if keep {
            self.kept.insert(id.to_string())
        } else {
            self.kept.remove(id)
        }
    }

    /// Kept items in sequence order, with the current intent.
    #[must_use]
    pub fn export_filtered(&self) -> ExportPayload {
        ExportPayload {
            seed_intent: self.intent.clone(),
            items: self
                .items
                .iter()
                .filter(|item| self.kept.contains(&item.id))
                .cloned()
                .collect(),
        }
    }

    /// Drop everything and return to the empty state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        if self.raw_input.is_some() {
            SessionState::Loaded
        } else {
            SessionState::Empty
        }
    }

    #[must_use]
    pub fn items(&self) -> &[ActionItem] {
        &self.items
    }

    #[must_use]
    pub fn item(&self, id: &str) -> Option<&ActionItem> {
        self.items.iter().find(|item| item.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.item(id).is_some()
    }

    #[must_use]
    pub fn is_kept(&self, id: &str) -> bool {
        self.kept.contains(id)
    }

    #[must_use]
    pub const fn kept_ids(&self) -> &BTreeSet<String> {
        &self.kept
    }

    #[must_use]
    pub fn intent(&self) -> &str {
        &self.intent
    }

    #[must_use]
    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    /// Text of the last successful load.
    #[must_use]
    pub fn raw_input(&self) -> Option<&str> {
        self.raw_input.as_deref()
    }

    #[must_use]
    pub fn stats(&self) -> SessionStats {
        SessionStats {
            total: self.items.len(),
            kept: self.kept.len(),
        }
    }
}
