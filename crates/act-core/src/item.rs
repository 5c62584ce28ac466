//! The action item record.
//!
//! Only `id` is structural. Everything else a model emits is kept verbatim in
//! an ordered field bag so that exports reproduce the input exactly, and the
//! typed accessors below read from that bag without ever failing.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::enums::{EffortLevel, Priority};
use crate::errors::IgnoreReason;

/// One discrete, independently executable task.
///
/// Deserialization goes through [`ActionItem::from_entry`], so a decoded item
/// always carries a non-empty string id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct ActionItem {
    pub id: String,
    /// Every other field of the entry, ordered by key.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl ActionItem {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: Map::new(),
        }
    }

    /// Builder-style field setter.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Turn one raw entry of the `items` list into an item.
    ///
    /// # Errors
    ///
    /// Returns the [`IgnoreReason`] when the entry is not an object or lacks a
    /// non-empty string `id`. Duplicate detection is the caller's job.
    pub fn from_entry(entry: Value) -> Result<Self, IgnoreReason> {
        let Value::Object(mut fields) = entry else {
            return Err(IgnoreReason::NotAnObject);
        };
        let id = match fields.remove("id") {
            None => return Err(IgnoreReason::MissingId),
            Some(Value::String(id)) if id.trim().is_empty() => return Err(IgnoreReason::EmptyId),
            Some(Value::String(id)) => id,
            Some(_) => return Err(IgnoreReason::NonStringId),
        };
        Ok(Self { id, fields })
    }

    /// Raw field lookup, trying each key in order.
    #[must_use]
    pub fn field(&self, keys: &[&str]) -> Option<&Value> {
        keys.iter().find_map(|key| self.fields.get(*key))
    }

    fn text(&self, keys: &[&str]) -> Option<&str> {
        self.field(keys)
            .and_then(Value::as_str)
            .filter(|value| !value.trim().is_empty())
    }

    fn text_list(&self, keys: &[&str]) -> Vec<&str> {
        self.field(keys)
            .and_then(Value::as_array)
            .map(|values| values.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.text(&["titre", "title"])
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.text(&["description"])
    }

    #[must_use]
    pub fn action(&self) -> Option<&str> {
        self.text(&["action"])
    }

    #[must_use]
    pub fn priority(&self) -> Option<Priority> {
        self.text(&["priorite", "priority"]).and_then(Priority::parse)
    }

    #[must_use]
    pub fn expected_effect(&self) -> Option<&str> {
        self.text(&["effet_attendu", "expected_effect"])
    }

    /// Estimated duration in minutes. Accepts integers and numeric strings.
    #[must_use]
    pub fn estimated_minutes(&self) -> Option<u64> {
        match self.field(&["temps_estime_min", "estimated_minutes"])? {
            Value::Number(number) => number.as_u64(),
            Value::String(text) => text.trim().parse().ok(),
            _ => None,
        }
    }

    #[must_use]
    pub fn effort(&self) -> Option<EffortLevel> {
        match self.field(&["niveau_d_effort", "effort"])? {
            Value::Number(number) => number.as_u64().and_then(EffortLevel::from_level),
            Value::String(text) => EffortLevel::parse(text),
            _ => None,
        }
    }

    /// Ids of items this one depends on.
    #[must_use]
    pub fn dependencies(&self) -> Vec<&str> {
        self.text_list(&["dependances", "dependencies"])
    }

    #[must_use]
    pub fn tags(&self) -> Vec<&str> {
        self.text_list(&["tags"])
    }

    #[must_use]
    pub fn suggested_status(&self) -> Option<&str> {
        self.text(&["statut_suggere", "status"])
    }

    #[must_use]
    pub fn suggested_next(&self) -> Option<&str> {
        self.text(&["suggested_next"])
    }
}

impl TryFrom<Value> for ActionItem {
    type Error = IgnoreReason;

    fn try_from(entry: Value) -> Result<Self, Self::Error> {
        Self::from_entry(entry)
    }
}
