//! Load errors and ignored-entry diagnostics.
//!
//! Every variant of [`LoadError`] aborts only the `load` that raised it; the
//! session that was current before the call is left untouched. Entries that
//! are dropped while filtering are not errors and are reported through
//! [`IgnoredEntry`] instead.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Errors raised while loading a payload.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// Input was empty or whitespace only.
    #[error("Input is empty")]
    Empty,

    /// Input is not valid JSON.
    #[error("Invalid JSON at line {line}, column {column}: {message}")]
    Parse {
        line: usize,
        column: usize,
        message: String,
    },

    /// Input is valid JSON but not a loadable payload.
    #[error("Invalid payload: {0}")]
    Schema(SchemaViolation),
}

impl LoadError {
    /// Whether the failure happened before the JSON could be parsed.
    #[must_use]
    pub const fn is_parse(&self) -> bool {
        matches!(self, Self::Empty | Self::Parse { .. })
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(error: serde_json::Error) -> Self {
        Self::Parse {
            line: error.line(),
            column: error.column(),
            message: error.to_string(),
        }
    }
}

/// Ways a well-formed JSON document can fail to be a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaViolation {
    /// Top-level value is not an object.
    NotAnObject,
    /// Top-level object has no `items` field.
    MissingItems,
    /// `items` is present but is not an array.
    ItemsNotAList,
}

impl fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NotAnObject => "top-level value must be an object",
            Self::MissingItems => "'items' field is missing",
            Self::ItemsNotAList => "'items' must be a list",
        })
    }
}

/// Why an entry of `items` was left out of the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", content = "id", rename_all = "snake_case")]
pub enum IgnoreReason {
    NotAnObject,
    MissingId,
    NonStringId,
    EmptyId,
    DuplicateId(String),
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnObject => f.write_str("entry is not an object"),
            Self::MissingId => f.write_str("entry has no 'id'"),
            Self::NonStringId => f.write_str("'id' is not a string"),
            Self::EmptyId => f.write_str("'id' is empty"),
            Self::DuplicateId(id) => write!(f, "duplicate id '{id}'"),
        }
    }
}

/// An entry dropped during load, by its position in the input `items` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IgnoredEntry {
    pub index: usize,
    #[serde(flatten)]
    pub reason: IgnoreReason,
}
