//! # act-core
//!
//! Core types and the item-list reconciler for Action Mill.
//!
//! This crate provides the pieces shared by every Action Mill surface:
//! - `ActionItem`, the opaque-but-typed record a language model emits
//! - `Session`, which keeps the item sequence and the kept set consistent
//! - `Controller`, the explicit owner of the running session
//! - Load errors and ignored-entry diagnostics
//! - The prompt that asks a model to produce a loadable payload
//! - JSON Schemas for the input and export payloads

pub mod controller;
pub mod enums;
pub mod errors;
pub mod item;
pub mod payload;
pub mod prompt;
pub mod schema;
pub mod session;

pub use controller::{Action, Change, Controller, Update};
pub use errors::{IgnoreReason, IgnoredEntry, LoadError, SchemaViolation};
pub use item::ActionItem;
pub use payload::ExportPayload;
pub use session::{LoadOptions, LoadReport, Session, SessionState, SessionStats};
