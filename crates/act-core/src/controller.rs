//! Explicit owner of the running session.
//!
//! Presentation code never holds session state of its own. It sends an
//! [`Action`] and re-renders from the [`Update`] that comes back.

use crate::errors::LoadError;
use crate::session::{LoadOptions, LoadReport, Session};

/// A user-triggered operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Load(String),
    Delete(String),
    SetKept { id: String, keep: bool },
    Reset,
}

/// What an applied action did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    Loaded(LoadReport),
    /// `false` when the id was not present.
    Deleted(bool),
    /// `false` when the kept set was already in the requested state or the id
    /// is unknown.
    KeptChanged(bool),
    Reset,
}

/// The session after an action, plus what changed.
#[derive(Debug)]
pub struct Update<'a> {
    pub session: &'a Session,
    pub change: Change,
}

#[derive(Debug, Default)]
pub struct Controller {
    session: Session,
    options: LoadOptions,
}

impl Controller {
    #[must_use]
    pub fn new(options: LoadOptions) -> Self {
        Self {
            session: Session::new(),
            options,
        }
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Apply one action and return the updated session.
    ///
    /// # Errors
    ///
    /// Only [`Action::Load`] can fail; the current session is then unchanged.
    pub fn apply(&mut self, action: Action) -> Result<Update<'_>, LoadError> {
        let change = match action {
            Action::Load(raw) => {
                let (session, report) = Session::load_with(&raw, self.options)?;
                tracing::debug!(
                    loaded = report.loaded,
                    ignored = report.ignored.len(),
                    "session loaded"
                );
                self.session = session;
                Change::Loaded(report)
            }
            Action::Delete(id) => {
                let changed = self.session.delete(&id);
                tracing::debug!(%id, changed, "delete");
                Change::Deleted(changed)
            }
            Action::SetKept { id, keep } => {
                let changed = self.session.set_kept(&id, keep);
                tracing::debug!(%id, keep, changed, "set kept");
                Change::KeptChanged(changed)
            }
            Action::Reset => {
                self.session.reset();
                tracing::debug!("session reset");
                Change::Reset
            }
        };

        Ok(Update {
            session: &self.session,
            change,
        })
    }
}
