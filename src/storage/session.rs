//! Session state repository
//!
//! Persists the budget, currency and balance to session.json, separately
//! from the expense table.

use std::path::{Path, PathBuf};

use crate::error::FinTrackError;
use crate::models::SessionState;

use super::file_io::{read_json, write_json_atomic};

pub struct SessionRepository {
    path: PathBuf,
}

impl SessionRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the session state, falling back to defaults when no file exists
    pub fn try_load(&self) -> Result<SessionState, FinTrackError> {
        read_json(&self.path)
    }

    /// Load the session state. An unreadable file yields the defaults; the
    /// failure is logged.
    pub fn load(&self) -> SessionState {
        self.try_load().unwrap_or_else(|e| {
            tracing::error!(path = %self.path.display(), error = %e, "failed to load session state, using defaults");
            SessionState::default()
        })
    }

    /// Save the session state to disk
    pub fn save(&self, session: &SessionState) -> Result<(), FinTrackError> {
        write_json_atomic(&self.path, session).map_err(|e| {
            tracing::error!(path = %self.path.display(), error = %e, "failed to save session state");
            e
        })
    }
}
