//! Theme persistence across sessions.
//!
//! The selected theme name is the only state that survives restart. It is
//! stored as a single line in the platform data directory; a missing or
//! unreadable file simply means "use the default", and write failures are
//! logged but never abort the session.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::ThemeError;

const THEME_FILE: &str = "theme";

/// File-backed store for the active theme name.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    path: PathBuf,
}

impl ThemeStore {
    /// Store rooted at an explicit data directory.
    pub fn with_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(THEME_FILE),
        }
    }

    /// Store rooted at the platform data directory, or `None` when no
    /// home directory can be determined.
    pub fn from_project_dirs() -> Option<Self> {
        let dirs = directories::ProjectDirs::from("dev", "termfolio", "termfolio")?;
        Some(Self::with_dir(dirs.data_dir()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The persisted theme name, if any. Callers validate the name
    /// against the theme table; a stale name falls back to the default.
    pub fn saved_theme(&self) -> Option<String> {
        let raw = fs::read_to_string(&self.path).ok()?;
        let name = raw.trim();
        if name.is_empty() {
            return None;
        }
        debug!(theme = %name, path = %self.path.display(), "loaded persisted theme");
        Some(name.to_string())
    }

    /// Persist a theme name, creating the data directory if needed.
    pub fn save_theme(&self, name: &str) -> Result<(), ThemeError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|err| ThemeError::Persistence {
                message: format!("creating {}: {err}", parent.display()),
            })?;
        }
        fs::write(&self.path, name).map_err(|err| ThemeError::Persistence {
            message: format!("writing {}: {err}", self.path.display()),
        })?;
        debug!(theme = %name, "persisted theme");
        Ok(())
    }

    /// Persist a theme name, downgrading failures to a warning.
    /// Theme persistence is best effort; the in-session switch already
    /// happened.
    pub fn save_theme_best_effort(&self, name: &str) {
        if let Err(err) = self.save_theme(name) {
            warn!(error = %err, "failed to persist theme selection");
        }
    }
}
