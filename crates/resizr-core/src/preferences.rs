//! User preferences: theme and remembered window size.
//!
//! Stored as a flat TOML document with three keys:
//!
//! ```toml
//! dark_mode = false
//! window_width = 500
//! window_height = 500
//! ```
//!
//! Unknown keys are ignored and missing keys take their defaults.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::geometry::MAX_EXTENT;
use crate::{GeometryRequest, Rect, Theme};

/// Default remembered width in pixels.
pub const DEFAULT_WINDOW_WIDTH: i32 = 500;
/// Default remembered height in pixels.
pub const DEFAULT_WINDOW_HEIGHT: i32 = 500;

/// Persisted user preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Whether the dark theme is active.
    pub dark_mode: bool,
    /// Remembered window width in pixels.
    pub window_width: i32,
    /// Remembered window height in pixels.
    pub window_height: i32,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            dark_mode: false,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

impl Preferences {
    /// Replaces remembered sizes outside `1..=MAX_EXTENT` with the defaults.
    pub fn validate(&mut self) {
        if !(1..=MAX_EXTENT).contains(&self.window_width) {
            self.window_width = DEFAULT_WINDOW_WIDTH;
        }
        if !(1..=MAX_EXTENT).contains(&self.window_height) {
            self.window_height = DEFAULT_WINDOW_HEIGHT;
        }
    }

    /// Returns the theme selected by `dark_mode`.
    pub fn theme(&self) -> Theme {
        Theme::from_dark_mode(self.dark_mode)
    }

    /// Returns a request that applies the remembered size.
    pub fn remembered_size(&self) -> GeometryRequest {
        GeometryRequest::size(self.window_width, self.window_height)
    }
}

/// Reasons a preferences document could not be read or written.
#[derive(Debug, thiserror::Error)]
pub enum PreferencesError {
    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("{path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize preferences: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("could not determine the preferences path")]
    NoPath,
}

impl PreferencesError {
    fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }

    fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

/// Tries to read and parse the preferences at `path`.
pub fn try_load(path: &Path) -> Result<Preferences, PreferencesError> {
    let content = fs::read_to_string(path).map_err(|e| PreferencesError::io(path, e))?;
    let mut prefs: Preferences = toml::from_str(&content).map_err(|e| PreferencesError::Parse {
        path: path.display().to_string(),
        source: e,
    })?;
    prefs.validate();
    Ok(prefs)
}

/// Loads preferences, falling back to defaults.
///
/// A missing file silently yields defaults; unreadable or corrupt files
/// are logged and also yield defaults.
pub fn load(path: &Path) -> Preferences {
    match try_load(path) {
        Ok(prefs) => prefs,
        Err(e) if e.is_not_found() => Preferences::default(),
        Err(e) => {
            warn!(error = %e, "ignoring unreadable preferences");
            Preferences::default()
        }
    }
}

/// Writes `prefs` to `path`, creating the parent directory if needed.
pub fn save(path: &Path, prefs: &Preferences) -> Result<(), PreferencesError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| PreferencesError::io(parent, e))?;
    }
    let content = toml::to_string(prefs)?;
    fs::write(path, content).map_err(|e| PreferencesError::io(path, e))
}

/// Owns the process-wide preferences and where they live on disk.
///
/// Changes are kept in memory and written by [`persist`](Self::persist);
/// toggling the theme writes immediately.
#[derive(Debug)]
pub struct PreferenceStore {
    path: Option<PathBuf>,
    current: Preferences,
    dirty: bool,
}

impl PreferenceStore {
    /// Loads preferences from `path`, or uses defaults when `path` is
    /// `None` (no config directory could be determined).
    pub fn open(path: Option<PathBuf>) -> Self {
        let current = path.as_deref().map(load).unwrap_or_default();
        Self {
            path,
            current,
            dirty: false,
        }
    }

    pub fn get(&self) -> &Preferences {
        &self.current
    }

    /// Mutable access; the store is marked as changed.
    pub fn get_mut(&mut self) -> &mut Preferences {
        self.dirty = true;
        &mut self.current
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Returns whether there are changes not yet written to disk.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Flips dark mode, saves immediately, and returns the new theme.
    pub fn toggle_theme(&mut self) -> Theme {
        self.current.dark_mode = self.current.theme().toggled().is_dark();
        self.dirty = true;
        if let Err(e) = self.persist() {
            warn!(error = %e, "theme change was not saved");
        }
        self.current.theme()
    }

    /// Remembers the size of `rect` for later sessions.
    pub fn remember_size(&mut self, rect: &Rect) {
        if rect.width > 0 && rect.height > 0 {
            let prefs = self.get_mut();
            prefs.window_width = rect.width;
            prefs.window_height = rect.height;
        }
    }

    /// Writes the preferences to disk.
    pub fn persist(&mut self) -> Result<(), PreferencesError> {
        let path = self.path.as_deref().ok_or(PreferencesError::NoPath)?;
        save(path, &self.current)?;
        debug!(path = %path.display(), "preferences saved");
        self.dirty = false;
        Ok(())
    }

    /// Writes pending changes, logging rather than returning failures.
    ///
    /// Called on shutdown; a failed write must not block exit.
    pub fn close(mut self) {
        if !self.dirty {
            return;
        }
        if let Err(e) = self.persist() {
            warn!(error = %e, "preferences were not saved");
        }
    }
}
