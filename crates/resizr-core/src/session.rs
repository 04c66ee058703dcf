//! The coordinator that owns all mutable state for one run.

use crate::{
    Desktop, GeometryRequest, PreferenceStore, Preferences, Rect, Result, Theme, WindowEntry,
    WindowHandle, directory, filter, geometry,
};

/// Owns the desktop backend, the preferences, and the most recently
/// fetched window list.
///
/// Nothing here is global: commands create a session, use it, and
/// [`close`](Self::close) it to persist preferences.
pub struct Session {
    desktop: Box<dyn Desktop>,
    store: PreferenceStore,
    entries: Vec<WindowEntry>,
}

impl Session {
    pub fn new(desktop: Box<dyn Desktop>, store: PreferenceStore) -> Self {
        Self {
            desktop,
            store,
            entries: Vec::new(),
        }
    }

    /// Re-enumerates windows, replacing the cached list.
    ///
    /// On failure the cached list is left empty.
    pub fn refresh(&mut self) -> Result<&[WindowEntry]> {
        self.entries.clear();
        self.entries = directory::enumerate(self.desktop.as_ref())?;
        Ok(&self.entries)
    }

    /// The list from the last successful [`refresh`](Self::refresh).
    pub fn entries(&self) -> &[WindowEntry] {
        &self.entries
    }

    /// Cached entries whose process name contains `substring`.
    pub fn filtered(&self, substring: &str) -> Vec<WindowEntry> {
        filter::filter(&self.entries, substring)
    }

    /// Cached entries whose process name is exactly `name`.
    pub fn filtered_exact(&self, name: &str) -> Vec<WindowEntry> {
        filter::filter_exact(&self.entries, name)
    }

    pub fn current_rect(&self, handle: WindowHandle) -> Result<Rect> {
        geometry::current_rect(self.desktop.as_ref(), handle)
    }

    /// Applies geometry and, when the request changed the size,
    /// remembers the resulting width and height.
    pub fn apply(&mut self, handle: WindowHandle, request: &GeometryRequest) -> Result<Rect> {
        let rect = geometry::apply(self.desktop.as_ref(), handle, request)?;
        if request.width.is_some() || request.height.is_some() {
            self.store.remember_size(&rect);
        }
        Ok(rect)
    }

    pub fn desktop(&self) -> &dyn Desktop {
        self.desktop.as_ref()
    }

    pub fn preferences(&self) -> &Preferences {
        self.store.get()
    }

    pub fn theme(&self) -> Theme {
        self.store.get().theme()
    }

    /// Flips dark mode and saves it immediately.
    pub fn toggle_theme(&mut self) -> Theme {
        self.store.toggle_theme()
    }

    /// Persists preferences. Failures are logged, never returned.
    pub fn close(self) {
        self.store.close();
    }
}
